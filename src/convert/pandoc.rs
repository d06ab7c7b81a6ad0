use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use super::request::{ConversionRequest, OutputFormat};
use crate::ui::Style;
use crate::{markdown, status, stylesheet};

/// Handle to the pandoc executable.
#[derive(Debug, Clone)]
pub struct Pandoc {
    program: String,
}

impl Pandoc {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Verifies the executable runs by asking for its version.
    ///
    /// # Errors
    ///
    /// Returns an error with installation guidance if the program cannot be
    /// started or exits unsuccessfully.
    pub fn check(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => Ok(()),
            _ => bail!(
                "Pandoc is not installed or not in PATH ('{}').\n\n\
                 Please install Pandoc: https://pandoc.org/installing.html",
                self.program
            ),
        }
    }

    /// Builds the argument list for converting `text` to `output`.
    pub fn args(
        request: &ConversionRequest,
        text: &Path,
        output: &Path,
        stylesheet: Option<&Path>,
    ) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            text.into(),
            "-o".into(),
            output.into(),
            "--standalone".into(),
            "--metadata".into(),
            format!("title={}", request.document_title()).into(),
        ];

        if let Some(author) = &request.author {
            args.push("--metadata".into());
            args.push(format!("author={author}").into());
        }

        if let Some(cover) = request.existing_cover() {
            args.push("--epub-cover-image".into());
            args.push(cover.into());
        }

        if let Some(stylesheet) = stylesheet {
            args.push("--css".into());
            args.push(stylesheet.into());
        }

        args.push("--wrap=none".into());
        args.push("--toc".into());
        args
    }

    /// Runs pandoc synchronously with inherited stdio.
    fn run(&self, args: &[OsString]) -> Result<()> {
        let status = Command::new(&self.program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !status.success() {
            bail!("Error during conversion: {} exited with {status}", self.program);
        }

        Ok(())
    }
}

/// Converts the request's input and returns the path of the written document.
///
/// Unless normalization is skipped, a normalized copy of the input is
/// converted instead of the original. The copy and the stylesheet are
/// removed before this returns, on success and on failure. An existing file
/// at the output path is overwritten.
pub fn convert_markdown(pandoc: &Pandoc, request: &ConversionRequest) -> Result<PathBuf> {
    let processed = if request.skip_normalization {
        None
    } else {
        Some(markdown::write_processed(&request.input)?)
    };
    let text = processed
        .as_ref()
        .map_or(request.input.as_path(), |artifact| artifact.path());

    let stylesheet = match request.format {
        OutputFormat::Epub => Some(stylesheet::write_stylesheet()?),
    };

    let output = request.output_path();
    let args = Pandoc::args(
        request,
        text,
        &output,
        stylesheet.as_ref().map(|file| file.path()),
    );

    status!(
        "Converting {} to {}...",
        Style::value(request.input.display()),
        Style::value(output.display())
    );
    pandoc.run(&args)?;
    status!(
        "{} Conversion complete: {}",
        Style::success("✓"),
        output.display()
    );

    Ok(output)
}
