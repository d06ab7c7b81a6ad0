use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Target document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Epub,
}

impl OutputFormat {
    /// File extension for documents of this format, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Epub => "epub",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything needed to convert one Markdown file.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Cover image, passed on only if it exists on disk.
    pub cover: Option<PathBuf>,
    pub format: OutputFormat,
    /// Explicit output path; derived from the input otherwise.
    pub output: Option<PathBuf>,
    /// Convert the input as-is instead of a normalized copy.
    pub skip_normalization: bool,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            title: None,
            author: None,
            cover: None,
            format: OutputFormat::default(),
            output: None,
            skip_normalization: false,
        }
    }

    /// The explicit output path, or the input path with the format's
    /// extension (`notes.md` becomes `notes.epub`).
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension(self.format.extension()))
    }

    /// The explicit title, or the input file's stem.
    pub fn document_title(&self) -> String {
        self.title.clone().unwrap_or_else(|| file_stem(&self.input))
    }

    /// The cover image, if one was given and exists.
    pub fn existing_cover(&self) -> Option<&Path> {
        self.cover.as_deref().filter(|cover| cover.exists())
    }
}

/// Base name of `path` without its extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
