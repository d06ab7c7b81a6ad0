//! CSS passed to pandoc for EPUB output.

use std::io::Write;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::paths;

/// Compact list spacing for e-reader screens.
pub const EPUB_CSS: &str = "
body { margin: 5%; text-align: justify; }
ul { margin-left: 1em; margin-bottom: 0.3em; margin-top: 0.3em; }
li { margin: 0; padding: 0; line-height: 1.2; }
li + li { margin-top: 0; }
li ul, li ol { margin-top: 0; margin-bottom: 0; }
ol { margin-left: 1em; margin-bottom: 0.3em; margin-top: 0.3em; }
ol li { margin: 0; padding: 0; }
p { margin-top: 0.5em; margin-bottom: 0.5em; }
";

/// Writes [`EPUB_CSS`] to a uniquely named file in the temp directory.
///
/// The file is removed when the returned handle drops.
pub fn write_stylesheet() -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(paths::STYLESHEET_PREFIX)
        .suffix(".css")
        .tempfile_in(std::env::temp_dir())
        .context("Failed to create stylesheet file")?;
    file.write_all(EPUB_CSS.as_bytes())
        .and_then(|()| file.flush())
        .context("Failed to write stylesheet file")?;
    Ok(file)
}
