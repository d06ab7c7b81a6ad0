//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A file written for the duration of a single run.
///
/// The file is removed when the guard is dropped, so every return path
/// (including `?` propagation) cleans it up.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Writes `content` to `path`, replacing any existing file, and takes
    /// ownership of its removal.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn create(path: PathBuf, content: &str) -> Result<Self> {
        fs::write(&path, content)
            .with_context(|| format!("Failed to write temporary file: {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        // Already gone is fine.
        let _ = fs::remove_file(&self.path);
    }
}
