//! XDG-style path utilities for configuration and temporary artifacts.
//!
//! Configuration follows XDG Base Directory conventions on every platform.
//! Temporary artifacts live in the system temp directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Prefix of the per-run stylesheet file in the temp directory.
pub const STYLESHEET_PREFIX: &str = "kindle_style";

/// Prefix applied to the normalized copy of the input file.
pub const PROCESSED_PREFIX: &str = "processed_";

/// Returns the configuration directory for md2kindle.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/md2kindle` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/md2kindle` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join("md2kindle"));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join("md2kindle"))
}

/// Path of the normalized copy of `input` in the system temp directory.
///
/// The name is derived from the input file's name, so `notes.md` maps to
/// `processed_notes.md`.
pub fn processed_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default().to_string_lossy();
    std::env::temp_dir().join(format!("{PROCESSED_PREFIX}{name}"))
}

/// Expands a leading `~/` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
