use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::{ConversionRequest, OutputFormat};
use crate::paths;

/// Environment variable overriding the converter executable.
pub const PANDOC_ENV: &str = "MD2KINDLE_PANDOC";

/// Converter executable used when nothing else is configured.
pub const DEFAULT_PANDOC: &str = "pandoc";

/// Default settings in the `[md2kindle]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Md2KindleConfig {
    /// Default author when `--author` is omitted.
    pub author: Option<String>,
    /// Default cover image when `--cover` is omitted.
    pub cover: Option<String>,
    /// Path to the pandoc executable.
    pub pandoc: Option<String>,
}

/// Delivery settings in the `[email]` section of config.toml.
///
/// Environment variables take priority over every field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailSection {
    pub address: Option<String>,
    pub password: Option<String>,
    pub smtp_server: Option<String>,
    pub smtp_port: Option<u16>,
    pub kindle: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/md2kindle/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub md2kindle: Md2KindleConfig,
    #[serde(default)]
    pub email: EmailSection,
}

/// Command-line values for a conversion.
///
/// `None` fields fall back to config file settings.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub input: PathBuf,
    pub title: Option<String>,
    pub author: Option<String>,
    pub cover: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub no_formatting_fix: bool,
}

/// Builds the conversion request, filling author and cover from the config
/// file when they were not given on the command line.
pub fn resolve_request(options: RequestOptions, config_file: &ConfigFile) -> ConversionRequest {
    let defaults = &config_file.md2kindle;

    ConversionRequest {
        input: options.input,
        title: options.title,
        author: options.author.or_else(|| defaults.author.clone()),
        cover: options
            .cover
            .or_else(|| defaults.cover.as_deref().map(paths::expand_home)),
        format: options.format,
        output: options.output,
        skip_normalization: options.no_formatting_fix,
    }
}

/// Resolves the converter executable: environment, then config file, then
/// `pandoc` on `PATH`.
pub fn resolve_pandoc<F>(env: F, config_file: &ConfigFile) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env(PANDOC_ENV)
        .filter(|value| !value.is_empty())
        .or_else(|| config_file.md2kindle.pandoc.clone())
        .unwrap_or_else(|| DEFAULT_PANDOC.to_string())
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/md2kindle/config.toml`
    /// or `~/.config/md2kindle/config.toml` if `XDG_CONFIG_HOME` is not set.
    /// Without either there is no config file to read.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir()
                .ok()
                .map(|dir| dir.join("config.toml")),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Loads the config file. A missing file (or no config directory) yields
    /// the defaults; a file that exists but cannot be read or parsed is an
    /// error.
    pub fn load(&self) -> Result<ConfigFile> {
        let Some(path) = self.config_path.as_deref().filter(|path| path.exists()) else {
            return Ok(ConfigFile::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config_file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config_file)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
