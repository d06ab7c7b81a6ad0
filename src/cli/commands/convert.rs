use anyhow::{Result, bail};

use crate::config::{ConfigManager, RequestOptions, resolve_pandoc, resolve_request};
use crate::convert::{Pandoc, convert_markdown};
use crate::mail::send_to_kindle;
use crate::status;

pub struct ConvertOptions {
    pub request: RequestOptions,
    pub no_send: bool,
}

/// Runs the whole pipeline: validate, check pandoc, convert, then send.
///
/// Each step's failure ends the run; nothing is retried.
pub fn run_convert(options: ConvertOptions) -> Result<()> {
    let input = &options.request.input;
    if !input.exists() {
        bail!("File not found: {}", input.display());
    }

    let config_file = ConfigManager::new().load()?;

    let pandoc = Pandoc::new(resolve_pandoc(|key| std::env::var(key).ok(), &config_file));
    pandoc.check()?;

    let request = resolve_request(options.request, &config_file);
    let output = convert_markdown(&pandoc, &request)?;

    if !options.no_send {
        send_to_kindle(&output, &request, &config_file)?;
    }

    status!("Done!");
    Ok(())
}
