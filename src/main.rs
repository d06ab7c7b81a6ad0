use anyhow::Result;
use clap::Parser;

use md2kindle::cli::Args;
use md2kindle::cli::commands::convert;
use md2kindle::config::RequestOptions;
use md2kindle::output::{self, OutputConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
    });

    let options = convert::ConvertOptions {
        request: RequestOptions {
            input: args.markdown_file,
            title: args.title,
            author: args.author,
            cover: args.cover,
            format: args.format,
            output: args.output,
            no_formatting_fix: args.no_formatting_fix,
        },
        no_send: args.no_send,
    };
    convert::run_convert(options)?;

    Ok(())
}
