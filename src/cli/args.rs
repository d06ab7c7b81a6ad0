use clap::Parser;
use std::path::PathBuf;

use crate::convert::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "md2kindle")]
#[command(about = "Convert Markdown files to Kindle format and send to device")]
#[command(version)]
pub struct Args {
    /// Path to the Markdown file
    pub markdown_file: PathBuf,

    /// Book title (defaults to filename)
    #[arg(long)]
    pub title: Option<String>,

    /// Author name
    #[arg(long)]
    pub author: Option<String>,

    /// Path to cover image (ignored if the file does not exist)
    #[arg(long)]
    pub cover: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Epub)]
    pub format: OutputFormat,

    /// Convert only, don't send via email
    #[arg(long)]
    pub no_send: bool,

    /// Output file path (defaults to input file with new extension)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Skip Markdown formatting fixes (for bullet points, etc.)
    #[arg(long)]
    pub no_formatting_fix: bool,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
