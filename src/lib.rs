//! # md2kindle - Markdown to Kindle
//!
//! `md2kindle` converts a Markdown file to EPUB with pandoc and emails the
//! result to a Kindle address.
//!
//! ## Features
//!
//! - **List cleanup**: Blank lines around bullet lists are fixed up before
//!   conversion so lists render as lists
//! - **Compact styling**: A stylesheet for tight list spacing on e-readers
//! - **Delivery**: The EPUB is sent as an attachment over SMTP (STARTTLS)
//!
//! ## Quick Start
//!
//! ```bash
//! # Convert and send
//! md2kindle ./notes.md --title "Notes" --author "Jane Doe"
//!
//! # Convert only
//! md2kindle ./notes.md --no-send --output ~/books/notes.epub
//! ```
//!
//! ## Configuration
//!
//! Delivery settings come from the environment (a `.env` file is loaded
//! too): `EMAIL_ADDRESS`, `EMAIL_PASSWORD`, `SMTP_SERVER`, `SMTP_PORT`
//! (default 587) and `KINDLE_EMAIL`.
//!
//! Optional defaults live in `~/.config/md2kindle/config.toml`:
//!
//! ```toml
//! [md2kindle]
//! author = "Jane Doe"
//! pandoc = "/usr/local/bin/pandoc"
//!
//! [email]
//! smtp_server = "smtp.gmail.com"
//! kindle = "me@kindle.com"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file, environment and delivery settings.
pub mod config;

/// pandoc invocation and conversion requests.
pub mod convert;

/// File system utilities.
pub mod fs;

/// Email delivery.
pub mod mail;

/// Bullet-list normalization.
pub mod markdown;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style and temp path utilities.
pub mod paths;

/// EPUB stylesheet.
pub mod stylesheet;

/// Terminal UI components (spinner, colors).
pub mod ui;
