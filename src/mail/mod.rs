//! Delivery of converted documents by email.

mod message;

use std::path::Path;

use anyhow::{Context, Result};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::{ConfigFile, EmailConfig, load_email_config};
use crate::convert::{ConversionRequest, file_stem};
use crate::ui::{Spinner, Style};
use crate::{output, status};

pub use message::build_message;

/// Subject line for a delivery: the explicit title, else the document's
/// base name.
pub fn subject_for(request: &ConversionRequest, document: &Path) -> String {
    request.title.clone().unwrap_or_else(|| file_stem(document))
}

/// Sends `document` to the configured device address.
///
/// Configuration is resolved before the document is read or any connection
/// is made, so incomplete settings fail without network traffic.
pub fn send_to_kindle(
    document: &Path,
    request: &ConversionRequest,
    config_file: &ConfigFile,
) -> Result<()> {
    let config = load_email_config(config_file)?;
    let message = build_message(&config, document, &subject_for(request, document))?;

    status!(
        "Sending {} to {}...",
        Style::value(document.display()),
        Style::value(&config.recipient)
    );

    let spinner = (!output::is_quiet()).then(|| Spinner::new("Sending..."));
    send_message(&config, &message)?;
    drop(spinner);

    status!("{} File sent successfully!", Style::success("✓"));
    Ok(())
}

/// Submits `message` over an authenticated STARTTLS session.
fn send_message(config: &EmailConfig, message: &Message) -> Result<()> {
    let credentials = Credentials::new(config.sender.clone(), config.password.clone());

    let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
        .with_context(|| format!("Failed to create SMTP transport for {}", config.smtp_server))?
        .port(config.smtp_port)
        .credentials(credentials)
        .build();

    mailer
        .send(message)
        .context("Failed to send email via SMTP")?;

    Ok(())
}
