use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use lettre::Message;
use lettre::message::header::{ContentTransferEncoding, ContentType};
use lettre::message::{Attachment, Body, Mailbox, MultiPart};

use crate::config::EmailConfig;

const OCTET_STREAM: &str = "application/octet-stream";

/// Builds the delivery message with `document` as its only part.
///
/// The document is attached as base64-encoded `application/octet-stream`
/// under its own file name.
pub fn build_message(config: &EmailConfig, document: &Path, subject: &str) -> Result<Message> {
    let from: Mailbox = config
        .sender
        .parse()
        .with_context(|| format!("Invalid sender email address: {}", config.sender))?;

    let to: Mailbox = config
        .recipient
        .parse()
        .with_context(|| format!("Invalid recipient email address: {}", config.recipient))?;

    let bytes = fs::read(document)
        .with_context(|| format!("Failed to read file: {}", document.display()))?;
    let body = Body::new_with_encoding(bytes, ContentTransferEncoding::Base64)
        .map_err(|_| anyhow!("Failed to encode attachment"))?;

    let filename = document
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    let content_type = ContentType::parse(OCTET_STREAM).context("Invalid attachment type")?;

    Message::builder()
        .from(from)
        .to(to)
        .date_now()
        .subject(subject)
        .multipart(MultiPart::mixed().singlepart(Attachment::new(filename).body(body, content_type)))
        .context("Failed to build email message")
}
