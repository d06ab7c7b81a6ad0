use anyhow::{Context, Result, bail};
use std::fmt;

use super::manager::{ConfigFile, EmailSection};

/// SMTP submission port used when none is configured.
pub const DEFAULT_SMTP_PORT: u16 = 587;

pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
pub const EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const SMTP_SERVER: &str = "SMTP_SERVER";
pub const SMTP_PORT: &str = "SMTP_PORT";
pub const KINDLE_EMAIL: &str = "KINDLE_EMAIL";

/// Fully populated delivery settings.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    /// Sender address, also used as the SMTP login.
    pub sender: String,
    pub password: String,
    pub smtp_server: String,
    pub smtp_port: u16,
    /// The device address documents are delivered to.
    pub recipient: String,
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("recipient", &self.recipient)
            .finish()
    }
}

/// Loads delivery settings from the process environment.
///
/// A `.env` file in the working directory (or a parent) is loaded first.
/// Variables already set in the process win over the file. Values missing
/// from the environment fall back to the `[email]` config section.
pub fn load_email_config(config_file: &ConfigFile) -> Result<EmailConfig> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    resolve_email_config(|key| std::env::var(key).ok(), &config_file.email)
}

/// Resolves delivery settings from an environment lookup and the config file.
///
/// Empty values count as missing.
///
/// # Errors
///
/// Returns an error naming all required settings if any of the sender
/// address, password, SMTP server or recipient is missing, or if the port
/// is not a number.
pub fn resolve_email_config<F>(env: F, section: &EmailSection) -> Result<EmailConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str, fallback: &Option<String>| {
        env(key)
            .or_else(|| fallback.clone())
            .filter(|value| !value.trim().is_empty())
    };

    let sender = lookup(EMAIL_ADDRESS, &section.address);
    let password = lookup(EMAIL_PASSWORD, &section.password);
    let smtp_server = lookup(SMTP_SERVER, &section.smtp_server);
    let recipient = lookup(KINDLE_EMAIL, &section.kindle);

    let (Some(sender), Some(password), Some(smtp_server), Some(recipient)) =
        (sender, password, smtp_server, recipient)
    else {
        bail!(
            "Missing email configuration in .env file.\n\n\
             Make sure {EMAIL_ADDRESS}, {EMAIL_PASSWORD}, {SMTP_SERVER}, and {KINDLE_EMAIL} are set.\n\
             Use --no-send to convert without sending."
        );
    };

    let smtp_port = match env(SMTP_PORT).filter(|value| !value.trim().is_empty()) {
        Some(port) => port
            .trim()
            .parse()
            .with_context(|| format!("Invalid {SMTP_PORT}: '{port}'"))?,
        None => section.smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
    };

    Ok(EmailConfig {
        sender,
        password,
        smtp_server,
        smtp_port,
        recipient,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (EMAIL_ADDRESS, "me@example.com"),
            (EMAIL_PASSWORD, "secret"),
            (SMTP_SERVER, "smtp.example.com"),
            (KINDLE_EMAIL, "me@kindle.com"),
        ]
    }

    #[test]
    fn test_resolve_from_env_with_default_port() {
        let config =
            resolve_email_config(env_from(&full_env()), &EmailSection::default()).unwrap();

        assert_eq!(config.sender, "me@example.com");
        assert_eq!(config.password, "secret");
        assert_eq!(config.smtp_server, "smtp.example.com");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.recipient, "me@kindle.com");
    }

    #[test]
    fn test_resolve_explicit_port() {
        let mut pairs = full_env();
        pairs.push((SMTP_PORT, "2525"));

        let config = resolve_email_config(env_from(&pairs), &EmailSection::default()).unwrap();
        assert_eq!(config.smtp_port, 2525);
    }

    #[test]
    fn test_resolve_invalid_port() {
        let mut pairs = full_env();
        pairs.push((SMTP_PORT, "not-a-port"));

        let result = resolve_email_config(env_from(&pairs), &EmailSection::default());
        assert!(result.unwrap_err().to_string().contains("Invalid SMTP_PORT"));
    }

    #[test]
    fn test_missing_recipient_names_all_settings() {
        let pairs: Vec<_> = full_env()
            .into_iter()
            .filter(|(k, _)| *k != KINDLE_EMAIL)
            .collect();

        let err = resolve_email_config(env_from(&pairs), &EmailSection::default())
            .unwrap_err()
            .to_string();

        assert!(err.contains("Missing email configuration"));
        for key in [EMAIL_ADDRESS, EMAIL_PASSWORD, SMTP_SERVER, KINDLE_EMAIL] {
            assert!(err.contains(key), "message should mention {key}");
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut pairs = full_env();
        pairs.retain(|(k, _)| *k != EMAIL_PASSWORD);
        pairs.push((EMAIL_PASSWORD, ""));

        let result = resolve_email_config(env_from(&pairs), &EmailSection::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_falls_back_to_config_section() {
        let section = EmailSection {
            address: Some("file@example.com".to_string()),
            password: Some("file-secret".to_string()),
            smtp_server: Some("smtp.file.com".to_string()),
            smtp_port: Some(465),
            kindle: Some("file@kindle.com".to_string()),
        };

        let config = resolve_email_config(env_from(&[]), &section).unwrap();

        assert_eq!(config.sender, "file@example.com");
        assert_eq!(config.smtp_port, 465);
        assert_eq!(config.recipient, "file@kindle.com");
    }

    #[test]
    fn test_env_overrides_config_section() {
        let section = EmailSection {
            address: Some("file@example.com".to_string()),
            password: Some("file-secret".to_string()),
            smtp_server: Some("smtp.file.com".to_string()),
            smtp_port: Some(465),
            kindle: Some("file@kindle.com".to_string()),
        };

        let config = resolve_email_config(
            env_from(&[(KINDLE_EMAIL, "env@kindle.com"), (SMTP_PORT, "587")]),
            &section,
        )
        .unwrap();

        assert_eq!(config.recipient, "env@kindle.com");
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.sender, "file@example.com");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config =
            resolve_email_config(env_from(&full_env()), &EmailSection::default()).unwrap();

        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
