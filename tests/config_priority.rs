//! Config priority contract tests.
//!
//! These tests verify that higher-priority sources win.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file settings
//! 4. Built-in defaults

use md2kindle::config::{
    ConfigFile, DEFAULT_SMTP_PORT, EmailSection, Md2KindleConfig, RequestOptions,
    resolve_email_config, resolve_pandoc, resolve_request,
};
use std::collections::HashMap;
use std::path::PathBuf;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        md2kindle: Md2KindleConfig {
            author: Some("Config Author".to_string()),
            cover: Some("/covers/config.png".to_string()),
            pandoc: Some("/opt/config/pandoc".to_string()),
        },
        email: EmailSection {
            address: Some("config@example.com".to_string()),
            password: Some("config-secret".to_string()),
            smtp_server: Some("smtp.config.com".to_string()),
            smtp_port: Some(465),
            kindle: Some("config@kindle.com".to_string()),
        },
    }
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_cli_author_overrides_config_author() {
    let options = RequestOptions {
        input: PathBuf::from("notes.md"),
        author: Some("CLI Author".to_string()),
        ..RequestOptions::default()
    };

    let request = resolve_request(options, &make_config_with_defaults());

    assert_eq!(request.author.as_deref(), Some("CLI Author"));
}

#[test]
fn test_config_cover_used_when_cli_not_specified() {
    let options = RequestOptions {
        input: PathBuf::from("notes.md"),
        ..RequestOptions::default()
    };

    let request = resolve_request(options, &make_config_with_defaults());

    assert_eq!(request.cover, Some(PathBuf::from("/covers/config.png")));
}

#[test]
fn test_title_is_never_taken_from_config() {
    let options = RequestOptions {
        input: PathBuf::from("notes.md"),
        ..RequestOptions::default()
    };

    let request = resolve_request(options, &make_config_with_defaults());

    assert!(request.title.is_none());
    assert_eq!(request.document_title(), "notes");
}

#[test]
fn test_env_pandoc_overrides_config_pandoc() {
    let config = make_config_with_defaults();

    let pandoc = resolve_pandoc(env_from(&[("MD2KINDLE_PANDOC", "/env/pandoc")]), &config);

    assert_eq!(pandoc, "/env/pandoc");
}

#[test]
fn test_config_pandoc_used_when_env_not_set() {
    let config = make_config_with_defaults();

    assert_eq!(resolve_pandoc(env_from(&[]), &config), "/opt/config/pandoc");
}

#[test]
fn test_env_email_overrides_config_email() {
    let config = make_config_with_defaults();

    let resolved = resolve_email_config(
        env_from(&[
            ("EMAIL_ADDRESS", "env@example.com"),
            ("KINDLE_EMAIL", "env@kindle.com"),
        ]),
        &config.email,
    )
    .unwrap();

    assert_eq!(resolved.sender, "env@example.com");
    assert_eq!(resolved.recipient, "env@kindle.com");
    // Unset in the environment, so taken from the file.
    assert_eq!(resolved.password, "config-secret");
    assert_eq!(resolved.smtp_server, "smtp.config.com");
    assert_eq!(resolved.smtp_port, 465);
}

#[test]
fn test_default_port_when_nothing_configured() {
    let resolved = resolve_email_config(
        env_from(&[
            ("EMAIL_ADDRESS", "me@example.com"),
            ("EMAIL_PASSWORD", "secret"),
            ("SMTP_SERVER", "smtp.example.com"),
            ("KINDLE_EMAIL", "me@kindle.com"),
        ]),
        &EmailSection::default(),
    )
    .unwrap();

    assert_eq!(resolved.smtp_port, DEFAULT_SMTP_PORT);
    assert_eq!(resolved.smtp_port, 587);
}

#[test]
fn test_missing_everything_is_an_error() {
    let result = resolve_email_config(env_from(&[]), &EmailSection::default());

    assert!(result.is_err());
}
