mod email;
mod manager;

pub use email::{
    DEFAULT_SMTP_PORT, EMAIL_ADDRESS, EMAIL_PASSWORD, EmailConfig, KINDLE_EMAIL, SMTP_PORT,
    SMTP_SERVER, load_email_config, resolve_email_config,
};
pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_PANDOC, EmailSection, Md2KindleConfig, PANDOC_ENV,
    RequestOptions, resolve_pandoc, resolve_request,
};
