use std::env;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub mail: MailConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/eventreg".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            mail: MailConfig::from_env(),
        }
    }
}

/// Outgoing-mail settings. `smtp_relay` unset disables sending; every
/// attempted send then fails with a logged transport error.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_relay: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub from_email: String,
    pub from_name: String,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            smtp_relay: env::var("SMTP_RELAY").ok(),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            smtp_username: env::var("SMTP_USERNAME").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),
            from_email: env::var("MAIL_FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@localhost".to_string()),
            from_name: env::var("MAIL_FROM_NAME")
                .unwrap_or_else(|_| "Event Registration".to_string()),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_relay: None,
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            from_email: "noreply@localhost".to_string(),
            from_name: "Event Registration".to_string(),
        }
    }
}
