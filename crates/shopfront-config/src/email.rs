use crate::{env_or, env_parse, parse_flag};

#[derive(Clone, Debug)]
pub struct EmailConfig {
    /// When false, verification mails are logged instead of sent.
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_email: String,
    pub from_name: String,
    /// Public base URL of the API, used to build links inside mails.
    pub webservice_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@shopfront.dev".to_string(),
            from_name: "Shopfront".to_string(),
            webservice_url: "http://localhost:3000/api".to_string(),
        }
    }
}

impl EmailConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let enabled = std::env::var("SMTP_ENABLED")
            .or_else(|_| std::env::var("SEND_EMAIL"))
            .map(|v| parse_flag(&v))
            .unwrap_or(defaults.enabled);

        Self {
            enabled,
            smtp_host: env_or("SMTP_HOST", &defaults.smtp_host),
            smtp_port: env_parse("SMTP_PORT", defaults.smtp_port),
            smtp_username: env_or("SMTP_USERNAME", ""),
            smtp_password: env_or("SMTP_PASSWORD", ""),
            from_email: env_or("FROM_EMAIL", &defaults.from_email),
            from_name: env_or("FROM_NAME", &defaults.from_name),
            webservice_url: env_or("WEBSERVICE_URL", &defaults.webservice_url)
                .trim_end_matches('/')
                .to_string(),
        }
    }
}
