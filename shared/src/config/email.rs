//! Outbound email (Mailgun) configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Mailgun email delivery service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Mailgun API key
    pub api_key: String,

    /// Mailgun sending domain
    pub domain: String,

    /// From address for all outbound mail
    pub from_email: String,

    /// Mailgun API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl EmailConfig {
    /// Create from environment variables (`MAILGUN_API_KEY`, `MAILGUN_DOMAIN`,
    /// `MAILGUN_FROM_EMAIL`)
    pub fn from_env() -> Result<Self, String> {
        let api_key = std::env::var("MAILGUN_API_KEY")
            .map_err(|_| "MAILGUN_API_KEY not set".to_string())?;
        let domain = std::env::var("MAILGUN_DOMAIN")
            .map_err(|_| "MAILGUN_DOMAIN not set".to_string())?;
        let from_email = std::env::var("MAILGUN_FROM_EMAIL")
            .map_err(|_| "MAILGUN_FROM_EMAIL not set".to_string())?;

        Ok(Self {
            api_key,
            domain,
            from_email,
            base_url: std::env::var("MAILGUN_BASE_URL").unwrap_or_else(|_| default_base_url()),
            request_timeout_secs: std::env::var("MAILGUN_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        })
    }
}

fn default_base_url() -> String {
    "https://api.mailgun.net/v3".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the process environment is shared between test threads
    #[test]
    fn test_from_env() {
        std::env::set_var("MAILGUN_API_KEY", "key-test");
        std::env::set_var("MAILGUN_DOMAIN", "mg.example.com");
        std::env::set_var("MAILGUN_FROM_EMAIL", "noreply@example.com");
        std::env::remove_var("MAILGUN_BASE_URL");
        std::env::remove_var("MAILGUN_REQUEST_TIMEOUT_SECS");

        let config = EmailConfig::from_env().unwrap();
        assert_eq!(config.api_key, "key-test");
        assert_eq!(config.domain, "mg.example.com");
        assert_eq!(config.from_email, "noreply@example.com");
        assert_eq!(config.base_url, "https://api.mailgun.net/v3");

        // Missing sending domain is a hard error
        std::env::remove_var("MAILGUN_DOMAIN");
        assert!(EmailConfig::from_env().is_err());

        std::env::remove_var("MAILGUN_API_KEY");
        std::env::remove_var("MAILGUN_FROM_EMAIL");
    }
}
