//! CAPTCHA verification service configuration

use serde::{Deserialize, Serialize};

/// Default Google reCAPTCHA verification endpoint
pub const DEFAULT_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Configuration for the CAPTCHA verification service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptchaConfig {
    /// Public site key embedded in the client-side challenge widget
    pub site_key: String,

    /// Server-held secret key sent with every verification call
    pub secret_key: String,

    /// Verification endpoint URL
    #[serde(default = "default_verify_url")]
    pub verify_url: String,

    /// Timeout for verification requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl CaptchaConfig {
    /// Create from environment variables (`RECAPTCHA_SITE_KEY`, `RECAPTCHA_SECRET_KEY`)
    pub fn from_env() -> Result<Self, String> {
        let site_key = std::env::var("RECAPTCHA_SITE_KEY")
            .map_err(|_| "RECAPTCHA_SITE_KEY not set".to_string())?;
        let secret_key = std::env::var("RECAPTCHA_SECRET_KEY")
            .map_err(|_| "RECAPTCHA_SECRET_KEY not set".to_string())?;

        Ok(Self {
            site_key,
            secret_key,
            verify_url: std::env::var("RECAPTCHA_VERIFY_URL")
                .unwrap_or_else(|_| default_verify_url()),
            request_timeout_secs: std::env::var("RECAPTCHA_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        })
    }
}

fn default_verify_url() -> String {
    DEFAULT_VERIFY_URL.to_string()
}

fn default_request_timeout() -> u64 {
    10
}
