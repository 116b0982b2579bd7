//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `captcha` - CAPTCHA verification service configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email (Mailgun) configuration
//! - `server` - HTTP server configuration

pub mod captcha;
pub mod database;
pub mod email;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use captcha::CaptchaConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// CAPTCHA verification configuration
    pub captcha: CaptchaConfig,

    /// Outbound email configuration
    pub email: EmailConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            captcha: CaptchaConfig::from_env()?,
            email: EmailConfig::from_env()?,
        })
    }
}
