//! Shared utilities and common types for the AuthGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types for the server, database and external services
//! - API response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{CaptchaConfig, DatabaseConfig, EmailConfig, ServerConfig};
pub use types::response::ErrorResponse;
