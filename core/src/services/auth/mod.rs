//! Authentication service module
//!
//! This module provides the website authentication flow:
//! - CAPTCHA-gated registration with confirmation email
//! - CAPTCHA-gated login with failed-attempt lockout
//! - Password-recovery email dispatch

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
