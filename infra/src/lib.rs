//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the AuthGate
//! application. It provides concrete implementations for the collaborators
//! the core layer depends on:
//!
//! - **Database**: MySQL account repository using SQLx
//! - **CAPTCHA**: Google reCAPTCHA verification over HTTP
//! - **Email**: Mailgun delivery plus a log-only mock for local dev

use thiserror::Error;

pub mod captcha;
pub mod database;
pub mod email;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("CAPTCHA service error: {0}")]
    Captcha(String),

    #[error("Email service error: {0}")]
    Email(String),
}
