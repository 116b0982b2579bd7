//! # API Layer
//!
//! Actix-web HTTP surface for the AuthGate backend: registration, login,
//! and password-recovery endpoints, each gated by reCAPTCHA verification
//! in the core service layer.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
