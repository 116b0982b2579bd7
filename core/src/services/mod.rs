//! Business services

pub mod auth;
pub mod captcha;
pub mod notification;

pub use auth::{AuthService, AuthServiceConfig};
pub use captcha::CaptchaVerifierTrait;
pub use notification::EmailServiceTrait;
