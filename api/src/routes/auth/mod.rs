//! Authentication routes

pub mod forgot_password;
pub mod login;
pub mod register;

use std::sync::Arc;

use ag_core::repositories::AccountRepository;
use ag_core::services::auth::AuthService;
use ag_core::services::captcha::CaptchaVerifierTrait;
use ag_core::services::notification::EmailServiceTrait;

/// Application state that holds shared services
pub struct AppState<A, C, N>
where
    A: AccountRepository,
    C: CaptchaVerifierTrait,
    N: EmailServiceTrait,
{
    pub auth_service: Arc<AuthService<A, C, N>>,
    /// reCAPTCHA site key exposed to the registration and login forms
    pub site_key: String,
}
