//! Password recovery endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{ForgotPasswordRequest, ForgotPasswordResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::auth::AppState;

use ag_core::repositories::AccountRepository;
use ag_core::services::captcha::CaptchaVerifierTrait;
use ag_core::services::notification::EmailServiceTrait;

/// Handler for POST /api/v1/auth/forgot-password
///
/// Dispatches a password-recovery email. The send is awaited and a
/// delivery fault is surfaced as 502 rather than swallowed.
pub async fn forgot_password<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CaptchaVerifierTrait + 'static,
    N: EmailServiceTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    log::info!("Processing password reset for email: {}", request.email);

    match state.auth_service.request_password_reset(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(ForgotPasswordResponse {
            message: "Recovery email sent. Please check your inbox".to_string(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
