//! Login endpoints

use actix_web::{http::header, web, HttpResponse};
use validator::Validate;

use crate::dto::{CaptchaFormResponse, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::auth::AppState;

use ag_core::repositories::AccountRepository;
use ag_core::services::captcha::CaptchaVerifierTrait;
use ag_core::services::notification::EmailServiceTrait;

/// Handler for GET /api/v1/auth/login
///
/// Returns the metadata the login form needs (reCAPTCHA site key).
pub async fn login_form<A, C, N>(state: web::Data<AppState<A, C, N>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CaptchaVerifierTrait + 'static,
    N: EmailServiceTrait + 'static,
{
    HttpResponse::Ok().json(CaptchaFormResponse {
        site_key: state.site_key.clone(),
    })
}

/// Handler for POST /api/v1/auth/login
///
/// Authenticates an account. Unknown email and wrong password are
/// indistinguishable in the response; a locked account is rejected
/// before the password is even compared.
///
/// # Responses
///
/// * `303 See Other` with `Location: /welcome` - authenticated
/// * `400` - validation or CAPTCHA failure
/// * `401` - invalid credentials (generic)
/// * `403` - account locked
/// * `502` - CAPTCHA service fault
pub async fn login<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CaptchaVerifierTrait + 'static,
    N: EmailServiceTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    log::info!("Processing login for email: {}", request.email);

    match state
        .auth_service
        .login(&request.email, &request.password, &request.captcha_token)
        .await
    {
        Ok(account) => {
            log::info!("Login succeeded for email: {}", account.email);
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/welcome"))
                .finish()
        }
        Err(error) => handle_domain_error(error),
    }
}
