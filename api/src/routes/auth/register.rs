//! Registration endpoints

use actix_web::{http::header, web, HttpResponse};
use validator::Validate;

use crate::dto::{CaptchaFormResponse, RegisterRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::auth::AppState;

use ag_core::repositories::AccountRepository;
use ag_core::services::captcha::CaptchaVerifierTrait;
use ag_core::services::notification::EmailServiceTrait;

/// Handler for GET /api/v1/auth/register
///
/// Returns the metadata the registration form needs, currently the
/// reCAPTCHA site key for rendering the challenge widget.
pub async fn register_form<A, C, N>(state: web::Data<AppState<A, C, N>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CaptchaVerifierTrait + 'static,
    N: EmailServiceTrait + 'static,
{
    HttpResponse::Ok().json(CaptchaFormResponse {
        site_key: state.site_key.clone(),
    })
}

/// Handler for POST /api/v1/auth/register
///
/// Registers a new account. The CAPTCHA token is verified before any
/// store access; on success the client is redirected to the login form.
///
/// # Responses
///
/// * `303 See Other` with `Location: /login` - account created
/// * `400` - validation or CAPTCHA failure
/// * `500` - duplicate email or store failure
/// * `502` - CAPTCHA service fault
pub async fn register<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: CaptchaVerifierTrait + 'static,
    N: EmailServiceTrait + 'static,
{
    if let Err(errors) = request.0.validate() {
        return handle_validation_errors(errors);
    }

    log::info!("Processing registration for email: {}", request.email);

    match state
        .auth_service
        .register(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.password,
            &request.captcha_token,
        )
        .await
    {
        Ok(account) => {
            log::info!("Account registered: {}", account.email);
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login"))
                .finish()
        }
        Err(error) => handle_domain_error(error),
    }
}
