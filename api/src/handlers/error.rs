//! Domain-error to HTTP-response mapping
//!
//! Every core outcome is recovered here into a JSON error body. Credential
//! failures always map to the same generic message so the response never
//! reveals whether the email exists.

use actix_web::HttpResponse;
use std::collections::HashMap;
use validator::ValidationErrors;

use ag_core::errors::{AuthError, DomainError};
use ag_shared::types::response::ErrorResponse;

/// Generic credential-failure message, shared by unknown-email and
/// wrong-password outcomes
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email and/or password";

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::CaptchaFailed => HttpResponse::BadRequest().json(ErrorResponse::new(
                "captcha_failed",
                "CAPTCHA verification failed. Please try again",
            )),
            AuthError::CaptchaServiceUnavailable => {
                HttpResponse::BadGateway().json(ErrorResponse::new(
                    "captcha_service_unavailable",
                    "CAPTCHA verification is temporarily unavailable",
                ))
            }
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("invalid_credentials", INVALID_CREDENTIALS_MESSAGE),
            ),
            AuthError::AccountLocked => HttpResponse::Forbidden().json(ErrorResponse::new(
                "account_locked",
                "Account is locked after too many failed login attempts",
            )),
            AuthError::EmailDispatchFailed => HttpResponse::BadGateway().json(
                ErrorResponse::new("email_dispatch_failed", "Failed to send the email"),
            ),
        },
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Database { .. } | DomainError::Internal { .. } => HttpResponse::InternalServerError()
            .json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            )),
    }
}

/// Convert validator failures into a 400 response with per-field details
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    log::warn!("Request validation failed: {:?}", details);

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}
