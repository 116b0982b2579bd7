//! Application factory
//!
//! Builds the Actix-web application with all routes and shared state.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::routes::auth::{
    forgot_password::forgot_password,
    login::{login, login_form},
    register::{register, register_form},
    AppState,
};

use ag_core::repositories::AccountRepository;
use ag_core::services::captcha::CaptchaVerifierTrait;
use ag_core::services::notification::EmailServiceTrait;

/// Create and configure the application with all dependencies
pub fn create_app<A, C, N>(
    app_state: web::Data<AppState<A, C, N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    C: CaptchaVerifierTrait + 'static,
    N: EmailServiceTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Post-login landing view
        .route("/welcome", web::get().to(welcome))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::get().to(register_form::<A, C, N>))
                    .route("/register", web::post().to(register::<A, C, N>))
                    .route("/login", web::get().to(login_form::<A, C, N>))
                    .route("/login", web::post().to(login::<A, C, N>))
                    .route("/forgot-password", web::post().to(forgot_password::<A, C, N>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "authgate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Landing view shown after a successful login redirect
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome! You are logged in.",
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
