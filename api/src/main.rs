use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

mod app;
mod dto;
mod handlers;
mod routes;

use ag_core::services::auth::{AuthService, AuthServiceConfig};
use ag_infra::captcha::RecaptchaVerifier;
use ag_infra::database::{DatabasePool, MySqlAccountRepository};
use ag_infra::email::MailgunEmailService;
use ag_shared::config::AppConfig;

use crate::routes::auth::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting AuthGate API server");

    // Load configuration
    let config = AppConfig::from_env().map_err(to_io_error)?;

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Database pool and startup health check
    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| to_io_error(e.to_string()))?;
    pool.health_check()
        .await
        .map_err(|e| to_io_error(e.to_string()))?;
    info!("Database connection verified");

    // Wire up the service graph
    let account_repository = Arc::new(MySqlAccountRepository::new(pool.pool().clone()));
    let captcha_verifier =
        Arc::new(RecaptchaVerifier::new(config.captcha.clone()).map_err(to_io_error)?);
    let email_service =
        Arc::new(MailgunEmailService::new(config.email.clone()).map_err(to_io_error)?);

    let auth_service = Arc::new(AuthService::new(
        account_repository,
        captcha_verifier,
        email_service,
        AuthServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        site_key: config.captcha.site_key.clone(),
    });

    let workers = config.server.workers;

    let mut server = HttpServer::new(move || app::create_app(app_state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}

fn to_io_error(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::Other, message)
}
