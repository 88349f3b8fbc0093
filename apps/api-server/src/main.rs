//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use quill_core::ports::{PasswordService, TokenService};
use quill_infra::{Argon2PasswordService, JwtTokenService};
use state::AppState;
use telemetry::TelemetryConfig;

#[cfg(feature = "rate-limit")]
use middleware::rate_limit::RateLimitMiddleware;
#[cfg(feature = "rate-limit")]
use quill_core::ports::RateLimiter;
#[cfg(feature = "rate-limit")]
use quill_infra::InMemoryRateLimiter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref()).await;
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());

    #[cfg(feature = "rate-limit")]
    let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::from_env());

    HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(web::Data::new(passwords.clone()))
            .app_data(middleware::error::json_config())
            .configure(handlers::configure_routes);

        #[cfg(feature = "rate-limit")]
        let app = app.wrap(RateLimitMiddleware::new(limiter.clone()));

        app.wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
