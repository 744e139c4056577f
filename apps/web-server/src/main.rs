//! # Quill Web Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::auth::session_middleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill web server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref()).await;
    let session_config = config.session.clone();
    let session_key = session_config.key();

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(&session_config, session_key.clone()))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
