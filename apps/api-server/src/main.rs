//! # Signup API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod factories;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::{AppState, Storage};
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Signup API Server on {}:{}",
        config.host,
        config.port
    );

    // Connection is opened once here and closed after the server stops.
    let storage = Storage::connect(config.database.as_ref()).await?;
    let state = AppState::new(factories::make_sign_up_controller(
        storage.repository(),
        config.password_policy,
    ));

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(middleware::error::json_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    storage.disconnect().await
}
