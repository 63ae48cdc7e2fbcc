//! # Folio API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_telemetry(&config.telemetry);

    tracing::info!(
        "Starting Folio API Server on {}:{}",
        config.host,
        config.port
    );

    // The database handle is created once here and shared by every worker
    let state = AppState::new(&config).await.map_err(|e| {
        tracing::error!("{}", e);
        std::io::Error::other(e)
    })?;

    let cors_config = config.cors.clone();
    tracing::info!(origin = %cors_config.allowed_origin, "CORS origin configured");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::cors::cors(&cors_config))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
