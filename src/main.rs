//! # Messenger Webhook Bridge
//!
//! Main entry point for the webhook adapter that bridges Messenger
//! platform callbacks to bot-logic handlers. Loads configuration, sets
//! up logging and runs the HTTP front end.

pub mod config;
pub mod errors;
pub mod logger;
pub mod services;
pub mod webhook;

use anyhow::Context;
use envconfig::Envconfig;
use log::info;
use ntex::web;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    let app_config = config::AppConfig::init_from_env()
        .context("Failed to load application configuration. Check environment variables.")?;

    logger::setup_simple_logger()?;

    configure_and_run_server(app_config).await
}

/// Creates application state for one server worker
fn create_app_state(app_config: config::AppConfig) -> webhook::AppState {
    let profile_manager = services::profile::GraphProfileManager::new(&app_config);

    webhook::AppState {
        message_handler: Box::new(services::receive::ReceiveHandler),
        profile_manager: Box::new(profile_manager),
        config: app_config,
    }
}

/// Configures and starts the web server on the configured port
async fn configure_and_run_server(app_config: config::AppConfig) -> anyhow::Result<()> {
    let port = app_config.port;
    let server_addr = ("0.0.0.0", port);

    let server = web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(app_config.clone()))
            .service((
                webhook::routes::verify,
                webhook::routes::receive,
                webhook::routes::profile,
            ))
    })
    .bind(server_addr)?;

    info!("Your app is listening on port {port}");

    server
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
