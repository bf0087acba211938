mod config;
mod error;
mod gateway;
mod relay;
mod web;

use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};
use std::sync::Arc;

use config::RelayConfig;
use gateway::{ChatGateway, HttpGateway};
use web::{cors, routes};

// App state structure
pub struct AppState {
    pub gateway: Arc<dyn ChatGateway>,
    pub model: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting malaria chat relay");

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if config.api_key.is_none() {
        warn!("AI_GATEWAY_API_KEY is not set; chat requests will fail until it is configured");
    }

    let gateway: Arc<dyn ChatGateway> = match HttpGateway::new(&config) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            error!("Failed to build AI gateway client: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = Data::new(AppState {
        gateway,
        model: config.model.clone(),
    });

    info!("Listening on {}:{} (model: {})", config.host, config.port, config.model);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(cors::default_headers())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
