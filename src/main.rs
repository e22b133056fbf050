use actix_web::{middleware, web, App, HttpServer};
use fluxgen::logger::{self, LoggerConfig};
use fluxgen::server::routes;
use fluxgen::{Config, NebiusClient};
use std::io;

const DEFAULT_PORT: u16 = 3000;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::development())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    if env_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = Config::from_env();

    match &config.nebius.api_key {
        Some(key) => {
            log::info!("✅ Nebius credentials found in environment");
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
        }
        None => {
            log::warn!("⚠️  NEBIUS_API_KEY is not set");
            log::warn!("💡 Generation requests will be answered with a 500 until it is configured");
        }
    }

    let port = config.port.unwrap_or(DEFAULT_PORT);
    logger::log_startup_info("fluxgen", env!("CARGO_PKG_VERSION"), port);

    let client = NebiusClient::new(config.nebius)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let state = web::Data::new(client);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .service(routes::generate_image)
            .service(routes::health)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
