use std::{io, sync::Mutex};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trip_curator::{
    config::AppConfig,
    routes,
    services::{
        generation_client::GenerationClient, map_sync_service::MapSize,
        trip_session::TripSession,
    },
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env();
    let backend = GenerationClient::new(&config.backend_url, config.backend_timeout)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log::info!("Generation backend at {}", backend.base_url());

    let backend = web::Data::new(backend);
    let session = web::Data::new(Mutex::new(TripSession::new(MapSize::default())));
    let app_config = web::Data::new(config.clone());

    log::info!("Binding to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(backend.clone())
            .app_data(session.clone())
            .app_data(app_config.clone())
            .configure(routes::config::<GenerationClient>)
    })
    .bind((config.host.clone(), config.port))?
    .run()
    .await
}
