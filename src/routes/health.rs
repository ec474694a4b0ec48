use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::env;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    environment: String,
    version: String,
    backend_url: String,
}

pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend_url: config.backend_url.clone(),
    })
}
