use std::{env, time::Duration};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const BACKEND_URL: &str = "http://localhost:8000";
const PUBLIC_URL: &str = "http://localhost:3000";
const BACKEND_TIMEOUT_SECS: u64 = 60;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base url of the itinerary-generation backend.
    pub backend_url: String,
    /// Page url handed out when a plan is shared.
    pub public_url: String,
    pub google_maps_api_key: String,
    pub backend_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            backend_url: BACKEND_URL.to_string(),
            public_url: PUBLIC_URL.to_string(),
            google_maps_api_key: String::new(),
            backend_timeout: Duration::from_secs(BACKEND_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);
        let backend_timeout = env::var("BACKEND_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.backend_timeout);

        if env::var("GOOGLE_MAPS_API_KEY").is_err() {
            log::warn!("GOOGLE_MAPS_API_KEY not set, the map widget will load without a key");
        }

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
            public_url: env::var("PUBLIC_URL").unwrap_or(defaults.public_url),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            backend_timeout,
        }
    }
}
