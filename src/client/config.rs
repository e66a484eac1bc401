use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let config = Self {
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
        };
        info!("Client configuration loaded:");
        info!("  Backend URL: {}", config.backend_url);
        config
    }
}
