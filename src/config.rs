// src/config.rs
use std::net::IpAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://globe_erp.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4000;

/// How many ports above `port` the server probes before giving up.
pub const PORT_SEARCH_SPAN: u16 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `HOST` and `PORT`, after loading a `.env` file if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    pub fn from_vars(database_url: Option<String>, host: Option<String>, port: Option<String>) -> Self {
        let database_url = database_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = host
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::from([127, 0, 0, 1]));

        let port = port
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { database_url, host, port }
    }
}
