use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::store::StoreBackend;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed, or if the chosen
/// store backend needs a variable that is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub store_backend: StoreBackend,
    pub store_dir: PathBuf,
    pub redis_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let store_backend = env_or("STORE_BACKEND", "file")
            .parse::<StoreBackend>()
            .context("STORE_BACKEND must be one of memory, file, redis")?;

        let redis_url = match store_backend {
            StoreBackend::Redis => Some(require_env("REDIS_URL")?),
            _ => std::env::var("REDIS_URL").ok(),
        };

        Ok(Config {
            host: env_or("HOST", "127.0.0.1"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            store_backend,
            store_dir: PathBuf::from(env_or("STORE_DIR", ".resume-data")),
            redis_url,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
