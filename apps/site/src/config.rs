use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare checkout runs as-is.
#[derive(Debug, Clone)]
pub struct Config {
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    pub site_url: String,
    pub port: u16,
    pub contact_delay: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            content_dir: env_or("CONTENT_DIR", "content").into(),
            public_dir: env_or("PUBLIC_DIR", "public").into(),
            site_url: env_or("SITE_URL", "http://localhost:8080"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            contact_delay: Duration::from_millis(
                env_or("CONTACT_DELAY_MS", "1000")
                    .parse::<u64>()
                    .context("CONTACT_DELAY_MS must be a whole number of milliseconds")?,
            ),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
pub fn test_config() -> Config {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Config {
        content_dir: root.join("content"),
        public_dir: root.join("public"),
        site_url: "https://folio.example.dev".to_string(),
        port: 0,
        contact_delay: Duration::ZERO,
        rust_log: "debug".to_string(),
    }
}
