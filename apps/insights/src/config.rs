use anyhow::{Context, Result};

const DEFAULT_FEED_URL: &str = "https://remotive.com/api/remote-jobs";

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub feed_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            feed_url: env_or("JOB_FEED_URL", DEFAULT_FEED_URL),
            feed_timeout_secs: env_or("FEED_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("FEED_TIMEOUT_SECS must be a whole number of seconds")?,
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
