use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated "thinking" pause before the assistant replies.
    pub reply_delay_ms: u64,
    /// Seeds question sampling so every session picks the same questions.
    pub question_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            reply_delay_ms: std::env::var("REPLY_DELAY_MS")
                .unwrap_or_else(|_| "1000".to_string())
                .parse::<u64>()
                .context("REPLY_DELAY_MS must be a whole number of milliseconds")?,
            question_seed: optional_env("QUESTION_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("QUESTION_SEED must be an unsigned 64-bit integer")?,
        })
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
