use anyhow::{Context, Result};

use crate::provider::jsearch::DEFAULT_BASE_URL;
use crate::search::settings::{DEFAULT_DAILY_LIMIT, MAX_DAILY_LIMIT, MIN_DAILY_LIMIT};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Initial JSearch key; can be replaced at runtime through the settings API.
    pub jsearch_api_key: String,
    pub jsearch_base_url: String,
    pub daily_limit: u32,
    /// Seeds the match-score jitter. Unset means entropy-seeded.
    pub match_score_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            database_url: require_env("DATABASE_URL")?,
            jsearch_api_key: std::env::var("JSEARCH_API_KEY").unwrap_or_default(),
            jsearch_base_url: std::env::var("JSEARCH_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            daily_limit: std::env::var("DAILY_LIMIT")
                .unwrap_or_else(|_| DEFAULT_DAILY_LIMIT.to_string())
                .parse::<u32>()
                .context("DAILY_LIMIT must be a positive integer")?,
            match_score_seed: std::env::var("MATCH_SCORE_SEED")
                .ok()
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("MATCH_SCORE_SEED must be an unsigned integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        };

        anyhow::ensure!(
            (MIN_DAILY_LIMIT..=MAX_DAILY_LIMIT).contains(&config.daily_limit),
            "DAILY_LIMIT must be between {MIN_DAILY_LIMIT} and {MAX_DAILY_LIMIT}"
        );

        Ok(config)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
