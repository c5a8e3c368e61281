use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `DATABASE_URL` is required; everything else has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Exact origin the SPA is served from. When unset, CORS stays permissive
    /// for local development.
    pub frontend_origin: Option<String>,
    /// The fixed user identity every request resolves to until real auth lands.
    pub demo_user_id: String,
    /// Artificial delay applied by the mock analysis endpoint.
    pub analyze_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            frontend_origin: std::env::var("FRONTEND_ORIGIN").ok(),
            demo_user_id: std::env::var("DEMO_USER_ID").unwrap_or_else(|_| "demo-user".to_string()),
            analyze_delay_ms: std::env::var("ANALYZE_DELAY_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse::<u64>()
                .context("ANALYZE_DELAY_MS must be a number of milliseconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
