use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service boots with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Theme name, resolved against the built-in theme set at startup.
    pub theme: String,
    /// Path to the brand logo image. When unset or unreadable, generated
    /// documents have no header block.
    pub logo_path: Option<String>,
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
            theme: std::env::var("THEME").unwrap_or_else(|_| "classic".to_string()),
            logo_path: std::env::var("LOGO_PATH").ok(),
        })
    }
}
