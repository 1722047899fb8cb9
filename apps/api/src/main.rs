mod compose;
mod config;
mod errors;
mod extract;
mod generation;
mod models;
mod parser;
mod routes;
mod state;

use anyhow::{anyhow, Result};
use bytes::Bytes;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::compose::{theme_by_name, DocxComposer};
use crate::config::Config;
use crate::extract::FixtureExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Letterhead API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the document theme before serving anything. An unknown name is
    // a configuration mistake, so it fails startup rather than every request.
    let theme = theme_by_name(&config.theme)
        .ok_or_else(|| anyhow!("unknown THEME '{}'", config.theme))?;
    info!(
        "Theme: {} ({}pt {})",
        theme.name, theme.body_size_pt, theme.body_font
    );

    // The brand logo is optional: without it, generated documents simply have
    // no header block.
    let logo = load_logo(config.logo_path.as_deref());

    // Build app state
    let state = AppState {
        theme,
        logo,
        composer: Arc::new(DocxComposer),
        extractor: Arc::new(FixtureExtractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Reads the configured logo file into memory.
///
/// A missing or unreadable file is logged and skipped, never fatal.
fn load_logo(path: Option<&str>) -> Option<Bytes> {
    let path = path?;
    match std::fs::read(path) {
        Ok(bytes) => {
            info!("Loaded brand logo from {path} ({} bytes)", bytes.len());
            Some(Bytes::from(bytes))
        }
        Err(e) => {
            warn!("LOGO_PATH is set but unreadable ({path}: {e}); documents will have no header");
            None
        }
    }
}
