mod analyze;
mod checklist;
mod config;
mod dashboard;
mod db;
mod errors;
mod identity;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::identity::FixedIdentity;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TechReady API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    let identity = Arc::new(FixedIdentity::new(config.demo_user_id.clone()));
    info!(
        "Identity resolver: fixed demo user '{}' (no auth configured)",
        config.demo_user_id
    );

    let cors = build_cors_layer(&config)?;

    let state = AppState {
        db,
        config: config.clone(),
        identity,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Locks CORS to the configured SPA origin, or stays permissive for local dev.
fn build_cors_layer(config: &Config) -> Result<CorsLayer> {
    Ok(match &config.frontend_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .context("FRONTEND_ORIGIN is not a valid origin")?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        None => CorsLayer::permissive(),
    })
}
