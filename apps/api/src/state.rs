use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::identity::IdentityResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable identity source. Default: `FixedIdentity` with the demo user;
    /// a real auth layer swaps in here without touching the checklist core.
    pub identity: Arc<dyn IdentityResolver>,
}
