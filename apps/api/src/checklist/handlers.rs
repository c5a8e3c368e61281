//! Axum route handlers for the role checklist.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::checklist::{progress, reconcile};
use crate::dashboard::roles;
use crate::errors::AppError;
use crate::models::checklist::ProgressState;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub ok: bool,
    pub progress: ProgressState,
}

/// GET /roleChecklist/:role_id
///
/// The merged checklist for the acting user: every active item for the role
/// annotated with completion, plus the derived stats.
pub async fn handle_role_checklist(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<reconcile::MergedChecklistView>, AppError> {
    let user_id = state.identity.resolve(&headers)?;
    roles::require_active_role(&state.db, &role_id).await?;

    let view = reconcile::build_view(&state.db, &user_id, &role_id).await?;
    Ok(Json(view))
}

/// POST /roleChecklist/:role_id/items/:item_id/toggle
///
/// Strict flip: each call negates the stored completion exactly once, as one
/// atomic upsert. Calling twice returns the key to its original state.
pub async fn handle_toggle_item(
    State(state): State<AppState>,
    Path((role_id, item_id)): Path<(String, Uuid)>,
    headers: HeaderMap,
) -> Result<Json<ToggleResponse>, AppError> {
    let user_id = state.identity.resolve(&headers)?;
    require_active_item(&state.db, &role_id, item_id).await?;

    let record = progress::upsert_toggle(&state.db, &user_id, &role_id, item_id).await?;
    Ok(Json(ToggleResponse {
        ok: true,
        progress: ProgressState::from(&record),
    }))
}

/// Fails with NotFound unless the item exists, belongs to the role, and is
/// active. Keeps the progress store from accumulating rows for ids that were
/// never in the catalog.
async fn require_active_item(pool: &PgPool, role_id: &str, item_id: Uuid) -> Result<(), AppError> {
    let found: Option<Uuid> = sqlx::query_scalar(
        "SELECT id FROM checklist_items WHERE id = $1 AND role_id = $2 AND is_active",
    )
    .bind(item_id)
    .bind(role_id)
    .fetch_optional(pool)
    .await?;

    if found.is_none() {
        return Err(AppError::NotFound(format!(
            "Checklist item {item_id} not found for role '{role_id}'"
        )));
    }
    Ok(())
}
