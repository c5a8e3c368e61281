use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::role::RoleRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleRow>,
}

/// GET /api/dashboard/roles
///
/// Active roles for the role-picker dropdown, sorted by title.
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<RolesResponse>, AppError> {
    let roles = list_active_roles(&state.db).await?;
    Ok(Json(RolesResponse { roles }))
}

pub async fn list_active_roles(pool: &PgPool) -> Result<Vec<RoleRow>, sqlx::Error> {
    sqlx::query_as::<_, RoleRow>("SELECT * FROM roles WHERE is_active ORDER BY title ASC")
        .fetch_all(pool)
        .await
}

/// Fails with NotFound unless the role exists and is active.
pub async fn require_active_role(pool: &PgPool, role_id: &str) -> Result<RoleRow, AppError> {
    sqlx::query_as::<_, RoleRow>("SELECT * FROM roles WHERE role_id = $1 AND is_active")
        .bind(role_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role '{role_id}' not found")))
}
