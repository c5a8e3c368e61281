use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::guide::RoleGuideRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
    pub role_id: String,
    pub guide: Option<RoleGuideRow>,
}

/// GET /api/dashboard/role/:role_id/guide
///
/// The preparation guide for a role. A role without an active guide yields
/// `guide: null` rather than an error.
pub async fn handle_role_guide(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<GuideResponse>, AppError> {
    let guide =
        sqlx::query_as::<_, RoleGuideRow>("SELECT * FROM role_guides WHERE role_id = $1 AND is_active")
            .bind(&role_id)
            .fetch_optional(&state.db)
            .await?;

    Ok(Json(GuideResponse { role_id, guide }))
}
