use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A target job category, e.g. "sde" or "data-analyst". The `role_id` slug is
/// the partition key across catalog and progress data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoleRow {
    pub role_id: String,
    pub title: String,
    pub short_desc: String,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
