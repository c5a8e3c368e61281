use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Checklist item priority. Declaration order is rank order, so the derived
/// `Ord` sorts P0 ahead of P1 ahead of P2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "checklist_priority", rename_all = "UPPERCASE")]
pub enum Priority {
    P0,
    P1,
    P2,
}

/// A labeled link attached to a checklist item or role guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

/// One preparation task in a role's catalog. Maintained by catalog tooling,
/// never mutated by end users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemRow {
    pub id: Uuid,
    pub role_id: String,
    pub category: String,
    pub title: String,
    pub detail: String,
    pub priority: Priority,
    pub est_hours: f64,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
    pub resources: Json<Vec<ResourceLink>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Durable completion state for one (user, role, item) key. At most one row
/// exists per key; absence means "not completed".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRow {
    pub user_id: String,
    pub role_id: String,
    pub item_id: Uuid,
    pub completed: bool,
    /// Set exactly when completion becomes true, cleared when it becomes false.
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The completion slice of a progress row, as returned by the toggle endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&ProgressRow> for ProgressState {
    fn from(row: &ProgressRow) -> Self {
        Self {
            completed: row.completed,
            completed_at: row.completed_at,
        }
    }
}
