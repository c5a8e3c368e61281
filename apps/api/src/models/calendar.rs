use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hiring-season window (campus drives, internship shortlisting, hackathons).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HiringEventRow {
    pub id: Uuid,
    pub title: String,
    pub org_type: String,
    /// Role labels the event is relevant to; empty means everyone.
    pub roles: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location_scope: String,
    pub link: String,
    pub notes: String,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
