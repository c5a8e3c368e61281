use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::models::checklist::ResourceLink;

/// "How to prepare for this role" content, one guide per role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoleGuideRow {
    pub role_id: String,
    pub overview: String,
    pub interview_format: Vec<String>,
    pub roadmap: Json<Vec<RoadmapWeek>>,
    pub standout_projects: Vec<String>,
    pub mistakes_to_avoid: Vec<String>,
    pub resources: Json<Vec<ResourceLink>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapWeek {
    /// Display label, e.g. "Week 1-2".
    pub week: String,
    pub focus: String,
    pub tasks: Vec<String>,
}
