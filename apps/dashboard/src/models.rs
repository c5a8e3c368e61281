//! Wire shapes for the TechReady API. The dashboard talks to the backend
//! purely over JSON; these are the response shapes it relies on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: String,
    pub title: String,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RolesResponse {
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: Uuid,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub detail: String,
    pub priority: String,
    #[serde(default)]
    pub est_hours: f64,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistStats {
    pub done_count: usize,
    pub total_count: usize,
    pub completion_percent: u32,
    pub p0_remaining: usize,
    pub remaining_hours: f64,
    pub this_week_focus: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistResponse {
    pub role_id: String,
    pub items: Vec<ChecklistItem>,
    pub stats: ChecklistStats,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleResponse {
    pub ok: bool,
    pub progress: ProgressState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringEvent {
    pub id: Uuid,
    pub title: String,
    pub org_type: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub location_scope: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarResponse {
    pub month: String,
    pub events: Vec<HiringEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGuide {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub interview_format: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapWeek>,
    #[serde(default)]
    pub standout_projects: Vec<String>,
    #[serde(default)]
    pub mistakes_to_avoid: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapWeek {
    pub week: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
    pub role_id: String,
    pub guide: Option<RoleGuide>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub role: String,
    pub year: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ats_score: u32,
    pub readiness: String,
    pub top_fixes: Vec<String>,
    pub skills_present: Vec<String>,
    pub skills_missing: Vec<String>,
    pub roadmap: Vec<AnalysisWeek>,
    pub hiring_calendar: Vec<SeasonWindow>,
    /// Echo of the request plus the generation timestamp; shape left loose.
    pub meta: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisWeek {
    pub week: u32,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonWindow {
    pub month: String,
    pub focus: String,
}
