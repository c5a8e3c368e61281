use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    AnalysisReport, AnalyzeRequest, CalendarResponse, ChecklistResponse, GuideResponse, Role,
    RolesResponse, ToggleResponse,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Typed client for the TechReady API. Every dashboard widget goes through
/// this; no widget builds its own requests.
#[derive(Clone)]
pub struct DashboardApi {
    base_url: String,
    http: Client,
}

impl DashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Active roles for the role-picker dropdown.
    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        let response: RolesResponse = self.get_json("/api/dashboard/roles").await?;
        Ok(response.roles)
    }

    /// The merged checklist (items + stats) for a role.
    pub async fn checklist(&self, role_id: &str) -> Result<ChecklistResponse, ApiError> {
        self.get_json(&format!("/roleChecklist/{role_id}")).await
    }

    /// Flips completion for one item. Strict flip: calling twice returns the
    /// item to its original state.
    pub async fn toggle_item(&self, role_id: &str, item_id: Uuid) -> Result<ToggleResponse, ApiError> {
        self.post_json(
            &format!("/roleChecklist/{role_id}/items/{item_id}/toggle"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Hiring events overlapping the given month (server defaults to the
    /// current month when `None`).
    pub async fn hiring_calendar(&self, month: Option<&str>) -> Result<CalendarResponse, ApiError> {
        let path = match month {
            Some(m) => format!("/api/dashboard/hiring-calendar?month={m}"),
            None => "/api/dashboard/hiring-calendar".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn role_guide(&self, role_id: &str) -> Result<GuideResponse, ApiError> {
        self.get_json(&format!("/api/dashboard/role/{role_id}/guide"))
            .await
    }

    /// The mock resume analysis. Slow by design; callers should surface a
    /// loading state.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport, ApiError> {
        self.post_json("/analyze", request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the structured message; fall back to the raw body.
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
