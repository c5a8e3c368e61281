use std::time::Duration;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::analyze::{build_report, AnalysisReport, AnalyzeRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Validates the career-goal fields, holds the response for the configured
/// artificial delay, and returns the canned report for the requested role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    request: Option<Json<AnalyzeRequest>>,
) -> Result<Json<AnalysisReport>, AppError> {
    let Some(Json(request)) = request else {
        return Err(missing_fields());
    };
    if request.role.trim().is_empty()
        || request.year.trim().is_empty()
        || request.time.trim().is_empty()
    {
        return Err(missing_fields());
    }

    tokio::time::sleep(Duration::from_millis(state.config.analyze_delay_ms)).await;

    Ok(Json(build_report(&request, Utc::now())))
}

fn missing_fields() -> AppError {
    AppError::Validation("Missing required fields: role, year, time".to_string())
}
