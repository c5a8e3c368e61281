use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::calendar::HiringEventRow;
use crate::state::AppState;

/// Offset applied when defaulting to "the current month": the product's
/// hiring calendar is anchored to IST.
const IST_OFFSET_MINUTES: i64 = 5 * 60 + 30;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub month: String,
    pub events: Vec<HiringEventRow>,
}

/// GET /api/dashboard/hiring-calendar?month=YYYY-MM
///
/// Active events whose [start, end] window overlaps the requested month,
/// earliest first. Without an explicit month, the current month in IST.
pub async fn handle_hiring_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let month = query.month.unwrap_or_else(|| current_month_ist(Utc::now()));
    let (start, end) = month_range_utc(&month).ok_or_else(|| {
        AppError::Validation(format!("Invalid month '{month}', expected YYYY-MM"))
    })?;

    let events = sqlx::query_as::<_, HiringEventRow>(
        r#"
        SELECT * FROM hiring_events
        WHERE is_active AND start_date < $1 AND end_date >= $2
        ORDER BY start_date ASC
        "#,
    )
    .bind(end)
    .bind(start)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(CalendarResponse { month, events }))
}

/// Formats the month containing `now`, shifted to IST.
pub fn current_month_ist(now: DateTime<Utc>) -> String {
    (now + Duration::minutes(IST_OFFSET_MINUTES))
        .format("%Y-%m")
        .to_string()
}

/// Parses "YYYY-MM" into the UTC [month start, next month start) window.
pub fn month_range_utc(month: &str) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let (year, month_num) = month.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month_num: u32 = month_num.parse().ok()?;
    if !(1..=12).contains(&month_num) {
        return None;
    }

    let start = Utc.with_ymd_and_hms(year, month_num, 1, 0, 0, 0).single()?;
    let (next_year, next_month) = if month_num == 12 {
        (year + 1, 1)
    } else {
        (year, month_num + 1)
    };
    let end = Utc.with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0).single()?;

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_range_covers_whole_month() {
        let (start, end) = month_range_utc("2025-02").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn december_rolls_over_the_year() {
        let (start, end) = month_range_utc("2024-12").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn malformed_months_are_rejected() {
        assert!(month_range_utc("2025").is_none());
        assert!(month_range_utc("2025-13").is_none());
        assert!(month_range_utc("2025-00").is_none());
        assert!(month_range_utc("banana").is_none());
    }

    #[test]
    fn ist_default_can_be_a_month_ahead_of_utc() {
        // 19:00 UTC on March 31 is already April 1 in IST.
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 19, 0, 0).unwrap();
        assert_eq!(current_month_ist(now), "2025-04");

        let midday = Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(current_month_ist(midday), "2025-03");
    }
}
