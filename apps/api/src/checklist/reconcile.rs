use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::checklist::catalog::{self, ORDER_SENTINEL};
use crate::checklist::progress;
use crate::errors::AppError;
use crate::models::checklist::{ChecklistItemRow, Priority, ProgressRow};

/// A catalog item annotated with the user's completion state.
#[derive(Debug, Clone, Serialize)]
pub struct MergedItem {
    #[serde(flatten)]
    pub item: ChecklistItemRow,
    pub completed: bool,
}

/// Aggregates derived from the merged list. Recomputed on every view build,
/// never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistStats {
    pub done_count: usize,
    pub total_count: usize,
    pub completion_percent: u32,
    pub p0_remaining: usize,
    pub remaining_hours: f64,
    pub this_week_focus: Vec<MergedItem>,
}

/// The read-side projection combining catalog and progress for one user/role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedChecklistView {
    pub role_id: String,
    pub items: Vec<MergedItem>,
    pub stats: ChecklistStats,
}

/// Builds the merged checklist for one user and role: every active catalog
/// item annotated with completion, plus the derived stats. Pure read; no
/// write side effects.
pub async fn build_view(
    pool: &PgPool,
    user_id: &str,
    role_id: &str,
) -> Result<MergedChecklistView, AppError> {
    let items = catalog::list_active_items(pool, role_id).await?;
    let records = progress::get_progress(pool, user_id, role_id).await?;

    let items = merge_items(items, &records);
    let stats = compute_stats(&items);

    Ok(MergedChecklistView {
        role_id: role_id.to_string(),
        items,
        stats,
    })
}

/// Annotates catalog items with completion from progress records. A missing
/// record reads as not completed, which keeps the merge total. Progress can
/// only annotate the catalog set: records for items outside it are ignored.
pub fn merge_items(items: Vec<ChecklistItemRow>, records: &[ProgressRow]) -> Vec<MergedItem> {
    let completed_by_item: HashMap<Uuid, bool> =
        records.iter().map(|r| (r.item_id, r.completed)).collect();

    items
        .into_iter()
        .map(|item| MergedItem {
            completed: completed_by_item.get(&item.id).copied().unwrap_or(false),
            item,
        })
        .collect()
}

pub fn compute_stats(items: &[MergedItem]) -> ChecklistStats {
    let total_count = items.len();
    let done_count = items.iter().filter(|m| m.completed).count();

    let completion_percent = if total_count == 0 {
        0
    } else {
        (100.0 * done_count as f64 / total_count as f64).round() as u32
    };

    let p0_remaining = items
        .iter()
        .filter(|m| m.item.priority == Priority::P0 && !m.completed)
        .count();

    let remaining_hours = items
        .iter()
        .filter(|m| !m.completed)
        .map(|m| m.item.est_hours)
        .sum();

    ChecklistStats {
        done_count,
        total_count,
        completion_percent,
        p0_remaining,
        remaining_hours,
        this_week_focus: this_week_focus(items),
    }
}

/// The first three incomplete items by (priority rank, display order), with
/// catalog order breaking ties. Selected over the full item list; client-side
/// search narrowing never applies here.
pub fn this_week_focus(items: &[MergedItem]) -> Vec<MergedItem> {
    let mut open: Vec<&MergedItem> = items.iter().filter(|m| !m.completed).collect();
    open.sort_by_key(|m| (m.item.priority, m.item.sort_order.unwrap_or(ORDER_SENTINEL)));
    open.into_iter().take(3).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn item(title: &str, priority: Priority, est_hours: f64, sort_order: Option<i32>) -> ChecklistItemRow {
        ChecklistItemRow {
            id: Uuid::new_v4(),
            role_id: "sde".to_string(),
            category: "DSA".to_string(),
            title: title.to_string(),
            detail: String::new(),
            priority,
            est_hours,
            sort_order,
            resources: Json(Vec::new()),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn record(item_id: Uuid, completed: bool) -> ProgressRow {
        let now = Utc::now();
        ProgressRow {
            user_id: "demo-user".to_string(),
            role_id: "sde".to_string(),
            item_id,
            completed,
            completed_at: completed.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn merge_annotates_every_item_exactly_once() {
        let items = vec![
            item("a", Priority::P0, 1.0, Some(1)),
            item("b", Priority::P1, 1.0, Some(2)),
            item("c", Priority::P2, 1.0, Some(3)),
        ];
        let done_id = items[1].id;
        let merged = merge_items(items, &[record(done_id, true)]);

        assert_eq!(merged.len(), 3);
        for m in &merged {
            assert_eq!(m.completed, m.item.id == done_id);
        }
    }

    #[test]
    fn progress_for_unknown_items_is_ignored() {
        let items = vec![item("a", Priority::P0, 1.0, Some(1))];
        let merged = merge_items(items, &[record(Uuid::new_v4(), true)]);

        assert_eq!(merged.len(), 1);
        assert!(!merged[0].completed);
    }

    #[test]
    fn empty_catalog_reports_zero_percent() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.completion_percent, 0);
        assert_eq!(stats.total_count, 0);
        assert!(stats.this_week_focus.is_empty());
    }

    #[test]
    fn completion_percent_rounds_to_nearest() {
        let items = vec![
            item("a", Priority::P1, 1.0, Some(1)),
            item("b", Priority::P1, 1.0, Some(2)),
            item("c", Priority::P1, 1.0, Some(3)),
        ];
        let done_id = items[0].id;
        let merged = merge_items(items, &[record(done_id, true)]);
        // 1/3 -> 33, not 34.
        assert_eq!(compute_stats(&merged).completion_percent, 33);

        let two_done: Vec<MergedItem> = merged
            .iter()
            .enumerate()
            .map(|(i, m)| MergedItem {
                item: m.item.clone(),
                completed: i < 2,
            })
            .collect();
        assert_eq!(compute_stats(&two_done).completion_percent, 67);
    }

    #[test]
    fn fresh_role_reports_full_remaining_work() {
        // Five catalog items, no progress yet.
        let items = vec![
            item("arrays", Priority::P0, 8.0, Some(1)),
            item("forty problems", Priority::P0, 20.0, Some(2)),
            item("os basics", Priority::P1, 6.0, Some(1)),
            item("project", Priority::P0, 25.0, Some(1)),
            item("resume bullets", Priority::P0, 2.0, Some(1)),
        ];
        let merged = merge_items(items, &[]);
        let stats = compute_stats(&merged);

        assert_eq!(stats.completion_percent, 0);
        assert_eq!(stats.p0_remaining, 4);
        assert!((stats.remaining_hours - 61.0).abs() < f64::EPSILON);
    }

    #[test]
    fn completing_one_of_five_moves_percent_by_twenty() {
        let items: Vec<ChecklistItemRow> = (0..5)
            .map(|i| item(&format!("t{i}"), Priority::P1, 1.0, Some(i)))
            .collect();
        let done_id = items[0].id;

        let before = compute_stats(&merge_items(items.clone(), &[]));
        let after = compute_stats(&merge_items(items, &[record(done_id, true)]));

        assert_eq!(before.completion_percent, 0);
        assert_eq!(after.completion_percent, 20);
        assert_eq!(after.done_count, before.done_count + 1);
    }

    #[test]
    fn focus_is_at_most_three_incomplete_items_by_priority_then_order() {
        let items = vec![
            item("p2-first", Priority::P2, 1.0, Some(1)),
            item("p0-late", Priority::P0, 1.0, Some(9)),
            item("p0-early", Priority::P0, 1.0, Some(2)),
            item("p1", Priority::P1, 1.0, Some(1)),
            item("p0-done", Priority::P0, 1.0, Some(1)),
        ];
        let done_id = items[4].id;
        let merged = merge_items(items, &[record(done_id, true)]);

        let focus = this_week_focus(&merged);
        let titles: Vec<&str> = focus.iter().map(|m| m.item.title.as_str()).collect();
        assert_eq!(titles, vec!["p0-early", "p0-late", "p1"]);
        assert!(focus.iter().all(|m| !m.completed));
    }

    #[test]
    fn focus_treats_missing_order_as_sentinel() {
        let items = vec![
            item("no-order", Priority::P0, 1.0, None),
            item("ordered", Priority::P0, 1.0, Some(3)),
        ];
        let merged = merge_items(items, &[]);

        let focus = this_week_focus(&merged);
        assert_eq!(focus[0].item.title, "ordered");
        assert_eq!(focus[1].item.title, "no-order");
    }
}
