use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::checklist::ChecklistItemRow;

/// Items with no explicit display order sort after every ordered item.
pub const ORDER_SENTINEL: i32 = 999;

/// Returns the active checklist items for a role, in display order.
///
/// Display order is (category in first-seen order, priority rank, display
/// order), with insertion order breaking the remaining ties. Inactive items
/// never appear.
pub async fn list_active_items(
    pool: &PgPool,
    role_id: &str,
) -> Result<Vec<ChecklistItemRow>, sqlx::Error> {
    let mut items = sqlx::query_as::<_, ChecklistItemRow>(
        r#"
        SELECT * FROM checklist_items
        WHERE role_id = $1 AND is_active
        ORDER BY category ASC, sort_order ASC NULLS LAST, created_at ASC
        "#,
    )
    .bind(role_id)
    .fetch_all(pool)
    .await?;

    order_for_display(&mut items);
    Ok(items)
}

/// Sorts items into display order. Categories keep the order they first
/// appear in; within a category, priority rank wins, then display order
/// (missing order sorts last). The sort is stable, so equal keys keep their
/// incoming order.
pub fn order_for_display(items: &mut [ChecklistItemRow]) {
    let mut category_rank: HashMap<String, usize> = HashMap::new();
    for item in items.iter() {
        let next = category_rank.len();
        category_rank.entry(item.category.clone()).or_insert(next);
    }

    items.sort_by_key(|item| {
        (
            category_rank[&item.category],
            item.priority,
            item.sort_order.unwrap_or(ORDER_SENTINEL),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::checklist::Priority;
    use chrono::Utc;
    use sqlx::types::Json;
    use uuid::Uuid;

    fn item(
        category: &str,
        title: &str,
        priority: Priority,
        sort_order: Option<i32>,
    ) -> ChecklistItemRow {
        ChecklistItemRow {
            id: Uuid::new_v4(),
            role_id: "sde".to_string(),
            category: category.to_string(),
            title: title.to_string(),
            detail: String::new(),
            priority,
            est_hours: 1.0,
            sort_order,
            resources: Json(Vec::new()),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn titles(items: &[ChecklistItemRow]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let mut items = vec![
            item("Projects", "project", Priority::P0, Some(1)),
            item("DSA", "dsa-1", Priority::P0, Some(1)),
            item("Projects", "project-2", Priority::P1, Some(2)),
        ];
        order_for_display(&mut items);
        assert_eq!(titles(&items), vec!["project", "project-2", "dsa-1"]);
    }

    #[test]
    fn priority_outranks_display_order_within_category() {
        let mut items = vec![
            item("DSA", "late-but-p0", Priority::P0, Some(9)),
            item("DSA", "early-but-p2", Priority::P2, Some(1)),
            item("DSA", "p1", Priority::P1, Some(1)),
        ];
        order_for_display(&mut items);
        assert_eq!(titles(&items), vec!["late-but-p0", "p1", "early-but-p2"]);
    }

    #[test]
    fn missing_display_order_sorts_last() {
        let mut items = vec![
            item("DSA", "unordered", Priority::P1, None),
            item("DSA", "ordered", Priority::P1, Some(5)),
        ];
        order_for_display(&mut items);
        assert_eq!(titles(&items), vec!["ordered", "unordered"]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut items = vec![
            item("DSA", "first", Priority::P1, Some(1)),
            item("DSA", "second", Priority::P1, Some(1)),
        ];
        order_for_display(&mut items);
        assert_eq!(titles(&items), vec!["first", "second"]);
    }
}
