use std::collections::HashSet;
use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::api::ApiError;
use crate::models::{ChecklistItem, ChecklistResponse, ChecklistStats, ProgressState, ToggleResponse};

#[derive(Debug, Error)]
pub enum ToggleError {
    /// Overlapping toggles for one item are refused; the control stays
    /// disabled until the in-flight request settles.
    #[error("a toggle for this item is already in flight")]
    InFlight,

    #[error("unknown checklist item")]
    UnknownItem,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Receipt for a speculative flip. Records what the item looked like before,
/// so the flip can be undone if the server call fails.
#[derive(Debug, Clone)]
pub struct PendingToggle {
    pub item_id: Uuid,
    previous_completed: bool,
}

/// Local state behind the role checklist widget.
///
/// Toggles run as an explicit two-phase transition: `begin_toggle` applies
/// the flip speculatively, then exactly one of `commit` (adopt the
/// server-confirmed state) or `revert` (restore the pre-toggle state) closes
/// it out. `toggle_via` drives the whole protocol against a transport.
#[derive(Debug, Clone)]
pub struct ChecklistPanel {
    pub role_id: String,
    items: Vec<ChecklistItem>,
    stats: Option<ChecklistStats>,
    in_flight: HashSet<Uuid>,
}

impl ChecklistPanel {
    pub fn from_response(response: ChecklistResponse) -> Self {
        Self {
            role_id: response.role_id,
            items: response.items,
            stats: Some(response.stats),
            in_flight: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Server-computed stats from the last fetch. Stale between a toggle and
    /// the next refresh; use `done_count`/`completion_percent` for the live
    /// progress bar.
    pub fn stats(&self) -> Option<&ChecklistStats> {
        self.stats.as_ref()
    }

    pub fn is_in_flight(&self, item_id: Uuid) -> bool {
        self.in_flight.contains(&item_id)
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Completion percent over the loaded items, 0 when there are none.
    pub fn completion_percent(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        (100.0 * self.done_count() as f64 / self.items.len() as f64).round() as u32
    }

    /// Applies the speculative flip. Refused while a toggle for the same item
    /// is still in flight, so a double-click cannot race itself.
    pub fn begin_toggle(&mut self, item_id: Uuid) -> Result<PendingToggle, ToggleError> {
        if self.in_flight.contains(&item_id) {
            return Err(ToggleError::InFlight);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(ToggleError::UnknownItem)?;

        let previous_completed = item.completed;
        item.completed = !item.completed;
        self.in_flight.insert(item_id);

        Ok(PendingToggle {
            item_id,
            previous_completed,
        })
    }

    /// Replaces the speculative state with the server-confirmed value. For a
    /// single in-flight toggle the two coincide; the server still wins.
    pub fn commit(&mut self, pending: PendingToggle, confirmed: &ProgressState) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == pending.item_id) {
            item.completed = confirmed.completed;
        }
        self.in_flight.remove(&pending.item_id);
    }

    /// Restores the pre-toggle state after a failed server call.
    pub fn revert(&mut self, pending: PendingToggle) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == pending.item_id) {
            item.completed = pending.previous_completed;
        }
        self.in_flight.remove(&pending.item_id);
    }

    /// Runs the full toggle protocol: speculative flip, server call, then
    /// commit on success or revert on failure. Returns the confirmed
    /// completion state. Failures are surfaced, never retried.
    pub async fn toggle_via<F, Fut>(&mut self, item_id: Uuid, send: F) -> Result<bool, ToggleError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ToggleResponse, ApiError>>,
    {
        let pending = self.begin_toggle(item_id)?;
        match send().await {
            Ok(response) => {
                let completed = response.progress.completed;
                self.commit(pending, &response.progress);
                Ok(completed)
            }
            Err(err) => {
                self.revert(pending);
                Err(ToggleError::Api(err))
            }
        }
    }

    /// Items matching the search box, against title, detail, category,
    /// priority, and resource labels. Case-insensitive, surrounding
    /// whitespace ignored; an empty query matches everything. The server's
    /// focus stats never see this narrowing.
    pub fn matching_items(&self, query: &str) -> Vec<&ChecklistItem> {
        let needle = normalize(query);
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| {
                let mut haystack = format!(
                    "{} {} {} {}",
                    item.title, item.detail, item.category, item.priority
                );
                for resource in &item.resources {
                    haystack.push(' ');
                    haystack.push_str(&resource.label);
                }
                normalize(&haystack).contains(&needle)
            })
            .collect()
    }

    /// Groups items by category in first-seen order, for section rendering.
    pub fn grouped_by_category<'a>(
        items: &[&'a ChecklistItem],
    ) -> Vec<(String, Vec<&'a ChecklistItem>)> {
        let mut groups: Vec<(String, Vec<&ChecklistItem>)> = Vec::new();
        for &item in items {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, bucket)) => bucket.push(item),
                None => groups.push((item.category.clone(), vec![item])),
            }
        }
        groups
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceLink;
    use chrono::Utc;

    fn item(category: &str, title: &str, completed: bool) -> ChecklistItem {
        ChecklistItem {
            id: Uuid::new_v4(),
            category: category.to_string(),
            title: title.to_string(),
            detail: String::new(),
            priority: "P1".to_string(),
            est_hours: 2.0,
            order: Some(1),
            resources: Vec::new(),
            completed,
        }
    }

    fn panel(items: Vec<ChecklistItem>) -> ChecklistPanel {
        ChecklistPanel {
            role_id: "sde".to_string(),
            items,
            stats: None,
            in_flight: HashSet::new(),
        }
    }

    fn ok_response(completed: bool) -> ToggleResponse {
        ToggleResponse {
            ok: true,
            progress: ProgressState {
                completed,
                completed_at: completed.then(Utc::now),
            },
        }
    }

    fn outage() -> ApiError {
        ApiError::Api {
            status: 500,
            message: "A database error occurred".to_string(),
        }
    }

    #[test]
    fn begin_toggle_flips_speculatively() {
        let mut panel = panel(vec![item("DSA", "arrays", false)]);
        let id = panel.items()[0].id;

        let pending = panel.begin_toggle(id).unwrap();
        assert!(panel.items()[0].completed);
        assert!(panel.is_in_flight(id));
        assert_eq!(pending.item_id, id);
    }

    #[test]
    fn overlapping_toggle_is_refused_and_state_untouched() {
        let mut panel = panel(vec![item("DSA", "arrays", false)]);
        let id = panel.items()[0].id;

        let _pending = panel.begin_toggle(id).unwrap();
        let second = panel.begin_toggle(id);

        assert!(matches!(second, Err(ToggleError::InFlight)));
        // Still exactly one flip applied.
        assert!(panel.items()[0].completed);
    }

    #[test]
    fn unknown_item_is_refused() {
        let mut panel = panel(vec![item("DSA", "arrays", false)]);
        assert!(matches!(
            panel.begin_toggle(Uuid::new_v4()),
            Err(ToggleError::UnknownItem)
        ));
    }

    #[tokio::test]
    async fn successful_toggle_adopts_server_state() {
        let mut panel = panel(vec![item("DSA", "arrays", false)]);
        let id = panel.items()[0].id;

        let completed = panel
            .toggle_via(id, || async { Ok(ok_response(true)) })
            .await
            .unwrap();

        assert!(completed);
        assert!(panel.items()[0].completed);
        assert!(!panel.is_in_flight(id));
    }

    #[tokio::test]
    async fn failed_toggle_reverts_to_pre_toggle_state() {
        let mut panel = panel(vec![item("DSA", "arrays", false)]);
        let id = panel.items()[0].id;

        let result = panel.toggle_via(id, || async { Err(outage()) }).await;

        assert!(matches!(result, Err(ToggleError::Api(_))));
        assert!(!panel.items()[0].completed);
        assert!(!panel.is_in_flight(id));

        // The failure cleared the in-flight mark, so a retry is possible.
        assert!(panel.begin_toggle(id).is_ok());
    }

    #[tokio::test]
    async fn server_value_wins_over_speculation() {
        // Speculation says true, the server says false; the server wins.
        let mut panel = panel(vec![item("DSA", "arrays", false)]);
        let id = panel.items()[0].id;

        let completed = panel
            .toggle_via(id, || async { Ok(ok_response(false)) })
            .await
            .unwrap();

        assert!(!completed);
        assert!(!panel.items()[0].completed);
    }

    #[test]
    fn completion_percent_rounds_and_handles_empty() {
        assert_eq!(panel(Vec::new()).completion_percent(), 0);

        let mut items = vec![
            item("DSA", "a", true),
            item("DSA", "b", false),
            item("DSA", "c", false),
        ];
        assert_eq!(panel(items.clone()).completion_percent(), 33);
        items[1].completed = true;
        assert_eq!(panel(items).completion_percent(), 67);
    }

    #[test]
    fn search_matches_resource_labels_and_ignores_case() {
        let mut with_resource = item("Projects", "full-stack project", false);
        with_resource.resources.push(ResourceLink {
            label: "System Design Primer".to_string(),
            url: "https://example.com".to_string(),
        });
        let panel = panel(vec![with_resource, item("DSA", "arrays", false)]);

        assert_eq!(panel.matching_items("  SYSTEM design ").len(), 1);
        assert_eq!(panel.matching_items("arrays").len(), 1);
        assert_eq!(panel.matching_items("p1").len(), 2);
        assert_eq!(panel.matching_items("").len(), 2);
        assert!(panel.matching_items("kubernetes").is_empty());
    }

    #[test]
    fn grouping_keeps_first_seen_category_order() {
        let panel = panel(vec![
            item("Projects", "p1", false),
            item("DSA", "d1", false),
            item("Projects", "p2", false),
        ]);
        let matched = panel.matching_items("");
        let groups = ChecklistPanel::grouped_by_category(&matched);

        let names: Vec<&str> = groups.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["Projects", "DSA"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
