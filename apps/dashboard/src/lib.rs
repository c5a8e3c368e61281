//! Frontend core for the TechReady dashboard: typed API bindings plus the
//! checklist panel state that sits behind the rendered widgets.
//!
//! The panel owns the optimistic toggle protocol: a speculative local flip,
//! then commit-on-success or revert-on-failure once the server answers. It is
//! deliberately free of any rendering so the rollback path stays unit-testable
//! independent of network timing.

pub mod api;
pub mod models;
pub mod panel;

pub use api::{ApiError, DashboardApi};
pub use panel::{ChecklistPanel, PendingToggle, ToggleError};
