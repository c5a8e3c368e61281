pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyze;
use crate::checklist;
use crate::dashboard;
use crate::state::AppState;

async fn root() -> &'static str {
    "TechReady backend is running. Use /health or POST /analyze"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(analyze::handlers::handle_analyze))
        // Checklist core
        .route(
            "/roleChecklist/:role_id",
            get(checklist::handlers::handle_role_checklist),
        )
        .route(
            "/roleChecklist/:role_id/items/:item_id/toggle",
            post(checklist::handlers::handle_toggle_item),
        )
        // Dashboard collaborators
        .route("/api/dashboard/roles", get(dashboard::roles::handle_list_roles))
        .route(
            "/api/dashboard/hiring-calendar",
            get(dashboard::calendar::handle_hiring_calendar),
        )
        .route(
            "/api/dashboard/role/:role_id/guide",
            get(dashboard::guides::handle_role_guide),
        )
        .with_state(state)
}
