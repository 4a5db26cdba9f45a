pub mod form;
pub mod health;
pub mod insights;
pub mod ui;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(health::health))
        .route("/extract-insights", post(insights::extract_insights))
        .route("/", get(ui::show_form))
        .route("/ui/extract", post(ui::submit_form))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
