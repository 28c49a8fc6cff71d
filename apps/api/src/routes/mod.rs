pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(analysis::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/report/render", post(report::handle_render))
        .with_state(state)
}
