//! HTTP route handlers.

pub mod usage;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the router. A GET on any path is treated as a job assignment,
/// so the root route and the fallback share one handler.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(usage::report_usage))
        .fallback(get(usage::report_usage))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
