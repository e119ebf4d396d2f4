// Presentation layer - HTTP routes over the composed dashboard
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_chart, get_custom_data, get_dashboard, get_panel, health_check, stream_dashboard, trigger_action,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Responses are compressed by the handlers themselves, so no CompressionLayer here.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/stream", get(stream_dashboard))
        .route("/panels/:id", get(get_panel))
        .route("/panels/:id/actions/:action", post(trigger_action))
        .route("/charts/:scope/:name", get(get_chart))
        .route("/data/:key", get(get_custom_data))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
