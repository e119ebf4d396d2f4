// HTTP request handlers
use crate::application::dashboard_service::{ActionError, ChartLookupError, ChartScope};
use crate::application::renderable::UnitError;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

fn into_response(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the whole dashboard in one response
pub async fn get_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let dashboard = state.dashboard_service.render_dashboard();
    into_response(json_response(&dashboard, accepts_brotli(&headers)).await)
}

/// Stream the dashboard: skeleton first, then panels as they render
pub async fn stream_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rx = state.streaming_service.stream_dashboard();
    stream_from_receiver(rx, accepts_brotli(&headers))
}

pub async fn get_panel(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.render_panel(&id) {
        Some(panel) => into_response(json_response(&panel, accepts_brotli(&headers)).await),
        None => error_response(StatusCode::NOT_FOUND, format!("no panel with id '{}'", id)),
    }
}

pub async fn trigger_action(
    Path((id, action)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.trigger_action(&id, &action).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => {
            let status = match &e {
                ActionError::UnknownPanel(_) => StatusCode::NOT_FOUND,
                ActionError::PanelUnavailable(_) => StatusCode::CONFLICT,
                ActionError::Unit(UnitError::UnsupportedAction(_)) => StatusCode::BAD_REQUEST,
                ActionError::Unit(UnitError::Rejected(_)) => StatusCode::CONFLICT,
                ActionError::Unit(UnitError::Other(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            tracing::warn!("Action '{}' on panel '{}' failed: {}", action, id, e);
            error_response(status, e.to_string())
        }
    }
}

pub async fn get_chart(
    Path((scope, name)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = scope
        .parse::<ChartScope>()
        .and_then(|scope| state.dashboard_service.chart(scope, &name));

    match result {
        Ok(chart) => Json(chart).into_response(),
        Err(e @ (ChartLookupError::UnknownScope(_) | ChartLookupError::NotFound(_))) => {
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e @ ChartLookupError::Unsupported(_)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
    }
}

pub async fn get_custom_data(Path(key): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    match state.dashboard_service.custom_data(&key) {
        Some(value) => Json(value).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("no custom data for '{}'", key)),
    }
}
