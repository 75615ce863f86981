use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StatusDto {
    pub loaded: bool,
    pub project_count: usize,
    pub last_updated: Option<String>,
    /// Sequence of the newest fetch started.
    pub issued: u64,
    /// Sequence of the newest fetch whose result was applied.
    pub applied: u64,
    pub last_error: Option<ErrorDto>,
}

/// Health of the feed, doubles as the error display of the dashboard.
pub async fn status(State(state): State<Arc<AppState>>) -> Response {
    let status = state.store.status();
    let current = status.current.as_deref();
    Json(StatusDto {
        loaded: current.is_some(),
        project_count: current.map(|data| data.projects.len()).unwrap_or(0),
        last_updated: current
            .and_then(|data| data.last_updated)
            .map(|timestamp| timestamp.to_rfc3339()),
        issued: state.store.latest_issued(),
        applied: status.applied,
        last_error: status.last_error.map(|(kind, message)| ErrorDto {
            kind: kind.to_string(),
            message,
        }),
    })
    .into_response()
}
