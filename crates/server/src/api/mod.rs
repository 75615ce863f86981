mod projects;
mod search;
mod status;

pub use projects::*;
pub use search::*;
pub use status::*;

use crate::state::AppState;
use axum::routing::get;
use std::sync::Arc;

pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/projects", get(projects))
        .route("/projects/{id}", get(project))
        .route("/dashboard", get(dashboard))
        .route("/summary", get(summary))
        .route("/regions", get(regions))
        .route("/search", get(search))
        .route("/status", get(status))
        .with_state(state)
}
