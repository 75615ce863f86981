use crate::{
    dto::{ProjectDto, SummaryDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrodash::prelude::*;
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct DashboardDto {
    pub projects: Vec<ProjectDto>,
    pub summary: SummaryDto,
    pub last_updated: Option<String>,
}

/// Projects matching `region`, `q` and `status`, in feed order.
pub async fn projects(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let data = state.snapshot()?;
    let criteria = FilterCriteria::from_query(&params);
    let result: Vec<_> = data
        .projects
        .filter(&criteria)
        .into_iter()
        .map(ProjectDto::from)
        .collect();
    debug!("{} projects match {:?}", result.len(), criteria);
    Ok(Json(result).into_response())
}

pub async fn project(
    Path(id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let data = state.snapshot()?;
    let project = data
        .projects
        .project_by_id(id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(ProjectDto::from(project)).into_response())
}

/// Filtered projects together with their summary, one frame of the dashboard.
pub async fn dashboard(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let data = state.snapshot()?;
    let scope = scope_from_query(&params)?;
    let view = Dashboard::new(data)
        .with_criteria(FilterCriteria::from_query(&params))
        .view(scope);
    Ok(Json(DashboardDto {
        projects: view.projects.iter().map(ProjectDto::from).collect(),
        summary: SummaryDto::from(&view.summary),
        last_updated: view.last_updated.map(|timestamp| timestamp.to_rfc3339()),
    })
    .into_response())
}

pub async fn summary(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let data = state.snapshot()?;
    let summary = match scope_from_query(&params)? {
        SummaryScope::All => data.projects.summary(),
        SummaryScope::Filtered => {
            compute_summary(data.projects.filter(&FilterCriteria::from_query(&params)))
        }
    };
    Ok(Json(SummaryDto::from(&summary)).into_response())
}

pub async fn regions(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let data = state.snapshot()?;
    let regions: Vec<String> = data
        .projects
        .regions()
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(Json(regions).into_response())
}

fn scope_from_query(params: &HashMap<String, String>) -> Result<SummaryScope, StatusCode> {
    match params.get("scope") {
        Some(value) => SummaryScope::parse(value).ok_or(StatusCode::BAD_REQUEST),
        None => Ok(SummaryScope::default()),
    }
}
