use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::{
    filter::{FilterCriteria, filter_projects},
    repository::{LoadedData, Project},
    summary::{Summary, compute_summary},
};

/// Which projects the summary of a view is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryScope {
    #[default]
    Filtered,
    All,
}

impl SummaryScope {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "filtered" => Some(SummaryScope::Filtered),
            "all" => Some(SummaryScope::All),
            _ => None,
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub projects: Vec<Project>,
    pub summary: Summary,
    pub last_updated: Option<DateTime<FixedOffset>>,
}

/// Dashboard state: the snapshot being shown and the active filter.
/// Transitions consume the state and return the next one.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    data: Arc<LoadedData>,
    criteria: FilterCriteria,
}

impl Dashboard {
    pub fn new(data: Arc<LoadedData>) -> Self {
        Self {
            data,
            criteria: Default::default(),
        }
    }

    pub fn data(&self) -> &Arc<LoadedData> {
        &self.data
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        Self { criteria, ..self }
    }

    /// Swaps in a newer snapshot, keeping the filter selection.
    pub fn with_data(self, data: Arc<LoadedData>) -> Self {
        Self { data, ..self }
    }

    pub fn view(&self, scope: SummaryScope) -> DashboardView {
        let projects = filter_projects(self.data.projects.projects(), &self.criteria);
        let summary = match scope {
            SummaryScope::Filtered => compute_summary(&projects),
            SummaryScope::All => self.data.projects.summary(),
        };
        DashboardView {
            projects,
            summary,
            last_updated: self.data.last_updated,
        }
    }
}
