use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    repository::{Project, Status},
    shared::normalize,
};

/// Region value that places no constraint on the region.
pub const ALL_REGIONS: &str = "all";

/// The filter selection of a dashboard. Every unset field matches
/// everything; a project is kept only when all set fields match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Compared case-sensitively, region tags are a controlled vocabulary.
    pub region: Option<String>,
    /// Case-insensitive substring of the project name or city. Runs of
    /// whitespace compare equal to a single space.
    pub search: Option<String>,
    pub status: Option<Status>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_search<S: Into<String>>(mut self, search: S) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds criteria from query parameters `region`, `q` and `status`.
    /// Empty values are treated as absent.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let value = |key: &str| {
            params
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };
        Self {
            region: value("region").map(str::to_string),
            search: value("q").map(str::to_string),
            status: value("status").map(Status::parse),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        let matcher = self.matcher();
        matcher.region.is_none() && matcher.needle.is_none() && matcher.status.is_none()
    }

    /// Checks a single project. Filtering many projects should go through
    /// [`FilterCriteria::matcher`] so the search text is prepared once.
    pub fn matches(&self, project: &Project) -> bool {
        self.matcher().matches(project)
    }

    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            region: self
                .region
                .as_deref()
                .filter(|region| !region.is_empty() && *region != ALL_REGIONS),
            needle: self
                .search
                .as_deref()
                .map(normalize)
                .filter(|needle| !needle.is_empty()),
            status: self.status.as_ref(),
        }
    }
}

/// [`FilterCriteria`] with the search text normalized up front.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    region: Option<&'a str>,
    needle: Option<String>,
    status: Option<&'a Status>,
}

impl Matcher<'_> {
    pub fn matches(&self, project: &Project) -> bool {
        self.region.is_none_or(|region| *project.region == *region)
            && self.needle.as_deref().is_none_or(|needle| {
                project.normalized_name.contains(needle) || project.normalized_city.contains(needle)
            })
            && self.status.is_none_or(|status| project.status == *status)
    }
}

/// Keeps the projects matching `criteria`, preserving their relative order.
pub fn filter_projects(projects: &[Project], criteria: &FilterCriteria) -> Vec<Project> {
    let matcher = criteria.matcher();
    projects
        .par_iter()
        .filter(|project| matcher.matches(project))
        .cloned()
        .collect()
}
