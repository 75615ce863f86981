use std::collections::{HashMap, HashSet};

mod models;
mod source;
pub use models::*;

use chrono::{DateTime, FixedOffset};

use crate::{
    filter::FilterCriteria,
    shared,
    summary::{Summary, compute_summary},
};

/// The canonical, immutable project list of one load.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    projects: Box<[Project]>,
    project_lookup: HashMap<u32, u32>,
}

impl PartialEq for Repository {
    fn eq(&self, other: &Self) -> bool {
        self.projects == other.projects
    }
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Get a project with the given id.
    /// If no project is found with the given id None is returned.
    pub fn project_by_id(&self, id: u32) -> Option<&Project> {
        let index = *self.project_lookup.get(&id)?;
        self.projects.get(index as usize)
    }

    /// Distinct regions in the order they first appear.
    pub fn regions(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|project| &*project.region))
    }

    /// Distinct cities in the order they first appear.
    pub fn cities(&self) -> Vec<&str> {
        distinct(self.projects.iter().map(|project| &*project.city))
    }

    /// Projects matching all of the criteria, in repository order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Project> {
        let matcher = criteria.matcher();
        self.projects
            .iter()
            .filter(|project| matcher.matches(project))
            .collect()
    }

    /// Summary over every project in the repository.
    pub fn summary(&self) -> Summary {
        compute_summary(self.projects.iter())
    }

    /// Does a fuzzy search on all the projects, comparing their name to the needle.
    pub fn search_projects_by_name<'a>(&'a self, needle: &str) -> Vec<&'a Project> {
        shared::search(needle, &self.projects)
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

/// One loaded snapshot of the feed.
///
/// A new load always produces a whole new value, consumers compare
/// snapshots with `==` to decide whether anything changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedData {
    pub projects: Repository,
    pub last_updated: Option<DateTime<FixedOffset>>,
}
