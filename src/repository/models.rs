use std::{fmt::Display, sync::Arc};

use serde::{Serialize, Serializer};

use crate::shared::{Identifiable, Investment, Length};

/// Lifecycle stage of a project.
/// Datasets use different vocabularies, tags outside the known set are
/// kept verbatim in [`Status::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Operational,
    UnderConstruction,
    Ongoing,
    Completed,
    Planned,
    Delayed,
    Other(Arc<str>),
}

impl Status {
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        match tag.to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "operational" => Status::Operational,
            "under_construction" => Status::UnderConstruction,
            "ongoing" => Status::Ongoing,
            "completed" => Status::Completed,
            "planned" => Status::Planned,
            "delayed" => Status::Delayed,
            _ => Status::Other(tag.into()),
        }
    }

    /// The wire tag of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Operational => "operational",
            Status::UnderConstruction => "under_construction",
            Status::Ongoing => "ongoing",
            Status::Completed => "completed",
            Status::Planned => "planned",
            Status::Delayed => "delayed",
            Status::Other(tag) => tag,
        }
    }

    /// Whether trains already run on the line.
    pub fn is_open(&self) -> bool {
        matches!(self, Status::Operational | Status::Completed)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The year attached to a project. Open lines carry the year they opened,
/// everything else the year it is expected to be done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "year", rename_all = "snake_case")]
pub enum Opening {
    Operational(i32),
    Completion(i32),
}

impl Opening {
    pub fn year(&self) -> i32 {
        match self {
            Opening::Operational(year) | Opening::Completion(year) => *year,
        }
    }
}

/// One metro line or metro project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// The global internal index used for O(1) array lookups in the repository.
    #[serde(skip)]
    pub index: u32,
    /// The unique identifier assigned by the data source.
    pub id: u32,
    pub name: Arc<str>,
    /// A search-optimized version of the name (lowercase, collapsed whitespace).
    #[serde(skip)]
    pub normalized_name: Arc<str>,
    pub city: Arc<str>,
    #[serde(skip)]
    pub normalized_city: Arc<str>,
    pub country: Arc<str>,
    /// Coarse grouping key, a country or a continent depending on the dataset.
    pub region: Arc<str>,
    pub status: Status,
    pub length: Length,
    pub stations: Option<u32>,
    pub investment: Investment,
    pub from_station: Option<Arc<str>>,
    pub to_station: Option<Arc<str>>,
    pub line_number: Option<u32>,
    pub opening: Option<Opening>,
    /// Display only.
    pub line_color: Option<Arc<str>>,
    pub description: Arc<str>,
}

impl Identifiable for Project {
    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}
