use crate::{
    feed::{self, Feed, FeedProject, FeedReader},
    repository::{LoadedData, Opening, Project, Repository, Status},
    shared::{Investment, Length, normalize},
};
use std::{collections::HashMap, sync::Arc, time::Instant};
use tracing::{debug, warn};

impl Repository {
    /// Validates the decoded feed and builds the canonical project list.
    /// Fails with [`feed::Error::Shape`] naming the first offending record.
    pub fn load_feed(mut self, feed: Feed) -> Result<Self, feed::Error> {
        debug!("Loading projects...");
        let now = Instant::now();
        let mut project_lookup: HashMap<u32, u32> = HashMap::with_capacity(feed.projects.len());
        let mut projects: Vec<Project> = Vec::with_capacity(feed.projects.len());
        for (i, project) in feed.projects.into_iter().enumerate() {
            validate(&project)?;
            if project_lookup.insert(project.id, i as u32).is_some() {
                return Err(feed::Error::Shape(format!(
                    "project {}: duplicate id",
                    project.id
                )));
            }
            let mut value: Project = project.into();
            value.index = i as u32;
            projects.push(value);
        }

        let unparseable = projects
            .iter()
            .filter(|project| !project.investment.is_parseable())
            .count();
        if unparseable > 0 {
            warn!("{unparseable} projects have an investment without a readable amount");
        }

        self.projects = projects.into();
        self.project_lookup = project_lookup;
        debug!("Loading projects took {:?}", now.elapsed());
        Ok(self)
    }
}

impl LoadedData {
    /// Reads, decodes and validates everything the reader points at.
    pub fn load(reader: &FeedReader) -> Result<Self, feed::Error> {
        let feed = reader.read()?;
        let last_updated = feed.last_updated;
        let projects = Repository::new().load_feed(feed)?;
        Ok(Self {
            projects,
            last_updated,
        })
    }
}

fn validate(project: &FeedProject) -> Result<(), feed::Error> {
    let required = [
        ("name", &project.name),
        ("city", &project.city),
        ("country", &project.country),
        ("region", &project.region),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(feed::Error::Shape(format!(
            "project {}: {field} is empty",
            project.id
        )));
    }
    if !project.length_km.is_finite() || project.length_km < 0.0 {
        return Err(feed::Error::Shape(format!(
            "project {}: lengthKm must be a non-negative number, got {}",
            project.id, project.length_km
        )));
    }
    Ok(())
}

impl From<FeedProject> for Project {
    fn from(value: FeedProject) -> Self {
        let status = Status::parse(&value.status);
        let opening = opening(&status, value.operational_year, value.completion_year);
        let name = value.name.trim();
        let city = value.city.trim();
        Self {
            index: u32::MAX,
            id: value.id,
            name: name.into(),
            normalized_name: normalize(name).into(),
            city: city.into(),
            normalized_city: normalize(city).into(),
            country: value.country.trim().into(),
            region: value.region.trim().into(),
            status,
            length: Length::from_km(value.length_km),
            stations: value.no_of_stations,
            investment: Investment::parse(&value.investment),
            from_station: value.from_station.map(Arc::from),
            to_station: value.to_station.map(Arc::from),
            line_number: value.line_number,
            opening,
            line_color: value.line_color.map(Arc::from),
            description: value.description.into(),
        }
    }
}

// Some datasets put the planned opening of unfinished lines in
// `operationalYear`, so the status decides how a year is read.
fn opening(status: &Status, operational: Option<i32>, completion: Option<i32>) -> Option<Opening> {
    if status.is_open() {
        operational
            .or(completion)
            .map(Opening::Operational)
    } else {
        completion.or(operational).map(Opening::Completion)
    }
}
