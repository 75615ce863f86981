use std::collections::HashMap;

use metrodash::{feed::FeedProject, prelude::*};

fn project(id: u32, name: &str, city: &str, region: &str, status: &str) -> Project {
    FeedProject {
        id,
        name: name.into(),
        city: city.into(),
        country: region.into(),
        region: region.into(),
        status: status.into(),
        length_km: 10.0,
        no_of_stations: Some(10),
        investment: "$1B".into(),
        from_station: None,
        to_station: None,
        operational_year: None,
        completion_year: None,
        line_number: None,
        line_color: None,
        description: String::new(),
    }
    .into()
}

fn projects() -> Vec<Project> {
    vec![
        project(1, "Red Line (Line 1)", "Delhi", "India", "operational"),
        project(2, "Purple Line", "Bangalore", "India", "operational"),
        project(3, "Aqua Line (Line 3)", "Mumbai", "India", "under_construction"),
        project(4, "Thomson-East Coast Line", "Singapore", "Asia", "ongoing"),
        project(5, "Grand Paris Express", "Paris", "Europe", "delayed"),
        project(6, "Line 2", "Purple Hills", "Europe", "planned"),
    ]
}

fn ids(projects: &[Project]) -> Vec<u32> {
    projects.iter().map(|project| project.id).collect()
}

#[test]
fn unconstrained_filter_is_identity_test() {
    let all = projects();
    assert_eq!(filter_projects(&all, &FilterCriteria::new()), all);
    assert_eq!(
        filter_projects(&all, &FilterCriteria::new().with_region("all")),
        all
    );
    assert!(FilterCriteria::new().with_region("all").is_unconstrained());
}

#[test]
fn region_is_case_sensitive_test() {
    let all = projects();
    let europe = filter_projects(&all, &FilterCriteria::new().with_region("Europe"));
    assert_eq!(ids(&europe), vec![5, 6]);
    let lowercase = filter_projects(&all, &FilterCriteria::new().with_region("europe"));
    assert!(lowercase.is_empty());
}

#[test]
fn search_matches_name_or_city_test() {
    let all = projects();
    let purple = filter_projects(&all, &FilterCriteria::new().with_search("PURPLE"));
    assert_eq!(ids(&purple), vec![2, 6]);
    let blank = filter_projects(&all, &FilterCriteria::new().with_search("   "));
    assert_eq!(blank, all);
}

#[test]
fn status_filter_is_exact_and_ordered_test() {
    let all = projects();
    let operational = filter_projects(
        &all,
        &FilterCriteria::new().with_status(Status::Operational),
    );
    assert_eq!(ids(&operational), vec![1, 2]);
    assert!(
        operational
            .iter()
            .all(|project| project.status == Status::Operational)
    );
    let expected: Vec<_> = all
        .iter()
        .filter(|project| project.status == Status::Operational)
        .cloned()
        .collect();
    assert_eq!(operational, expected);
}

#[test]
fn criteria_are_combined_test() {
    let all = projects();
    let criteria = FilterCriteria::new()
        .with_region("India")
        .with_search("line")
        .with_status(Status::UnderConstruction);
    assert_eq!(ids(&filter_projects(&all, &criteria)), vec![3]);
}

#[test]
fn matcher_agrees_with_criteria_test() {
    let all = projects();
    let criteria = FilterCriteria::new().with_search("  Purple   HILLS ");
    let matcher = criteria.matcher();
    for project in &all {
        assert_eq!(matcher.matches(project), criteria.matches(project));
    }
    assert_eq!(ids(&filter_projects(&all, &criteria)), vec![6]);
    assert!(!criteria.is_unconstrained());
}

#[test]
fn filter_is_idempotent_test() {
    let all = projects();
    let criteria = FilterCriteria::new().with_region("India").with_search("l");
    let once = filter_projects(&all, &criteria);
    let twice = filter_projects(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn criteria_from_query_test() {
    let params: HashMap<String, String> = [
        ("region", "India"),
        ("q", " mumbai "),
        ("status", "Under-Construction"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect();
    let criteria = FilterCriteria::from_query(&params);
    assert_eq!(criteria.region.as_deref(), Some("India"));
    assert_eq!(criteria.search.as_deref(), Some("mumbai"));
    assert_eq!(criteria.status, Some(Status::UnderConstruction));

    let empty: HashMap<String, String> = [("status".to_string(), String::new())].into();
    assert_eq!(FilterCriteria::from_query(&empty), FilterCriteria::new());
}

#[test]
fn repository_filter_matches_free_function_test() {
    let reader = FeedReader::new();
    let data = LoadedData::load(&reader).unwrap();
    let criteria = FilterCriteria::new().with_search("delhi");
    let borrowed: Vec<u32> = data
        .projects
        .filter(&criteria)
        .iter()
        .map(|project| project.id)
        .collect();
    let owned = filter_projects(data.projects.projects(), &criteria);
    assert_eq!(borrowed, ids(&owned));
    assert_eq!(borrowed, (1..=11).collect::<Vec<_>>());
}
