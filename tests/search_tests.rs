use metrodash::prelude::*;

fn repository() -> Repository {
    LoadedData::load(&FeedReader::new()).unwrap().projects
}

fn names<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
    projects.iter().map(|project| &*project.name).collect()
}

#[test]
fn prefix_search_test() {
    let repository = repository();
    let result = repository.search_projects_by_name("magenta");
    assert_eq!(names(&result).first(), Some(&"Magenta Line (Line 8)"));
}

#[test]
fn typo_search_test() {
    let repository = repository();
    let result = repository.search_projects_by_name("purpel");
    assert!(names(&result).contains(&"Purple Line"));
}

#[test]
fn exact_matches_rank_first_test() {
    let repository = repository();
    let result = repository.search_projects_by_name("aqua line");
    assert_eq!(result.first().map(|project| project.id), Some(17));
}

#[test]
fn unrelated_search_is_empty_test() {
    let repository = repository();
    assert!(repository.search_projects_by_name("zzzzzz").is_empty());
    assert!(repository.search_projects_by_name("").is_empty());
}
