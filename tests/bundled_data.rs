//! The shipped data files must parse into the content types and agree
//! with the bundled fallback on the facts the UI relies on.

use std::collections::HashSet;

use folio::content::{samples, Post, Project};

fn load<T: serde::de::DeserializeOwned>(path: &str) -> Vec<T> {
    let data = std::fs::read(path).expect("data file should exist");
    serde_json::from_slice(&data).expect("data file should parse")
}

#[test]
fn projects_file_parses_with_unique_ids() {
    let projects: Vec<Project> = load("data/projects.json");
    assert_eq!(projects.len(), 8);
    let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), 8);
}

#[test]
fn projects_file_matches_bundled_samples() {
    let projects: Vec<Project> = load("data/projects.json");
    let bundled = samples::projects();
    assert_eq!(projects.len(), bundled.len());
    for (file, sample) in projects.iter().zip(&bundled) {
        assert_eq!(file.id, sample.id);
        assert_eq!(file.title, sample.title);
        assert_eq!(file.category, sample.category);
        assert_eq!(file.featured, sample.featured);
        assert_eq!(file.tools, sample.tools);
    }
}

#[test]
fn plant_ml_record_is_complete() {
    let projects: Vec<Project> = load("data/projects.json");
    let p = projects
        .iter()
        .find(|p| p.id == "plant-ml")
        .expect("plant-ml should be in the data file");
    assert_eq!(p.title, "Plant Health Prediction using ML");
    assert!(p.featured);
    assert!(p.github_link().is_some());
    assert!(p.demo_link().is_none());
}

#[test]
fn blog_file_parses_in_order() {
    let posts: Vec<Post> = load("data/blog.json");
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].date, "2025-06-01");
    assert_eq!(posts[2].title, "Designing Actionable Dashboards in Power BI");
}
