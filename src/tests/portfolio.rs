use crate::views::{categories, filter_by_category, Project, ALL_CATEGORIES};

#[test]
fn test_categories_start_with_all() {
    let projects = Project::sample_data();
    let cats = categories(&projects);
    assert_eq!(cats[0], ALL_CATEGORIES);
}

#[test]
fn test_categories_are_distinct_in_first_appearance_order() {
    let projects = Project::sample_data();
    let cats = categories(&projects);
    assert_eq!(
        cats,
        vec!["All", "Web Development", "Web Design", "Mobile App"]
    );
}

#[test]
fn test_all_filter_returns_full_set() {
    let projects = Project::sample_data();
    let filtered = filter_by_category(&projects, ALL_CATEGORIES);
    assert_eq!(filtered.len(), projects.len());
}

#[test]
fn test_category_filter_matches_exactly() {
    let projects = Project::sample_data();
    let filtered = filter_by_category(&projects, "Mobile App");
    assert!(!filtered.is_empty());
    assert!(filtered.iter().all(|p| p.category == "Mobile App"));
    assert!(filtered.len() < projects.len());
}

#[test]
fn test_unknown_category_yields_nothing() {
    let projects = Project::sample_data();
    assert!(filter_by_category(&projects, "Embedded").is_empty());
}

#[test]
fn test_filter_preserves_order() {
    let projects = Project::sample_data();
    let filtered = filter_by_category(&projects, "Web Design");
    let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);
}
