use std::collections::HashMap;

use coursesite_core::{
    PreloadRegistry, PreloadReport, ResourceDescriptor, ResourceId, ResourceKind,
};

fn doc(id: &str) -> ResourceDescriptor {
    ResourceDescriptor::new(id, ResourceKind::Document, &format!("https://example/{id}"))
        .expect("valid descriptor")
}

fn id(value: &str) -> ResourceId {
    ResourceId::parse(value).expect("valid id")
}

/// How many times each id was started across a sequence of calls.
fn started_counts(reports: &[PreloadReport]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for report in reports {
        for descriptor in &report.started {
            *counts.entry(descriptor.id().to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[test]
fn empty_list_is_noop() {
    let mut registry = PreloadRegistry::new();
    let report = registry.ensure_preloaded(&[]);
    assert!(report.is_noop());
    assert_eq!(report.already_submitted, 0);
    assert!(registry.is_empty());
}

#[test]
fn overlapping_calls_instantiate_each_id_once() {
    let mut registry = PreloadRegistry::new();
    let first = registry.ensure_preloaded(&[doc("a"), doc("b")]);
    let second = registry.ensure_preloaded(&[doc("b"), doc("c")]);

    assert_eq!(first.started, vec![doc("a"), doc("b")]);
    assert_eq!(second.started, vec![doc("c")]);
    assert_eq!(second.already_submitted, 1);
    let counts = started_counts(&[first, second]);
    for name in ["a", "b", "c"] {
        assert_eq!(counts.get(name), Some(&1), "starts for {name}");
    }
    assert_eq!(counts.len(), 3);
    assert_eq!(registry.len(), 3);
}

#[test]
fn repeated_entry_page_mounts_do_not_duplicate() {
    let mut registry = PreloadRegistry::new();
    let set = [doc("syllabus"), doc("schedule")];
    let reports: Vec<PreloadReport> = (0..5).map(|_| registry.ensure_preloaded(&set)).collect();
    let counts = started_counts(&reports);
    assert_eq!(counts.get("syllabus"), Some(&1));
    assert_eq!(counts.get("schedule"), Some(&1));
    assert!(reports[1..].iter().all(PreloadReport::is_noop));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.instances(), &set);
}

#[test]
fn duplicates_within_one_call_are_skipped() {
    let mut registry = PreloadRegistry::new();
    let report = registry.ensure_preloaded(&[doc("a"), doc("a"), doc("a")]);
    assert_eq!(report.started.len(), 1);
    assert_eq!(report.already_submitted, 2);
    assert!(report.url_conflicts.is_empty());
}

#[test]
fn unseen_ids_have_no_instances() {
    let mut registry = PreloadRegistry::new();
    let reports = [
        registry.ensure_preloaded(&[doc("a")]),
        registry.ensure_preloaded(&[doc("a"), doc("b")]),
    ];
    let counts = started_counts(&reports);
    assert!(registry.is_submitted(&id("a")));
    assert!(!registry.is_submitted(&id("z")));
    assert_eq!(counts.get("z"), None);
    assert!(registry
        .instances()
        .iter()
        .all(|descriptor| descriptor.id().as_str() != "z"));
}

#[test]
fn ids_differing_only_in_whitespace_are_distinct() {
    let mut registry = PreloadRegistry::new();
    let report = registry.ensure_preloaded(&[doc(" a"), doc("a")]);
    assert_eq!(report.started, vec![doc(" a"), doc("a")]);
    assert_eq!(report.already_submitted, 0);
    assert!(report.url_conflicts.is_empty());
    assert!(registry.is_submitted(&id(" a")));
    assert!(registry.is_submitted(&id("a")));
}

#[test]
fn changed_url_keeps_first_submission() {
    let mut registry = PreloadRegistry::new();
    registry.ensure_preloaded(&[doc("a")]);
    let moved = ResourceDescriptor::new("a", ResourceKind::Document, "https://example/other")
        .expect("valid descriptor");
    let report = registry.ensure_preloaded(&[moved.clone(), moved]);

    assert!(report.is_noop());
    assert_eq!(report.url_conflicts, vec![id("a")]);
    assert_eq!(registry.instances()[0].source_url(), "https://example/a");
    assert_eq!(registry.len(), 1);
}

#[test]
fn submission_order_is_preserved() {
    let mut registry = PreloadRegistry::new();
    registry.ensure_preloaded(&[doc("c"), doc("a")]);
    registry.ensure_preloaded(&[doc("b"), doc("a")]);
    let order: Vec<&str> = registry
        .instances()
        .iter()
        .map(|descriptor| descriptor.id().as_str())
        .collect();
    assert_eq!(order, vec!["c", "a", "b"]);
}
