use crate::mapping::{map_label, map_labels, map_status, LABEL_MAP, STATUS_MAP};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_known_labels_are_translated() {
    assert_eq!(map_label("Type-Defect"), Some("bug"));
    assert_eq!(map_label("Type-Enhancement"), Some("enhancement"));
    assert_eq!(map_label("OpSys-OSX"), Some("OSX"));
    assert_eq!(map_label("Priority-Low"), Some("low"));
}

#[test]
fn test_unknown_labels_are_dropped() {
    assert_eq!(map_label("Priority-Medium"), None);
    assert_eq!(map_label("type-defect"), None);
    assert_eq!(
        map_labels(&labels(&["Priority-Low", "Unknown-X"]), None),
        vec!["low"]
    );
}

#[test]
fn test_mapped_labels_keep_source_order() {
    let mapped = map_labels(
        &labels(&["OpSys-Windows", "Milestone-1.0", "Type-Defect", "OpSys-Linux"]),
        None,
    );
    assert_eq!(mapped, vec!["Windows", "bug", "Linux"]);
}

#[test]
fn test_status_label_is_appended_once() {
    let mapped = map_labels(&labels(&["Type-Defect"]), Some("Duplicate"));
    assert_eq!(mapped, vec!["bug", "duplicate"]);
    assert_eq!(map_status("WontFix"), Some("wontfix"));
}

#[test]
fn test_unmapped_status_adds_nothing() {
    assert_eq!(map_status("Fixed"), None);
    assert!(map_labels(&labels(&[]), Some("Unknown")).is_empty());
    assert_eq!(map_labels(&labels(&["Type-Defect"]), Some("New")), vec!["bug"]);
}

#[test]
fn test_tables_have_expected_size() {
    assert_eq!(LABEL_MAP.len(), 7);
    assert_eq!(STATUS_MAP.len(), 3);
}
