//! Tests for the filterable field catalog.

use crate::FieldCatalog;
use crate::FilterField;

#[test]
fn names_are_lowercased_and_ordered() {
    let catalog = FieldCatalog::from_names(["Name", "CONTROLLERID", "description"]);
    let names: Vec<_> = catalog.names().collect();
    assert_eq!(names, ["name", "controllerid", "description"]);
}

#[test]
fn lookup_ignores_case() {
    let catalog = FieldCatalog::target_fields();
    assert!(catalog.get("ControllerId").is_some());
    assert!(catalog.get("colour").is_none());
}

#[test]
fn target_fields_classify_compound_selectors() {
    let catalog = FieldCatalog::target_fields();

    assert!(catalog.has_sub_attributes("assignedds"));
    assert!(catalog.has_sub_attributes("assignedds.ver"));
    assert!(!catalog.has_sub_attributes("name"));
    assert!(catalog.is_map("attribute"));
    assert!(catalog.is_map("metadata"));
    assert!(!catalog.is_map("assignedds"));
    assert_eq!(
        catalog.get("targettype").map(FilterField::sub_attributes),
        Some(&["key".to_string(), "name".to_string()][..]),
    );
}

/// Verifies which selectors count as complete.
#[test]
fn contains_path_requires_a_complete_selector() {
    let catalog = FieldCatalog::target_fields();

    assert!(catalog.contains_path("name"));
    assert!(catalog.contains_path("assignedds.version"));
    assert!(catalog.contains_path("AssignedDS.Name"));
    assert!(!catalog.contains_path("assignedds."));
    assert!(!catalog.contains_path("assignedds.ver"));
    assert!(!catalog.contains_path("name.first"));
    assert!(!catalog.contains_path("colour"));
}

#[test]
fn later_duplicates_replace_earlier_fields() {
    let catalog = FieldCatalog::new([
        FilterField::simple("tag"),
        FilterField::map("TAG"),
    ]);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.is_map("tag"));
}

#[test]
fn fields_deserialize_with_defaults() {
    let field: FilterField = serde_json::from_str(r#"{"name": "ipaddress"}"#).unwrap();
    assert_eq!(field, FilterField::simple("ipaddress"));
}
