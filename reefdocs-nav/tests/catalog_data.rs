use std::collections::HashSet;

use reefdocs_nav::SectionCatalog;

#[test]
fn static_catalog_loads_and_is_ordered() {
    let catalog = SectionCatalog::load_from_static();
    assert!(!catalog.is_empty(), "embedded catalog must not be empty");
    assert_eq!(catalog.sections[0].id, "introduction");
    assert_eq!(catalog.last_id(), Some("ornaments"));
}

#[test]
fn static_catalog_ids_are_unique_and_linkable() {
    let catalog = SectionCatalog::load_from_static();
    let mut seen = HashSet::new();
    for section in &catalog.sections {
        assert!(seen.insert(section.id.clone()), "duplicate id {}", section.id);
        assert!(!section.id.is_empty());
        assert!(
            section.id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "id {} must be usable as a DOM id and data-target",
            section.id
        );
        assert!(!section.title.is_empty());
        assert!(!section.body.is_empty(), "section {} has no content", section.id);
    }
}

#[test]
fn catalog_survives_unknown_shape() {
    assert!(SectionCatalog::from_json("{}").is_ok_and(|c| c.is_empty()));
    assert!(SectionCatalog::from_json("not json").is_err());
}
