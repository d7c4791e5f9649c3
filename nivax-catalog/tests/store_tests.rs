use nivax_catalog::{
    ALL_GROUPS, CatalogStore, EntryFields, Error, Group, GroupRecord, ImageResolver,
    ImageSource, Item, ItemRecord,
};
use pretty_assertions::assert_eq;

fn group(id: &str, item_ids: &[&str]) -> Group {
    let mut group = Group::new(EntryFields::new(id, id));
    for item_id in item_ids {
        group.add_item(Item::new(EntryFields::new(*item_id, *item_id)));
    }
    group
}

// ── Sample catalog ───────────────────────────────────────────────

#[test]
fn sample_has_two_groups_of_six() {
    let store = CatalogStore::sample().unwrap();
    let groups = store.get_groups(ALL_GROUPS).unwrap();

    let titles: Vec<_> = groups.iter().map(|g| g.entry().title()).collect();
    assert_eq!(titles, vec!["Modern Furniture", "Perfect Furniture"]);
    assert_eq!(store.item_count(), 12);
    for group in groups {
        assert_eq!(group.items().len(), 6);
        assert_eq!(group.top_items_len(), 6);
    }
}

#[test]
fn sample_items_keep_ids_spans_and_back_references() {
    let store = CatalogStore::sample().unwrap();

    let bean_bag = store.get_item("Big-Group-1-Item1").unwrap();
    let bean_bag = bean_bag.borrow();
    assert_eq!(bean_bag.entry().title(), "Bean Bag");
    assert_eq!((bean_bag.col_span(), bean_bag.row_span()), (79, 49));
    assert_eq!(bean_bag.group_id().unwrap().as_str(), "Group-1");
    assert!(bean_bag.content().contains("Zanotta"));

    let headboard = store.get_item("Small-Group-2-Item6").unwrap();
    let headboard = headboard.borrow();
    assert_eq!(headboard.entry().title(), "Headboard");
    assert_eq!(headboard.col_span(), 53);
    let owner = store.get_group(headboard.group_id().unwrap().as_str()).unwrap();
    assert_eq!(owner.entry().title(), "Perfect Furniture");
}

#[test]
fn sample_images_resolve_against_packaged_base() {
    let store = CatalogStore::sample().unwrap();
    let group = store.get_group("Group-1").unwrap();
    assert_eq!(
        store.image_of(group.entry()).unwrap().uri(),
        "ms-appx:///Assets/10.jpg"
    );
}

// ── Queries ──────────────────────────────────────────────────────

#[test]
fn get_groups_rejects_other_collections() {
    let store = CatalogStore::sample().unwrap();
    let err = store.get_groups("SomeGroups").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(err.to_string().contains("AllGroups"));
    assert!(store.get_groups("allgroups").is_err());
}

#[test]
fn get_groups_preserves_insertion_order() {
    let store = CatalogStore::builder()
        .group(group("B", &[]))
        .group(group("A", &[]))
        .group(group("C", &[]))
        .build()
        .unwrap();
    let ids: Vec<_> = store
        .get_groups(ALL_GROUPS)
        .unwrap()
        .iter()
        .map(|g| g.id().to_string())
        .collect();
    assert_eq!(ids, vec!["B", "A", "C"]);
    assert_eq!(store.groups().len(), 3);
}

#[test]
fn absent_ids_return_none() {
    let store = CatalogStore::sample().unwrap();
    assert!(store.get_group("Group-3").is_none());
    assert!(store.get_item("Big-Group-3-Item1").is_none());
    assert!(store.get_item("Group-1").is_none());
    assert!(store.get_group("Big-Group-1-Item1").is_none());
}

#[test]
fn item_lookup_spans_groups() {
    let store = CatalogStore::builder()
        .group(group("G1", &["a", "b"]))
        .group(group("G2", &["c"]))
        .build()
        .unwrap();
    let c = store.get_item("c").unwrap();
    assert_eq!(c.borrow().group_id().unwrap().as_str(), "G2");
    assert_eq!(store.item_count(), 3);
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn duplicate_group_ids_are_rejected() {
    let err = CatalogStore::builder()
        .group(group("G", &[]))
        .group(group("G", &[]))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId(ref id) if id.as_str() == "G"));
}

#[test]
fn duplicate_item_ids_across_groups_are_rejected() {
    let err = CatalogStore::builder()
        .group(group("G1", &["x"]))
        .group(group("G2", &["x"]))
        .build()
        .unwrap_err();
    assert_eq!(err.to_string(), "duplicate entry id: x");
}

#[test]
fn item_id_may_not_reuse_group_id() {
    let result = CatalogStore::builder().group(group("G1", &["G1"])).build();
    assert!(matches!(result, Err(Error::DuplicateId(_))));
}

struct FixedResolver;

impl ImageResolver for FixedResolver {
    fn resolve(&self, path: &str) -> ImageSource {
        ImageSource::new(format!("fixed:{path}"))
    }
}

#[test]
fn custom_resolver_is_used() {
    let entry = EntryFields::new("G", "G").with_image_path(Some("a.png".to_string()));
    let store = CatalogStore::builder()
        .resolver(FixedResolver)
        .group(Group::new(entry))
        .build()
        .unwrap();
    let group = store.get_group("G").unwrap();
    assert_eq!(store.image_of(group.entry()).unwrap().uri(), "fixed:a.png");
}

// ── Records ──────────────────────────────────────────────────────

#[test]
fn records_export_matches_sample_source() {
    let store = CatalogStore::sample().unwrap();
    let records = store.to_records();
    let rebuilt = CatalogStore::from_records(records.clone()).unwrap();
    assert_eq!(rebuilt.to_records(), records);
    assert_eq!(records[0].items[1].title, "Chaise Longue");
    assert_eq!(records[1].image_path.as_deref(), Some("Assets/20.jpg"));
}

#[test]
fn record_defaults_fill_missing_fields() {
    let json = r#"[{"id": "G", "title": "Group", "items": [{"id": "I", "title": "Item"}]}]"#;
    let records: Vec<GroupRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(
        records[0].items[0],
        ItemRecord {
            id: "I".into(),
            title: "Item".to_string(),
            subtitle: String::new(),
            image_path: None,
            description: String::new(),
            content: String::new(),
            col_span: 1,
            row_span: 1,
        }
    );
    let store = CatalogStore::from_records(records).unwrap();
    assert!(store.get_item("I").is_some());
}

#[test]
fn zero_span_record_fails_to_build() {
    let json = r#"[{"id": "G", "title": "Group", "items": [{"id": "I", "title": "Item", "row_span": 0}]}]"#;
    let records: Vec<GroupRecord> = serde_json::from_str(json).unwrap();
    assert!(matches!(
        CatalogStore::from_records(records),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn store_debug_summarizes() {
    let store = CatalogStore::sample().unwrap();
    assert_eq!(
        format!("{store:?}"),
        "CatalogStore { groups: 2, items: 12 }"
    );
}
