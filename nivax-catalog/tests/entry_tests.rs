use nivax_catalog::{
    EntryFields, Error, ImageResolver, ImageSource, Item, UriImageResolver, property,
};
use nivax_notify::NotifyPropertyChanged;
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct CountingResolver {
    calls: Cell<usize>,
}

impl CountingResolver {
    fn new() -> Self {
        Self { calls: Cell::new(0) }
    }
}

impl ImageResolver for CountingResolver {
    fn resolve(&self, path: &str) -> ImageSource {
        self.calls.set(self.calls.get() + 1);
        ImageSource::new(format!("test:///{path}"))
    }
}

fn watch(target: &mut impl NotifyPropertyChanged) -> Rc<RefCell<Vec<&'static str>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    target.on_property_changed(move |name| sink.borrow_mut().push(name));
    log
}

fn stool() -> EntryFields {
    EntryFields::new("Big-Group-1-Item4", "Stool")
        .with_subtitle("Stool")
        .with_description("One of the earliest forms of seat furniture.")
        .with_image_path(Some("Assets/14.jpg".to_string()))
}

// ── EntryFields ──────────────────────────────────────────────────

#[test]
fn builder_sets_fields_without_notifying() {
    let entry = stool();
    assert_eq!(entry.id().as_str(), "Big-Group-1-Item4");
    assert_eq!(entry.title(), "Stool");
    assert_eq!(entry.subtitle(), "Stool");
    assert_eq!(entry.image_path(), Some("Assets/14.jpg"));
    assert!(!entry.is_image_resolved());
    assert_eq!(entry.to_string(), "Stool");
}

#[test]
fn each_setter_names_its_field() {
    let mut entry = stool();
    let log = watch(&mut entry);

    assert!(entry.set_id("Big-Group-1-Item9"));
    assert!(entry.set_title("Bar Stool"));
    assert!(entry.set_subtitle("Tall"));
    assert!(entry.set_description("Taller."));

    assert_eq!(
        *log.borrow(),
        vec![
            property::UNIQUE_ID,
            property::TITLE,
            property::SUBTITLE,
            property::DESCRIPTION
        ]
    );
}

#[test]
fn equal_values_are_silent() {
    let mut entry = stool();
    let log = watch(&mut entry);

    assert!(!entry.set_id("Big-Group-1-Item4"));
    assert!(!entry.set_title("Stool"));
    assert!(!entry.set_subtitle("Stool"));

    assert!(log.borrow().is_empty());
}

// ── Images ───────────────────────────────────────────────────────

#[test]
fn path_resolves_once_and_is_cached() {
    let entry = stool();
    let resolver = CountingResolver::new();

    let first = entry.image(&resolver);
    let second = entry.image(&resolver);

    assert_eq!(first, Some(ImageSource::new("test:///Assets/14.jpg")));
    assert_eq!(first, second);
    assert_eq!(resolver.calls.get(), 1);
    assert!(entry.is_image_resolved());
}

#[test]
fn no_path_means_no_image() {
    let entry = EntryFields::new("g", "Group");
    let resolver = CountingResolver::new();
    assert_eq!(entry.image(&resolver), None);
    assert_eq!(resolver.calls.get(), 0);
}

#[test]
fn explicit_image_discards_path() {
    let mut entry = stool();
    let log = watch(&mut entry);
    let resolver = CountingResolver::new();
    let explicit = ImageSource::new("https://example.com/stool.png");

    assert!(entry.set_image(Some(explicit.clone())));
    assert_eq!(entry.image_path(), None);
    assert_eq!(entry.image(&resolver), Some(explicit.clone()));
    assert_eq!(resolver.calls.get(), 0);

    assert!(!entry.set_image(Some(explicit)));
    assert_eq!(*log.borrow(), vec![property::IMAGE]);
}

#[test]
fn explicit_image_equal_to_resolved_is_silent() {
    let mut entry = stool();
    let resolver = UriImageResolver::default();
    let resolved = entry.image(&resolver).unwrap();
    assert_eq!(resolved.uri(), "ms-appx:///Assets/14.jpg");
    let log = watch(&mut entry);

    assert!(!entry.set_image(Some(resolved.clone())));
    assert_eq!(entry.image_path(), None);
    assert_eq!(entry.image(&resolver), Some(resolved));
    assert!(log.borrow().is_empty());
}

#[test]
fn setting_path_clears_image_and_defers_resolution() {
    let mut entry = stool();
    let resolver = CountingResolver::new();
    entry.set_image(Some(ImageSource::new("https://example.com/a.png")));
    let log = watch(&mut entry);

    entry.set_image_path("Assets/15.jpg");
    assert!(!entry.is_image_resolved());
    assert_eq!(entry.image_path(), Some("Assets/15.jpg"));
    assert_eq!(resolver.calls.get(), 0);

    assert_eq!(
        entry.image(&resolver).map(|image| image.uri().to_string()),
        Some("test:///Assets/15.jpg".to_string())
    );
    assert_eq!(resolver.calls.get(), 1);

    entry.set_image_path("Assets/15.jpg");
    assert_eq!(*log.borrow(), vec![property::IMAGE, property::IMAGE]);
}

#[test]
fn clearing_image_notifies_once() {
    let mut entry = stool();
    let log = watch(&mut entry);
    assert!(entry.set_image(None));
    assert!(!entry.set_image(None));
    assert_eq!(*log.borrow(), vec![property::IMAGE]);
}

#[test]
fn uri_resolver_joins_base_and_path() {
    let packaged = UriImageResolver::default();
    assert_eq!(packaged.resolve("Assets/10.jpg").uri(), "ms-appx:///Assets/10.jpg");

    let remote = UriImageResolver::new("https://cdn.example.com/img/");
    assert_eq!(remote.base(), "https://cdn.example.com/img/");
    assert_eq!(
        remote.resolve("/Assets/10.jpg").uri(),
        "https://cdn.example.com/img/Assets/10.jpg"
    );
}

// ── Item ─────────────────────────────────────────────────────────

#[test]
fn item_defaults() {
    let item = Item::new(stool());
    assert_eq!(item.row_span(), 1);
    assert_eq!(item.col_span(), 1);
    assert_eq!(item.content(), "");
    assert_eq!(item.group_id(), None);
    assert_eq!(item.to_string(), "Stool");
}

#[test]
fn item_setters_notify_through_shared_notifier() {
    let mut item = Item::new(stool()).with_content("body");
    let log = watch(&mut item);

    assert!(item.set_content("new body"));
    assert!(!item.set_content("new body"));
    assert!(item.set_row_span(2).unwrap());
    assert!(!item.set_row_span(2).unwrap());
    assert!(item.set_col_span(3).unwrap());
    assert!(item.set_group(Some("Group-1".into())));
    assert!(item.entry_mut().set_title("Bar Stool"));

    assert_eq!(
        *log.borrow(),
        vec![
            property::CONTENT,
            property::ROW_SPAN,
            property::COL_SPAN,
            property::GROUP,
            property::TITLE
        ]
    );
    assert_eq!(item.group_id().map(|id| id.as_str()), Some("Group-1"));
}

#[test]
fn zero_spans_are_rejected() {
    let mut item = Item::new(stool());
    assert!(matches!(item.set_row_span(0), Err(Error::InvalidArgument(_))));
    assert!(matches!(item.set_col_span(0), Err(Error::InvalidArgument(_))));
    assert_eq!(item.row_span(), 1);
    assert!(Item::new(stool()).with_spans(0, 1).is_err());

    let item = Item::new(stool()).with_spans(79, 49).unwrap();
    assert_eq!((item.col_span(), item.row_span()), (79, 49));
}

#[test]
fn cloned_item_has_no_listeners() {
    let mut item = Item::new(stool());
    let log = watch(&mut item);
    let mut copy = item.clone();
    copy.set_content("changed");
    assert!(log.borrow().is_empty());
}
