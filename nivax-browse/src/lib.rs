//! Text and JSON views of a catalog store.
//!
//! The binary is a thin wrapper: it builds the sample store, picks a view
//! from its arguments, and prints what these functions return.

use anyhow::{Context, Result};
use nivax_catalog::{CatalogStore, Group, GroupRecord, ItemRecord};
use serde::Serialize;
use std::fmt::Write;

/// What to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Every group of a collection with its top items.
    Groups { collection: String },
    /// One group with all of its items.
    Group { id: String },
    /// One item.
    Item { id: String },
}

/// Renders `view` as plain text.
pub fn render_text(store: &CatalogStore, view: &View) -> Result<String> {
    match view {
        View::Groups { collection } => render_groups(store, collection),
        View::Group { id } => {
            let group = store
                .get_group(id)
                .with_context(|| format!("no group with id '{id}'"))?;
            render_group(store, group)
        }
        View::Item { id } => render_item(store, id),
    }
}

/// Renders `view` as pretty-printed JSON records.
pub fn render_json(store: &CatalogStore, view: &View) -> Result<String> {
    match view {
        View::Groups { collection } => {
            let groups = store.get_groups(collection)?;
            to_json(&groups.iter().map(GroupRecord::from_group).collect::<Vec<_>>())
        }
        View::Group { id } => {
            let group = store
                .get_group(id)
                .with_context(|| format!("no group with id '{id}'"))?;
            to_json(&GroupRecord::from_group(group))
        }
        View::Item { id } => {
            let item = store
                .get_item(id)
                .with_context(|| format!("no item with id '{id}'"))?;
            let record = ItemRecord::from_item(&item.borrow());
            to_json(&record)
        }
    }
}

fn to_json(value: &impl Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing catalog records")
}

/// One block per group: a header line, then its top items.
pub fn render_groups(store: &CatalogStore, collection: &str) -> Result<String> {
    let groups = store.get_groups(collection)?;
    let mut out = String::new();
    for group in groups {
        writeln!(
            out,
            "{} [{}] ({} items)",
            group,
            group.id(),
            group.items().len()
        )?;
        for item in group.top_items() {
            let item = item.borrow();
            writeln!(
                out,
                "  - {} [{}] {}x{}",
                item,
                item.id(),
                item.col_span(),
                item.row_span()
            )?;
        }
    }
    Ok(out)
}

/// A group header, its description and image, then every item.
pub fn render_group(store: &CatalogStore, group: &Group) -> Result<String> {
    let entry = group.entry();
    let mut out = String::new();
    writeln!(out, "{} [{}]", entry, entry.id())?;
    if !entry.subtitle().is_empty() && entry.subtitle() != entry.title() {
        writeln!(out, "{}", entry.subtitle())?;
    }
    if let Some(image) = store.image_of(entry) {
        writeln!(out, "image: {}", image.uri())?;
    }
    if !entry.description().is_empty() {
        writeln!(out, "\n{}\n", entry.description())?;
    }
    for (position, item) in group.items().iter().enumerate() {
        let item = item.borrow();
        writeln!(out, "{:>3}. {} [{}]", position + 1, item, item.id())?;
    }
    Ok(out)
}

/// An item with its owning group, image, and description.
pub fn render_item(store: &CatalogStore, id: &str) -> Result<String> {
    let item = store
        .get_item(id)
        .with_context(|| format!("no item with id '{id}'"))?;
    let item = item.borrow();
    let entry = item.entry();
    let mut out = String::new();
    writeln!(out, "{} [{}]", entry, entry.id())?;
    if let Some(group) = item.group_id().and_then(|gid| store.get_group(gid.as_str())) {
        writeln!(out, "group: {} [{}]", group, group.id())?;
    }
    writeln!(out, "span: {}x{}", item.col_span(), item.row_span())?;
    if let Some(image) = store.image_of(entry) {
        writeln!(out, "image: {}", image.uri())?;
    }
    if !entry.description().is_empty() {
        writeln!(out, "\n{}", entry.description())?;
    }
    Ok(out)
}
