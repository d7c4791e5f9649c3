//! Serde form of the catalog.
//!
//! Records carry exactly what is needed to rebuild groups and items: no
//! listeners, no resolved images, and no back-references (an item's group is
//! the record it is nested in).

use crate::{EntryFields, EntryId, Group, Item, Result};
use serde::{Deserialize, Serialize};

/// A group and its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_span")]
    pub col_span: u32,
    #[serde(default = "default_span")]
    pub row_span: u32,
}

fn default_span() -> u32 {
    1
}

impl ItemRecord {
    /// Builds the item. Fails on a zero span.
    pub fn into_item(self) -> Result<Item> {
        let entry = EntryFields::new(self.id, self.title)
            .with_subtitle(self.subtitle)
            .with_description(self.description)
            .with_image_path(self.image_path);
        Item::new(entry)
            .with_content(self.content)
            .with_spans(self.col_span, self.row_span)
    }

    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        let entry = item.entry();
        Self {
            id: entry.id().clone(),
            title: entry.title().to_string(),
            subtitle: entry.subtitle().to_string(),
            image_path: entry.image_path().map(str::to_string),
            description: entry.description().to_string(),
            content: item.content().to_string(),
            col_span: item.col_span(),
            row_span: item.row_span(),
        }
    }
}

impl GroupRecord {
    /// Builds the group and all of its items, in record order.
    pub fn into_group(self) -> Result<Group> {
        let entry = EntryFields::new(self.id, self.title)
            .with_subtitle(self.subtitle)
            .with_description(self.description)
            .with_image_path(self.image_path);
        let mut group = Group::new(entry);
        for item in self.items {
            group.add_item(item.into_item()?);
        }
        Ok(group)
    }

    #[must_use]
    pub fn from_group(group: &Group) -> Self {
        let entry = group.entry();
        Self {
            id: entry.id().clone(),
            title: entry.title().to_string(),
            subtitle: entry.subtitle().to_string(),
            image_path: entry.image_path().map(str::to_string),
            description: entry.description().to_string(),
            items: group
                .items()
                .iter()
                .map(|item| ItemRecord::from_item(&item.borrow()))
                .collect(),
        }
    }
}
