//! The catalog store: groups, items, and lookup by id.
//!
//! A store is built once, through [`StoreBuilder`] or
//! [`CatalogStore::sample`], and handed to whoever needs it. After
//! construction it only answers queries; item fields can still change through
//! their shared handles, but groups are never added or removed.

use crate::sample::sample_records;
use crate::{
    EntryFields, EntryId, Error, Group, GroupRecord, ImageResolver, ImageSource, Result,
    SharedItem, UriImageResolver,
};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// The only collection id [`CatalogStore::get_groups`] accepts.
pub const ALL_GROUPS: &str = "AllGroups";

/// Read-only set of groups with linear lookup by id.
pub struct CatalogStore {
    groups: Vec<Group>,
    resolver: Box<dyn ImageResolver>,
}

impl CatalogStore {
    /// Starts an empty store.
    #[must_use]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Builds the furniture sample catalog.
    pub fn sample() -> Result<Self> {
        Self::from_records(sample_records()?)
    }

    /// Builds a store from records, using the default image resolver.
    pub fn from_records(records: Vec<GroupRecord>) -> Result<Self> {
        let mut builder = Self::builder();
        for record in records {
            builder = builder.group(record.into_group()?);
        }
        builder.build()
    }

    /// Returns every group of the named collection.
    ///
    /// Only [`ALL_GROUPS`] exists; anything else is an invalid argument.
    pub fn get_groups(&self, collection_id: &str) -> Result<&[Group]> {
        if collection_id != ALL_GROUPS {
            return Err(Error::InvalidArgument(format!(
                "only '{ALL_GROUPS}' is supported as a collection of groups, got '{collection_id}'"
            )));
        }
        Ok(&self.groups)
    }

    /// All groups in insertion order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The group with this id, if exactly one matches.
    #[must_use]
    pub fn get_group(&self, id: &str) -> Option<&Group> {
        single(self.groups.iter().filter(|group| group.id() == id))
    }

    /// The item with this id, searched across all groups, if exactly one
    /// matches.
    #[must_use]
    pub fn get_item(&self, id: &str) -> Option<SharedItem> {
        let found = single(
            self.groups
                .iter()
                .flat_map(|group| group.items().iter())
                .filter(|item| item.borrow().id() == id),
        )
        .cloned();
        debug!(id, found = found.is_some(), "item lookup");
        found
    }

    /// Total number of items across groups.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items().len()).sum()
    }

    /// Resolves the image of an entry with this store's resolver.
    #[must_use]
    pub fn image_of(&self, entry: &EntryFields) -> Option<ImageSource> {
        entry.image(self.resolver.as_ref())
    }

    /// Exports the catalog as records.
    #[must_use]
    pub fn to_records(&self) -> Vec<GroupRecord> {
        self.groups.iter().map(GroupRecord::from_group).collect()
    }
}

fn single<T>(mut matches: impl Iterator<Item = T>) -> Option<T> {
    let first = matches.next()?;
    match matches.next() {
        None => Some(first),
        Some(_) => None,
    }
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("groups", &self.groups.len())
            .field("items", &self.item_count())
            .finish()
    }
}

/// Collects groups and checks id uniqueness before producing a store.
#[derive(Default)]
pub struct StoreBuilder {
    groups: Vec<Group>,
    resolver: Option<Box<dyn ImageResolver>>,
}

impl StoreBuilder {
    /// Appends a group.
    #[must_use]
    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Uses `resolver` for entry images instead of [`UriImageResolver::default`].
    #[must_use]
    pub fn resolver(mut self, resolver: impl ImageResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Finishes the store.
    ///
    /// Fails with [`Error::DuplicateId`] if any id repeats across groups and
    /// items.
    pub fn build(self) -> Result<CatalogStore> {
        let mut seen: HashSet<EntryId> = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.id().clone()) {
                return Err(Error::DuplicateId(group.id().clone()));
            }
            for item in group.items() {
                let id = item.borrow().id().clone();
                if !seen.insert(id.clone()) {
                    return Err(Error::DuplicateId(id));
                }
            }
        }

        let resolver: Box<dyn ImageResolver> = match self.resolver {
            Some(resolver) => resolver,
            None => Box::new(UriImageResolver::default()),
        };
        let store = CatalogStore {
            groups: self.groups,
            resolver,
        };
        info!(
            groups = store.groups.len(),
            items = store.item_count(),
            "catalog store built"
        );
        Ok(store)
    }
}
