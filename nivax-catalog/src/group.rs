//! Catalog groups and their top-items window.

use crate::{EntryFields, EntryId, Item, SharedItem};
use nivax_mirror::{CollectionChange, ListenerId, ObservableVec, SharedMirror};
use nivax_notify::{ChangeNotifier, NotifyPropertyChanged};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Number of items a grouped view shows per group.
///
/// Twelve fills whole grid columns for one, two, three, four, or six rows.
pub const TOP_ITEMS_CAPACITY: usize = 12;

/// A named group owning an ordered list of items.
///
/// `top_items` is derived: it always holds the first
/// [`TOP_ITEMS_CAPACITY`] items and is updated by every change to `items`.
#[derive(Debug)]
pub struct Group {
    entry: EntryFields,
    items: ObservableVec<SharedItem>,
    top_items: SharedMirror<SharedItem>,
}

impl Group {
    /// Creates a group with no items.
    #[must_use]
    pub fn new(entry: EntryFields) -> Self {
        let mut items = ObservableVec::new();
        let top_items = SharedMirror::attach(&mut items, TOP_ITEMS_CAPACITY);
        Self {
            entry,
            items,
            top_items,
        }
    }

    #[must_use]
    pub fn entry(&self) -> &EntryFields {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut EntryFields {
        &mut self.entry
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        self.entry.id()
    }

    /// Stamps `item` with this group's id and appends it.
    pub fn add_item(&mut self, mut item: Item) -> SharedItem {
        item.set_group(Some(self.entry.id().clone()));
        let shared = Rc::new(RefCell::new(item));
        self.items.push(Rc::clone(&shared));
        shared
    }

    /// All items, in order.
    #[must_use]
    pub fn items(&self) -> &ObservableVec<SharedItem> {
        &self.items
    }

    /// The item sequence, for arbitrary edits. The top-items window follows
    /// every edit made here.
    pub fn items_mut(&mut self) -> &mut ObservableVec<SharedItem> {
        &mut self.items
    }

    /// The first [`TOP_ITEMS_CAPACITY`] items.
    #[must_use]
    pub fn top_items(&self) -> Vec<SharedItem> {
        self.top_items.snapshot()
    }

    #[must_use]
    pub fn top_items_len(&self) -> usize {
        self.top_items.len()
    }

    /// Registers a listener for edits to the top-items window.
    pub fn subscribe_top_items(
        &self,
        listener: impl FnMut(&CollectionChange<SharedItem>, &[SharedItem]) + 'static,
    ) -> ListenerId {
        self.top_items.subscribe(listener)
    }

    pub fn unsubscribe_top_items(&self, id: ListenerId) -> bool {
        self.top_items.unsubscribe(id)
    }

    /// Finds an item of this group by id.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<SharedItem> {
        self.items
            .iter()
            .find(|item| item.borrow().id() == id)
            .cloned()
    }
}

impl NotifyPropertyChanged for Group {
    fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        self.entry.notifier_mut()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entry, f)
    }
}
