//! Catalog items.

use crate::{EntryFields, EntryId, Error, Result, property};
use nivax_notify::{ChangeNotifier, NotifyPropertyChanged};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An item as held by its group and the group's top-items window.
///
/// Both collections share the same item, so an edit made through one is
/// visible through the other.
pub type SharedItem = Rc<RefCell<Item>>;

/// A furniture item: descriptive fields, body content, and its footprint in
/// the grouped grid.
#[derive(Debug, Clone)]
pub struct Item {
    entry: EntryFields,
    content: String,
    row_span: u32,
    col_span: u32,
    group: Option<EntryId>,
}

impl Item {
    /// Creates an item spanning one row and one column, with no content and
    /// no owning group.
    #[must_use]
    pub fn new(entry: EntryFields) -> Self {
        Self {
            entry,
            content: String::new(),
            row_span: 1,
            col_span: 1,
            group: None,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets both spans. Zero is rejected.
    pub fn with_spans(mut self, col_span: u32, row_span: u32) -> Result<Self> {
        self.col_span = positive_span(property::COL_SPAN, col_span)?;
        self.row_span = positive_span(property::ROW_SPAN, row_span)?;
        Ok(self)
    }

    #[must_use]
    pub fn entry(&self) -> &EntryFields {
        &self.entry
    }

    /// Mutable access to the shared fields. Their setters notify this item's
    /// listeners.
    pub fn entry_mut(&mut self) -> &mut EntryFields {
        &mut self.entry
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        self.entry.id()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    #[must_use]
    pub fn col_span(&self) -> u32 {
        self.col_span
    }

    /// Id of the owning group, resolved through the store.
    #[must_use]
    pub fn group_id(&self) -> Option<&EntryId> {
        self.group.as_ref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        self.entry
            .notifier_mut()
            .set(&mut self.content, content.into(), property::CONTENT)
    }

    pub fn set_row_span(&mut self, span: u32) -> Result<bool> {
        let span = positive_span(property::ROW_SPAN, span)?;
        Ok(self
            .entry
            .notifier_mut()
            .set(&mut self.row_span, span, property::ROW_SPAN))
    }

    pub fn set_col_span(&mut self, span: u32) -> Result<bool> {
        let span = positive_span(property::COL_SPAN, span)?;
        Ok(self
            .entry
            .notifier_mut()
            .set(&mut self.col_span, span, property::COL_SPAN))
    }

    pub fn set_group(&mut self, group: Option<EntryId>) -> bool {
        self.entry
            .notifier_mut()
            .set(&mut self.group, group, property::GROUP)
    }
}

fn positive_span(name: &str, span: u32) -> Result<u32> {
    if span == 0 {
        return Err(Error::InvalidArgument(format!("{name} must be at least 1")));
    }
    Ok(span)
}

impl NotifyPropertyChanged for Item {
    fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        self.entry.notifier_mut()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entry, f)
    }
}
