//! In-memory furniture catalog for Nivax.
//!
//! - [`EntryFields`]: descriptive fields shared by groups and items, with a
//!   lazily resolved image
//! - [`Item`]: a catalog entry with content and grid spans
//! - [`Group`]: owns its items and keeps a [`TOP_ITEMS_CAPACITY`]-element
//!   window of them for grouped views
//! - [`CatalogStore`]: the explicitly constructed, read-only set of groups
//!   with lookup by id
//!
//! Every entity notifies field changes through a
//! [`ChangeNotifier`](nivax_notify::ChangeNotifier). Items point back to their
//! group by id rather than by reference.

mod entry;
mod group;
mod ids;
mod image;
mod item;
mod record;
mod sample;
mod store;

pub mod property;

pub use entry::EntryFields;
pub use group::{Group, TOP_ITEMS_CAPACITY};
pub use ids::EntryId;
pub use image::{DEFAULT_IMAGE_BASE, ImageResolver, ImageSource, UriImageResolver};
pub use item::{Item, SharedItem};
pub use record::{GroupRecord, ItemRecord};
pub use store::{ALL_GROUPS, CatalogStore, StoreBuilder};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by catalog construction and queries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("duplicate entry id: {0}")]
    DuplicateId(EntryId),

    #[error("sample data error: {0}")]
    SampleData(#[from] serde_json::Error),
}
