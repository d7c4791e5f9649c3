//! Lazily resolved entry images.
//!
//! An entry either carries an explicit [`ImageSource`] or a relative path that
//! is turned into one on first read. Resolution happens at most once per
//! entry and the result is cached until the path or image is replaced.

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;

/// Base address used for packaged image assets.
pub const DEFAULT_IMAGE_BASE: &str = "ms-appx:///";

/// A displayable image handle, addressed by absolute URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSource {
    uri: String,
}

impl ImageSource {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Turns a relative image path into a displayable handle.
pub trait ImageResolver {
    fn resolve(&self, path: &str) -> ImageSource;
}

/// Resolves paths against a fixed base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriImageResolver {
    base: String,
}

impl UriImageResolver {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for UriImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ImageResolver for UriImageResolver {
    fn resolve(&self, path: &str) -> ImageSource {
        let base = self.base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if base.ends_with(':') {
            // scheme-only bases such as "ms-appx:" keep their empty authority
            ImageSource::new(format!("{base}///{path}"))
        } else {
            ImageSource::new(format!("{base}/{path}"))
        }
    }
}

/// Image state of one entry: a pending path, a cached resolution, or an
/// explicit image.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryImage {
    path: Option<String>,
    image: OnceCell<ImageSource>,
}

impl EntryImage {
    pub(crate) fn from_path(path: Option<String>) -> Self {
        Self {
            path,
            image: OnceCell::new(),
        }
    }

    pub(crate) fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub(crate) fn is_resolved(&self) -> bool {
        self.image.get().is_some()
    }

    pub(crate) fn get(&self, resolver: &dyn ImageResolver) -> Option<ImageSource> {
        if let Some(image) = self.image.get() {
            return Some(image.clone());
        }
        let path = self.path.as_deref()?;
        Some(self.image.get_or_init(|| resolver.resolve(path)).clone())
    }

    /// Stores an explicit image and discards the path. Returns true if the
    /// visible image changed.
    ///
    /// A path that was never resolved has no known value, so replacing it
    /// always counts as a change.
    pub(crate) fn set_explicit(&mut self, image: Option<ImageSource>) -> bool {
        let pending = self.path.take().is_some();
        let changed = match self.image.get() {
            Some(current) => Some(current) != image.as_ref(),
            None => pending || image.is_some(),
        };
        self.image = match image {
            Some(image) => OnceCell::from(image),
            None => OnceCell::new(),
        };
        changed
    }

    /// Replaces the path and drops any resolved or explicit image.
    pub(crate) fn set_path(&mut self, path: impl Into<String>) {
        self.image = OnceCell::new();
        self.path = Some(path.into());
    }
}
