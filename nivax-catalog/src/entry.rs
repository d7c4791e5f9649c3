//! Descriptive fields shared by groups and items.

use crate::image::EntryImage;
use crate::{EntryId, ImageResolver, ImageSource, property};
use nivax_notify::{ChangeNotifier, NotifyPropertyChanged};
use std::fmt;

/// Id, texts, and image of a catalog entry.
///
/// Setters return true when the stored value changed, in which case exactly
/// one notification naming the field has been delivered.
#[derive(Debug, Clone)]
pub struct EntryFields {
    id: EntryId,
    title: String,
    subtitle: String,
    description: String,
    image: EntryImage,
    notifier: ChangeNotifier,
}

impl EntryFields {
    /// Creates an entry with empty subtitle, description, and no image.
    #[must_use]
    pub fn new(id: impl Into<EntryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            image: EntryImage::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the relative image path, resolved on first read.
    #[must_use]
    pub fn with_image_path(mut self, path: Option<String>) -> Self {
        self.image = EntryImage::from_path(path);
        self
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The pending image path, or `None` once an explicit image replaced it.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image.path()
    }

    /// Returns true if the image has been resolved or set explicitly.
    #[must_use]
    pub fn is_image_resolved(&self) -> bool {
        self.image.is_resolved()
    }

    /// The entry image, resolving the path with `resolver` on first read.
    #[must_use]
    pub fn image(&self, resolver: &dyn ImageResolver) -> Option<ImageSource> {
        self.image.get(resolver)
    }

    pub fn set_id(&mut self, id: impl Into<EntryId>) -> bool {
        self.notifier.set(&mut self.id, id.into(), property::UNIQUE_ID)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        self.notifier.set(&mut self.title, title.into(), property::TITLE)
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) -> bool {
        self.notifier
            .set(&mut self.subtitle, subtitle.into(), property::SUBTITLE)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        self.notifier
            .set(&mut self.description, description.into(), property::DESCRIPTION)
    }

    /// Replaces the image with an explicit one (or none), discarding the path.
    pub fn set_image(&mut self, image: Option<ImageSource>) -> bool {
        let changed = self.image.set_explicit(image);
        if changed {
            self.notifier.notify(property::IMAGE);
        }
        changed
    }

    /// Points the image at a new relative path. Always notifies, since the
    /// resolved image is dropped and will be rebuilt on the next read.
    pub fn set_image_path(&mut self, path: impl Into<String>) {
        self.image.set_path(path);
        self.notifier.notify(property::IMAGE);
    }
}

impl NotifyPropertyChanged for EntryFields {
    fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        &mut self.notifier
    }
}

impl fmt::Display for EntryFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
