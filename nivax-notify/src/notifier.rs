//! Field-level change notification.

use crate::{ListenerId, ListenerRegistry};
use std::fmt;
use tracing::trace;

type PropertyListener = dyn FnMut(&'static str);

/// Emits the name of a field every time its value changes.
///
/// Owners keep one notifier next to their fields and route every write
/// through [`ChangeNotifier::set`]:
///
/// ```ignore
/// pub fn set_title(&mut self, title: impl Into<String>) -> bool {
///     self.notifier.set(&mut self.title, title.into(), "title")
/// }
/// ```
///
/// Cloning a notifier yields one without listeners. Subscriptions belong to
/// the instance they were made on, not to a copy of its value.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: ListenerRegistry<PropertyListener>,
}

impl ChangeNotifier {
    /// Creates a notifier with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. It receives the name of each changed field.
    pub fn subscribe(&mut self, listener: impl FnMut(&'static str) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    /// Removes a listener. Returns false if it was not registered here.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Invokes every listener with `property`, in registration order.
    pub fn notify(&mut self, property: &'static str) {
        trace!(property, listeners = self.listeners.len(), "property changed");
        for listener in self.listeners.iter_mut() {
            listener(property);
        }
    }

    /// Stores `value` in `slot` and notifies, unless the two are already equal.
    ///
    /// Returns true if the slot was written.
    pub fn set<T: PartialEq>(&mut self, slot: &mut T, value: T, property: &'static str) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        self.notify(property);
        true
    }
}

impl Clone for ChangeNotifier {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Capability for types that carry a [`ChangeNotifier`].
///
/// Implementors only provide access to their notifier; subscription
/// management comes with the trait.
pub trait NotifyPropertyChanged {
    /// The notifier this value delegates to.
    fn notifier_mut(&mut self) -> &mut ChangeNotifier;

    /// Registers a listener for field changes on this value.
    fn on_property_changed(
        &mut self,
        listener: impl FnMut(&'static str) + 'static,
    ) -> ListenerId
    where
        Self: Sized,
    {
        self.notifier_mut().subscribe(listener)
    }

    /// Removes a listener registered with [`on_property_changed`].
    ///
    /// [`on_property_changed`]: NotifyPropertyChanged::on_property_changed
    fn remove_property_listener(&mut self, id: ListenerId) -> bool {
        self.notifier_mut().unsubscribe(id)
    }
}
