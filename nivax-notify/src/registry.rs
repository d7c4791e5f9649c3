//! Id-keyed listener storage shared by property and collection notifications.

use std::fmt;

/// Handle returned when a listener is registered.
///
/// Ids are unique per registry and never reused, so a stale id cannot remove
/// a listener registered later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Listeners kept in registration order.
///
/// `L` is normally an unsized callback type such as `dyn FnMut(&'static str)`.
pub struct ListenerRegistry<L: ?Sized> {
    next_id: u64,
    entries: Vec<(ListenerId, Box<L>)>,
}

impl<L: ?Sized> ListenerRegistry<L> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Registers a listener after all existing ones.
    pub fn insert(&mut self, listener: Box<L>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes a listener. Returns false if the id is unknown.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns true if the id is currently registered.
    #[must_use]
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates listeners in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<L>> {
        self.entries.iter_mut().map(|(_, listener)| listener)
    }

    /// Drops every listener. Ids handed out so far stay retired.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<L: ?Sized> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> fmt::Debug for ListenerRegistry<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
