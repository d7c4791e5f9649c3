//! Ordered sequence that reports each mutation to its subscribers.

use crate::CollectionChange;
use nivax_notify::{ListenerId, ListenerRegistry};
use std::fmt;
use std::ops::Index;

type CollectionListener<T> = dyn FnMut(&CollectionChange<T>, &[T]);

/// A `Vec<T>` whose mutations are observable.
///
/// Every mutating call performs the change, then invokes each subscriber with
/// the [`CollectionChange`] and the post-mutation contents, before returning.
/// Index arguments must be in range; violations panic.
pub struct ObservableVec<T> {
    items: Vec<T>,
    listeners: ListenerRegistry<CollectionListener<T>>,
}

impl<T> ObservableVec<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The current contents.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Registers a change listener.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CollectionChange<T>, &[T]) + 'static,
    ) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    /// Removes a change listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered change listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, change: CollectionChange<T>) {
        for listener in self.listeners.iter_mut() {
            listener(&change, self.items.as_slice());
        }
    }
}

impl<T: Clone> ObservableVec<T> {
    /// Creates a sequence holding `items`. No event is emitted.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Copies the current contents.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Appends `value`, reported as an insert at the old length.
    pub fn push(&mut self, value: T) {
        let index = self.items.len();
        self.insert(index, value);
    }

    /// Inserts `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.items.len(),
            "insert index {index} out of range for length {}",
            self.items.len()
        );
        self.items.insert(index, value.clone());
        self.emit(CollectionChange::Insert { index, value });
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "remove index {index} out of range for length {}",
            self.items.len()
        );
        let removed = self.items.remove(index);
        self.emit(CollectionChange::Remove { index });
        removed
    }

    /// Moves the element at `from` so that it ends up at `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len`.
    pub fn move_item(&mut self, from: usize, to: usize) {
        let len = self.items.len();
        assert!(
            from < len && to < len,
            "move {from} -> {to} out of range for length {len}"
        );
        let value = self.items.remove(from);
        self.items.insert(to, value);
        self.emit(CollectionChange::Move { from, to });
    }

    /// Overwrites the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        assert!(
            index < self.items.len(),
            "replace index {index} out of range for length {}",
            self.items.len()
        );
        let previous = std::mem::replace(&mut self.items[index], value.clone());
        self.emit(CollectionChange::Replace { index, value });
        previous
    }

    /// Removes every element, reported as a reset.
    pub fn clear(&mut self) {
        self.items.clear();
        self.emit(CollectionChange::Reset);
    }

    /// Swaps in new contents, reported as a single reset.
    pub fn reset_with(&mut self, items: Vec<T>) {
        self.items = items;
        self.emit(CollectionChange::Reset);
    }
}

impl<T> Default for ObservableVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ObservableVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a ObservableVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableVec")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
