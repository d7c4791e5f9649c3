//! Fixed-capacity window over the head of a larger sequence.
//!
//! A grid view cannot virtualize a large item collection, so each group shows
//! only its first few items. The window is kept equal to
//! `source[..min(K, source.len())]` by translating every source event into at
//! most two window edits; the source is only read at the single position that
//! slides across the window boundary, and re-copied in full only on reset.

use crate::{CollectionChange, ObservableVec};
use nivax_notify::ListenerId;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// The first `capacity` elements of a source sequence.
///
/// The window's own contents live in an [`ObservableVec`], so observers of the
/// window see one event per window edit.
pub struct BoundedMirror<T> {
    capacity: usize,
    window: ObservableVec<T>,
}

impl<T: Clone> BoundedMirror<T> {
    /// Creates an empty mirror holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "mirror capacity must be at least 1");
        Self {
            capacity,
            window: ObservableVec::new(),
        }
    }

    /// Creates a mirror already filled from `source`.
    #[must_use]
    pub fn from_source(source: &[T], capacity: usize) -> Self {
        let mut mirror = Self::new(capacity);
        mirror.rebuild(source);
        mirror
    }

    /// Maximum window length.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current window length, `min(capacity, source.len())`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// The window contents.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.window.as_slice()
    }

    /// Registers a listener for edits to the window.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&CollectionChange<T>, &[T]) + 'static,
    ) -> ListenerId {
        self.window.subscribe(listener)
    }

    /// Removes a window listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.window.unsubscribe(id)
    }

    /// Brings the window up to date after `change` was applied to `source`.
    ///
    /// `source` must be the post-change contents, and `change` must describe
    /// the last mutation made to it.
    ///
    /// # Panics
    ///
    /// Panics if `change` carries indices that are invalid for `source`.
    pub fn apply(&mut self, change: &CollectionChange<T>, source: &[T]) {
        let k = self.capacity;
        match change {
            CollectionChange::Insert { index, value } => {
                if *index < k {
                    self.window.insert(*index, value.clone());
                    self.trim();
                }
            }
            CollectionChange::Move { from, to } => match (*from < k, *to < k) {
                (true, true) => self.window.move_item(*from, *to),
                (true, false) => {
                    self.window.remove(*from);
                    if let Some(entering) = source.get(k - 1) {
                        self.window.push(entering.clone());
                    }
                }
                (false, true) => {
                    self.window.insert(*to, source[*to].clone());
                    self.trim();
                }
                (false, false) => {}
            },
            CollectionChange::Remove { index } => {
                if *index < k {
                    self.window.remove(*index);
                    if source.len() >= k {
                        self.window.push(source[k - 1].clone());
                    }
                }
            }
            CollectionChange::Replace { index, value } => {
                if *index < k {
                    self.window.replace(*index, value.clone());
                }
            }
            CollectionChange::Reset => self.rebuild(source),
        }

        debug!(
            action = %change.action(),
            source_len = source.len(),
            window_len = self.window.len(),
            capacity = k,
            "window updated"
        );
    }

    /// Refills the window from scratch. This is the reset rule.
    pub fn rebuild(&mut self, source: &[T]) {
        let end = source.len().min(self.capacity);
        self.window.reset_with(source[..end].to_vec());
    }

    /// Returns true if the window equals the head of `source`.
    #[must_use]
    pub fn is_consistent_with(&self, source: &[T]) -> bool
    where
        T: PartialEq,
    {
        let end = source.len().min(self.capacity);
        self.window.as_slice() == &source[..end]
    }

    fn trim(&mut self) {
        if self.window.len() > self.capacity {
            self.window.remove(self.capacity);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedMirror<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedMirror")
            .field("capacity", &self.capacity)
            .field("window", &self.window)
            .finish()
    }
}

/// A [`BoundedMirror`] subscribed to an [`ObservableVec`].
///
/// Once attached, every mutation of the source updates the window, and the
/// window's own listeners, before the mutating call returns. The source holds
/// only a weak reference, so dropping the `SharedMirror` stops the updates.
pub struct SharedMirror<T> {
    inner: Rc<RefCell<BoundedMirror<T>>>,
    source_listener: ListenerId,
}

impl<T: Clone + 'static> SharedMirror<T> {
    /// Fills a window from `source` and subscribes it to later changes.
    #[must_use]
    pub fn attach(source: &mut ObservableVec<T>, capacity: usize) -> Self {
        let inner = Rc::new(RefCell::new(BoundedMirror::from_source(
            source.as_slice(),
            capacity,
        )));
        let target: Weak<RefCell<BoundedMirror<T>>> = Rc::downgrade(&inner);
        let source_listener = source.subscribe(move |change, items| {
            if let Some(mirror) = target.upgrade() {
                mirror.borrow_mut().apply(change, items);
            }
        });
        debug!(capacity, source_len = source.len(), "window attached");
        Self {
            inner,
            source_listener,
        }
    }

    /// Unsubscribes from `source`. Returns false if `source` is not the
    /// sequence this mirror was attached to.
    pub fn detach(&self, source: &mut ObservableVec<T>) -> bool {
        source.unsubscribe(self.source_listener)
    }

    /// Copies the window contents.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.borrow().as_slice().to_vec()
    }

    /// Runs `f` over the window without copying it.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.inner.borrow().as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.borrow().capacity()
    }

    /// Registers a listener for window edits.
    ///
    /// The listener runs while the window is being updated and must not call
    /// back into this `SharedMirror`; everything it needs is in its arguments.
    pub fn subscribe(
        &self,
        listener: impl FnMut(&CollectionChange<T>, &[T]) + 'static,
    ) -> ListenerId {
        self.inner.borrow_mut().subscribe(listener)
    }

    /// Removes a window listener.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().unsubscribe(id)
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedMirror<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMirror")
            .field("mirror", &self.inner.borrow())
            .field("source_listener", &self.source_listener)
            .finish()
    }
}
