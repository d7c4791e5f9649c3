//! Observable sequences and the bounded window that follows them.
//!
//! - [`ObservableVec<T>`]: an ordered sequence that reports every mutation
//!   as a [`CollectionChange`]
//! - [`BoundedMirror<T>`]: the first `K` elements of a source sequence,
//!   maintained incrementally from its change events
//! - [`SharedMirror<T>`]: a mirror subscribed to an `ObservableVec` so it
//!   follows the source without further wiring
//!
//! Invariant kept by the mirror after every event:
//! `mirror == source[..min(K, source.len())]`.
//!
//! Everything here is single-threaded. Index arguments come from the source's
//! own mutation API; an out-of-range index is a bug and panics.

mod change;
mod mirror;
mod observable;

pub use change::{ChangeAction, CollectionChange};
pub use mirror::{BoundedMirror, SharedMirror};
pub use observable::ObservableVec;

pub use nivax_notify::ListenerId;
