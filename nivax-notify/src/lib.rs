//! Change notification primitives for Nivax.
//!
//! Entities that expose mutable fields hold a [`ChangeNotifier`] and delegate
//! to it instead of inheriting from a common base:
//!
//! - [`ListenerRegistry`]: ordered, id-keyed storage for boxed callbacks
//! - [`ChangeNotifier`]: emits the name of every field whose value changed
//! - [`NotifyPropertyChanged`]: capability trait for types holding a notifier
//!
//! Delivery is synchronous: every listener has run, in registration order,
//! before the mutating call returns. Assigning a value equal to the current
//! one emits nothing.

mod notifier;
mod registry;

pub use notifier::{ChangeNotifier, NotifyPropertyChanged};
pub use registry::{ListenerId, ListenerRegistry};
