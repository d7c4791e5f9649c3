//! Structured description of a single mutation to an ordered sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One change to an ordered sequence.
///
/// Indices refer to positions in the sequence: `Insert` and `Replace` use the
/// post-mutation index, `Remove` the pre-mutation index, and `Move` both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CollectionChange<T> {
    /// `value` now sits at `index`; later elements shifted right.
    Insert { index: usize, value: T },
    /// The element at `from` was taken out and reinserted at `to`.
    Move { from: usize, to: usize },
    /// The element at `index` was removed; later elements shifted left.
    Remove { index: usize },
    /// The element at `index` was overwritten with `value`.
    Replace { index: usize, value: T },
    /// The contents changed wholesale; observers should re-read everything.
    Reset,
}

/// Payload-free kind of a [`CollectionChange`], used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Insert,
    Move,
    Remove,
    Replace,
    Reset,
}

impl<T> CollectionChange<T> {
    /// The kind of this change.
    #[must_use]
    pub fn action(&self) -> ChangeAction {
        match self {
            Self::Insert { .. } => ChangeAction::Insert,
            Self::Move { .. } => ChangeAction::Move,
            Self::Remove { .. } => ChangeAction::Remove,
            Self::Replace { .. } => ChangeAction::Replace,
            Self::Reset => ChangeAction::Reset,
        }
    }
}

impl ChangeAction {
    /// Lowercase name of the action, as used in logs and serialized changes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Insert => "insert",
            ChangeAction::Move => "move",
            ChangeAction::Remove => "remove",
            ChangeAction::Replace => "replace",
            ChangeAction::Reset => "reset",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
