//! Recorded history entries.

use super::action::ActionGroup;
use std::slice;

/// One step of recorded history.
///
/// Entries are immutable once recorded. A group entry is undone and
/// redone as a whole, never partially.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryEntry<A> {
    /// A single action
    Single(A),
    /// Several actions applied atomically, in order
    Group(Vec<A>),
}

impl<A> HistoryEntry<A> {
    /// Actions of this entry in application order.
    pub fn actions(&self) -> &[A] {
        match self {
            Self::Single(action) => slice::from_ref(action),
            Self::Group(actions) => actions,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// Number of actions folded when this entry is replayed.
    pub fn len(&self) -> usize {
        self.actions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions().is_empty()
    }
}

impl<A> From<ActionGroup<A>> for HistoryEntry<A> {
    fn from(group: ActionGroup<A>) -> Self {
        Self::Group(group.into_actions())
    }
}

/// Expand entries into their member actions, in order.
pub fn flatten<'a, A, I>(entries: I) -> Vec<A>
where
    A: Clone + 'a,
    I: IntoIterator<Item = &'a HistoryEntry<A>>,
{
    entries
        .into_iter()
        .flat_map(|entry| entry.actions().iter().cloned())
        .collect()
}
