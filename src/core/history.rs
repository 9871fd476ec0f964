//! The history state threaded through every transition.
//!
//! History is immutable: every transition builds a new value, and older
//! values stay valid for as long as a caller holds them.

use super::entry::HistoryEntry;

/// Recorded actions, a pointer to the present entry and the present state.
///
/// `history` is laid out as `[...past, present, ...future]` and `index`
/// points at the present entry, so `0 <= index < history.len()` always
/// holds. `present` equals the caller's reducer folded over
/// `history[..=index]`, starting from the absent state.
///
/// # Example
///
/// ```rust
/// use undox::core::{undo, undox, Action};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// enum Counter {
///     #[default]
///     Init,
///     Increment,
/// }
///
/// impl Action for Counter {
///     fn action_type(&self) -> &str {
///         match self {
///             Self::Init => "undox/INIT",
///             Self::Increment => "INCREMENT",
///         }
///     }
/// }
///
/// let counter = |state: Option<&i32>, action: &Counter| {
///     let state = state.copied().unwrap_or(0);
///     match action {
///         Counter::Init => state,
///         Counter::Increment => state + 1,
///     }
/// };
///
/// let wrapped = undox(counter);
/// let state = wrapped.reduce(None, Counter::Increment.into());
/// assert_eq!(*state.present(), 1);
/// assert_eq!(state.index(), 1);
///
/// let state = wrapped.reduce(Some(&state), undo(1).unwrap());
/// assert_eq!(*state.present(), 0);
/// assert_eq!(state.future().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UndoxState<S, A> {
    history: Vec<HistoryEntry<A>>,
    index: usize,
    present: S,
}

impl<S, A> UndoxState<S, A> {
    /// Seed a history with its init action and the state it produced.
    pub(crate) fn seed(init: A, present: S) -> Self {
        Self {
            history: vec![HistoryEntry::Single(init)],
            index: 0,
            present,
        }
    }

    /// Assemble a state from parts already known to be consistent.
    pub(crate) fn from_parts(history: Vec<HistoryEntry<A>>, index: usize, present: S) -> Self {
        debug_assert!(index < history.len(), "index out of bounds");
        Self {
            history,
            index,
            present,
        }
    }

    /// All recorded entries: past, present and future.
    pub fn history(&self) -> &[HistoryEntry<A>] {
        &self.history
    }

    /// Offset of the present entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The materialized present state.
    pub fn present(&self) -> &S {
        &self.present
    }

    /// Entries before the present one.
    pub fn past(&self) -> &[HistoryEntry<A>] {
        &self.history[..self.index]
    }

    /// Entries up to and including the present one.
    pub fn past_with_present(&self) -> &[HistoryEntry<A>] {
        &self.history[..=self.index]
    }

    /// The entry that produced the present state.
    pub fn present_entry(&self) -> &HistoryEntry<A> {
        &self.history[self.index]
    }

    /// Entries after the present one, available to redo.
    pub fn future(&self) -> &[HistoryEntry<A>] {
        &self.history[self.index + 1..]
    }

    pub fn past_len(&self) -> usize {
        self.index
    }

    pub fn future_len(&self) -> usize {
        self.history.len() - 1 - self.index
    }

    pub fn can_undo(&self) -> bool {
        self.past_len() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.future_len() > 0
    }

    /// Number of recorded entries, including the init entry.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always `false`: a history holds at least its init entry.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn into_present(self) -> S {
        self.present
    }
}
