//! Single-writer store holding the current history state.
//!
//! The store is the imperative shell around the pure core: it owns the
//! current [`UndoxState`] and swaps in the next one on every dispatch.
//! Callers on several threads must serialize access themselves, for example
//! behind a `Mutex` or a single dispatch queue.

use crate::core::{
    group, redo, undo, Action, ActionError, HistoryEntry, Reducer, Selectors, Undox, UndoxAction,
    UndoxState,
};
use tracing::debug;

/// Store that applies actions to a history one at a time.
///
/// # Example
///
/// ```rust
/// use undox::core::{undox, Action};
/// use undox::Store;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Add(i32);
///
/// impl Action for Add {
///     fn action_type(&self) -> &str {
///         "ADD"
///     }
/// }
///
/// let adder = |state: Option<&i32>, Add(n): &Add| state.copied().unwrap_or(0) + n;
/// let mut store = Store::new(undox(adder));
///
/// store.dispatch(Add(2));
/// store.dispatch(Add(3));
/// assert_eq!(*store.present(), 5);
///
/// store.undo(1).unwrap();
/// assert_eq!(*store.present(), 2);
/// assert!(store.can_redo());
/// ```
#[derive(Debug)]
pub struct Store<S, A, R> {
    undox: Undox<S, A, R>,
    state: UndoxState<S, A>,
}

impl<S, A, R> Store<S, A, R>
where
    S: Clone,
    A: Action,
    R: Reducer<S, A>,
{
    /// Create a store positioned at the reducer's initial state.
    pub fn new(undox: Undox<S, A, R>) -> Self {
        let state = undox.initial_state();
        Self { undox, state }
    }

    /// Resume from a history state produced earlier by the same reducer.
    pub fn with_state(undox: Undox<S, A, R>, state: UndoxState<S, A>) -> Self {
        Self { undox, state }
    }

    /// Apply one action and return the new history state.
    pub fn dispatch(&mut self, action: impl Into<UndoxAction<A>>) -> &UndoxState<S, A> {
        let next = self.undox.reduce(Some(&self.state), action.into());
        debug!(index = next.index(), len = next.len(), "store updated");
        self.state = next;
        &self.state
    }

    /// Undo `steps` entries. Zero steps is rejected.
    pub fn undo(&mut self, steps: usize) -> Result<&UndoxState<S, A>, ActionError> {
        let action = undo(steps)?;
        Ok(self.dispatch(action))
    }

    /// Redo `steps` entries. Zero steps is rejected.
    pub fn redo(&mut self, steps: usize) -> Result<&UndoxState<S, A>, ActionError> {
        let action = redo(steps)?;
        Ok(self.dispatch(action))
    }

    /// Apply `actions` as one history entry. An empty group is rejected.
    pub fn group(&mut self, actions: Vec<A>) -> Result<&UndoxState<S, A>, ActionError> {
        let action = group(actions)?;
        Ok(self.dispatch(action))
    }

    pub fn state(&self) -> &UndoxState<S, A> {
        &self.state
    }

    pub fn present(&self) -> &S {
        self.state.present()
    }

    pub fn present_entry(&self) -> &HistoryEntry<A> {
        self.state.present_entry()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// Selectors bound to the store's reducer.
    pub fn selectors(&self) -> Selectors<S, A, R>
    where
        R: Clone,
    {
        self.undox.selectors()
    }

    pub fn undox(&self) -> &Undox<S, A, R> {
        &self.undox
    }

    pub fn into_state(self) -> UndoxState<S, A> {
        self.state
    }
}
