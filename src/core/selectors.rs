//! Read-only views that rebuild past and future states from the action log.
//!
//! Nothing is cached: every call replays the entries it needs through the
//! reducer, so cost grows with the length of history traversed.

use super::entry::{flatten, HistoryEntry};
use super::history::UndoxState;
use super::reducer::{fold_from, Reducer};
use std::marker::PhantomData;

/// Selectors bound to the reducer that produced a history.
///
/// # Example
///
/// ```rust
/// use undox::core::{create_selectors, undo, undox, Action};
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Push(char);
///
/// impl Action for Push {
///     fn action_type(&self) -> &str {
///         "PUSH"
///     }
/// }
///
/// let text = |state: Option<&String>, Push(c): &Push| {
///     let mut s = state.cloned().unwrap_or_default();
///     if *c != '\0' {
///         s.push(*c);
///     }
///     s
/// };
///
/// let wrapped = undox(text);
/// let mut state = wrapped.initial_state();
/// for c in ['a', 'b', 'c'] {
///     state = wrapped.reduce(Some(&state), Push(c).into());
/// }
/// let state = wrapped.reduce(Some(&state), undo(1).unwrap());
///
/// let selectors = create_selectors(text);
/// assert_eq!(selectors.past_states(&state), vec!["", "a"]);
/// assert_eq!(selectors.present_state(&state), "ab");
/// assert_eq!(selectors.future_states(&state), vec!["abc"]);
/// ```
#[derive(Clone, Debug)]
pub struct Selectors<S, A, R> {
    reducer: R,
    _phantom: PhantomData<fn(&S, &A)>,
}

/// Build selectors for histories produced by `reducer`.
pub fn create_selectors<S, A, R>(reducer: R) -> Selectors<S, A, R>
where
    R: Reducer<S, A>,
{
    Selectors {
        reducer,
        _phantom: PhantomData,
    }
}

impl<S, A, R> Selectors<S, A, R>
where
    S: Clone,
    A: Clone,
    R: Reducer<S, A>,
{
    /// The present state, without any replay.
    pub fn present_state<'s>(&self, state: &'s UndoxState<S, A>) -> &'s S {
        state.present()
    }

    /// The entry at the present index: a single action or a group.
    pub fn present_action<'s>(&self, state: &'s UndoxState<S, A>) -> &'s HistoryEntry<A> {
        state.present_entry()
    }

    /// Every action before the present entry, groups expanded.
    pub fn past_actions(&self, state: &UndoxState<S, A>) -> Vec<A> {
        flatten(state.past())
    }

    /// Every action after the present entry, groups expanded.
    pub fn future_actions(&self, state: &UndoxState<S, A>) -> Vec<A> {
        flatten(state.future())
    }

    /// One reconstructed state per past entry, oldest first.
    ///
    /// The first entry is folded from the absent state, each following entry
    /// from the state rebuilt for the entry before it.
    pub fn past_states(&self, state: &UndoxState<S, A>) -> Vec<S> {
        let mut states: Vec<S> = Vec::with_capacity(state.past_len());
        for entry in state.past() {
            let rebuilt = entry
                .actions()
                .iter()
                .fold(states.last().cloned(), |s, action| {
                    Some(self.reducer.reduce(s.as_ref(), action))
                });
            states.extend(rebuilt);
        }
        states
    }

    /// One reconstructed state per future entry, starting from the present.
    pub fn future_states(&self, state: &UndoxState<S, A>) -> Vec<S> {
        let mut current = state.present().clone();
        let mut states = Vec::with_capacity(state.future_len());
        for entry in state.future() {
            current = fold_from(&self.reducer, current, std::slice::from_ref(entry));
            states.push(current.clone());
        }
        states
    }
}
