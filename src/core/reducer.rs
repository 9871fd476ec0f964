//! The caller's reducer and the fold helpers that replay history through it.

use super::entry::HistoryEntry;

/// Deterministic state transition supplied by the caller.
///
/// `state` is `None` exactly once, when the initial present state is derived
/// from the init action. Reducers must be total and pure: the history is
/// rebuilt by replaying recorded actions through them, so the same inputs
/// must always produce the same state.
///
/// Any `Fn(Option<&S>, &A) -> S` is a reducer.
///
/// # Example
///
/// ```rust
/// use undox::core::Reducer;
///
/// let counter = |state: Option<&i64>, delta: &i64| state.copied().unwrap_or(0) + delta;
///
/// assert_eq!(counter.reduce(None, &5), 5);
/// assert_eq!(counter.reduce(Some(&5), &-2), 3);
/// ```
pub trait Reducer<S, A> {
    fn reduce(&self, state: Option<&S>, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<&S>, &A) -> S,
{
    fn reduce(&self, state: Option<&S>, action: &A) -> S {
        self(state, action)
    }
}

/// Replay entries from the absent state.
///
/// Returns `None` only when `entries` holds no actions at all.
pub fn replay<'a, S, A, R, I>(reducer: &R, entries: I) -> Option<S>
where
    A: 'a,
    R: Reducer<S, A> + ?Sized,
    I: IntoIterator<Item = &'a HistoryEntry<A>>,
{
    entries
        .into_iter()
        .flat_map(HistoryEntry::actions)
        .fold(None, |state, action| {
            Some(reducer.reduce(state.as_ref(), action))
        })
}

/// Fold entries on top of an already materialized state.
pub fn fold_from<'a, S, A, R, I>(reducer: &R, seed: S, entries: I) -> S
where
    A: 'a,
    R: Reducer<S, A> + ?Sized,
    I: IntoIterator<Item = &'a HistoryEntry<A>>,
{
    fold_actions(
        reducer,
        seed,
        entries.into_iter().flat_map(HistoryEntry::actions),
    )
}

/// Fold bare actions on top of `seed`.
pub(crate) fn fold_actions<'a, S, A, R, I>(reducer: &R, seed: S, actions: I) -> S
where
    A: 'a,
    R: Reducer<S, A> + ?Sized,
    I: IntoIterator<Item = &'a A>,
{
    actions
        .into_iter()
        .fold(seed, |state, action| reducer.reduce(Some(&state), action))
}
