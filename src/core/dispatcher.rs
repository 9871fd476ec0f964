//! The wrapped reducer that adds undo, redo and grouping to a caller's reducer.

use super::action::{Action, UndoxAction};
use super::comparator::Comparator;
use super::handlers;
use super::history::UndoxState;
use super::ignored::IgnoredActions;
use super::reducer::Reducer;
use super::selectors::{create_selectors, Selectors};
use std::fmt;
use tracing::trace;

/// A caller's reducer decorated with history.
///
/// `Undox` holds everything fixed at construction: the reducer, the init
/// action, the comparator and the ignored-actions set. It never holds a
/// history itself; [`Undox::reduce`] maps one history state to the next.
pub struct Undox<S, A, R> {
    reducer: R,
    init_action: A,
    comparator: Comparator<S>,
    ignored: IgnoredActions,
}

impl<S, A, R> Undox<S, A, R>
where
    S: Clone,
    A: Action,
    R: Reducer<S, A>,
{
    /// Wrap `reducer`, seeding history with `init_action` and comparing
    /// states with `PartialEq`.
    pub fn new(reducer: R, init_action: A) -> Self
    where
        S: PartialEq + 'static,
    {
        Self::with_parts(
            reducer,
            init_action,
            Comparator::default(),
            IgnoredActions::new(),
        )
    }

    /// Wrap `reducer` with every setting given explicitly.
    pub fn with_parts(
        reducer: R,
        init_action: A,
        comparator: Comparator<S>,
        ignored: IgnoredActions,
    ) -> Self {
        Self {
            reducer,
            init_action,
            comparator,
            ignored,
        }
    }

    /// The history a store starts from: only the init entry, at index 0,
    /// with the present state the reducer derives from the absent state.
    pub fn initial_state(&self) -> UndoxState<S, A> {
        let present = self.reducer.reduce(None, &self.init_action);
        UndoxState::seed(self.init_action.clone(), present)
    }

    /// Route `action` to its handler and return the next history state.
    ///
    /// A missing `state` is replaced by [`Undox::initial_state`].
    pub fn reduce(
        &self,
        state: Option<&UndoxState<S, A>>,
        action: UndoxAction<A>,
    ) -> UndoxState<S, A> {
        let initial;
        let state = match state {
            Some(state) => state,
            None => {
                initial = self.initial_state();
                &initial
            }
        };

        trace!(
            action = action.action_type(),
            index = state.index(),
            len = state.len(),
            "dispatch"
        );

        match action {
            UndoxAction::Undo(steps) => handlers::undo(&self.reducer, state, steps),
            UndoxAction::Redo(steps) => handlers::redo(&self.reducer, state, steps),
            UndoxAction::Group(group) => {
                handlers::group(state, &group, &self.reducer, &self.comparator)
            }
            UndoxAction::Delegate(action) => handlers::delegate(
                state,
                action,
                &self.reducer,
                &self.ignored,
                &self.comparator,
            ),
        }
    }

    /// Selectors that replay through this reducer.
    pub fn selectors(&self) -> Selectors<S, A, R>
    where
        R: Clone,
    {
        create_selectors(self.reducer.clone())
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    pub fn init_action(&self) -> &A {
        &self.init_action
    }

    pub fn comparator(&self) -> &Comparator<S> {
        &self.comparator
    }

    pub fn ignored_actions(&self) -> &IgnoredActions {
        &self.ignored
    }
}

impl<S, A: fmt::Debug, R> fmt::Debug for Undox<S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Undox")
            .field("init_action", &self.init_action)
            .field("comparator", &self.comparator)
            .field("ignored", &self.ignored)
            .finish_non_exhaustive()
    }
}

/// Wrap `reducer` using `A::default()` as the init action.
///
/// The default action plays the role of `undox/INIT`: it is recorded as the
/// first history entry and handed to the reducer with an absent state.
pub fn undox<S, A, R>(reducer: R) -> Undox<S, A, R>
where
    S: Clone + PartialEq + 'static,
    A: Action + Default,
    R: Reducer<S, A>,
{
    Undox::new(reducer, A::default())
}
