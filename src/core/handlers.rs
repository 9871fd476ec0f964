//! Transition handlers: undo, redo, group and delegate.
//!
//! Each handler is a pure function from the current history state and an
//! incoming action to a new history state. None of them mutate their input.

use super::action::{Action, ActionGroup};
use super::comparator::Comparator;
use super::entry::HistoryEntry;
use super::history::UndoxState;
use super::ignored::IgnoredActions;
use super::reducer::{fold_actions, fold_from, replay, Reducer};
use std::num::NonZeroUsize;
use tracing::debug;

/// Move back by `steps` entries.
///
/// Asking for more steps than the past holds lands on the init entry.
/// The present state is rebuilt by replaying from the very first entry,
/// since an earlier state cannot be derived from a later one.
pub fn undo<S, A, R>(
    reducer: &R,
    state: &UndoxState<S, A>,
    steps: NonZeroUsize,
) -> UndoxState<S, A>
where
    S: Clone,
    A: Clone,
    R: Reducer<S, A> + ?Sized,
{
    let steps = steps.get();
    let index = if steps <= state.index() {
        state.index() - steps
    } else {
        0
    };

    // history[0] is the init entry, so replay always yields a state
    let Some(present) = replay(reducer, &state.history()[..=index]) else {
        return state.clone();
    };

    debug!(steps, from = state.index(), to = index, "undo");
    UndoxState::from_parts(state.history().to_vec(), index, present)
}

/// Move forward by `steps` entries.
///
/// Asking for more steps than the future holds lands on the last entry.
/// Only the entries actually traversed are folded, on top of the current
/// present state.
pub fn redo<S, A, R>(
    reducer: &R,
    state: &UndoxState<S, A>,
    steps: NonZeroUsize,
) -> UndoxState<S, A>
where
    S: Clone,
    A: Clone,
    R: Reducer<S, A> + ?Sized,
{
    let steps = steps.get();
    let last = state.len() - 1;
    let index = if steps <= state.future_len() {
        state.index() + steps
    } else {
        last
    };

    let traversed = &state.history()[state.index() + 1..=index];
    let present = fold_from(reducer, state.present().clone(), traversed);

    debug!(steps, from = state.index(), to = index, "redo");
    UndoxState::from_parts(state.history().to_vec(), index, present)
}

/// Apply a group of actions as one atomic history entry.
///
/// A group that leaves the present state unchanged (per `comparator`) is
/// discarded entirely. Otherwise any future entries are dropped.
pub fn group<S, A, R>(
    state: &UndoxState<S, A>,
    group: &ActionGroup<A>,
    reducer: &R,
    comparator: &Comparator<S>,
) -> UndoxState<S, A>
where
    S: Clone,
    A: Clone,
    R: Reducer<S, A> + ?Sized,
{
    let next = fold_actions(reducer, state.present().clone(), group.actions());

    if comparator.equals(state.present(), &next) {
        debug!(
            index = state.index(),
            size = group.len(),
            "group is a no-op"
        );
        return state.clone();
    }

    let mut history = state.past_with_present().to_vec();
    history.push(HistoryEntry::Group(group.actions().to_vec()));
    let index = state.index() + 1;

    debug!(
        index,
        size = group.len(),
        dropped = state.future_len(),
        "recorded group"
    );
    UndoxState::from_parts(history, index, next)
}

/// Pass an ordinary action to the caller's reducer.
///
/// No-op actions leave the history state untouched, future included. Any
/// real change drops the future; ignored actions then only advance the
/// present state, everything else is recorded as a new entry.
pub fn delegate<S, A, R>(
    state: &UndoxState<S, A>,
    action: A,
    reducer: &R,
    ignored: &IgnoredActions,
    comparator: &Comparator<S>,
) -> UndoxState<S, A>
where
    S: Clone,
    A: Action,
    R: Reducer<S, A> + ?Sized,
{
    let next = reducer.reduce(Some(state.present()), &action);

    if comparator.equals(state.present(), &next) {
        debug!(action = action.action_type(), "action is a no-op");
        return state.clone();
    }

    let mut history = state.past_with_present().to_vec();
    let mut index = state.index();

    if ignored.is_ignored(action.action_type()) {
        debug!(
            action = action.action_type(),
            dropped = state.future_len(),
            "ignored action changed state"
        );
    } else {
        debug!(
            action = action.action_type(),
            index = index + 1,
            dropped = state.future_len(),
            "recorded action"
        );
        history.push(HistoryEntry::Single(action));
        index += 1;
    }

    UndoxState::from_parts(history, index, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Init,
        Add(i32),
        Select(u8),
    }

    impl Action for Op {
        fn action_type(&self) -> &str {
            match self {
                Self::Init => "undox/INIT",
                Self::Add(_) => "ADD",
                Self::Select(_) => "SELECT",
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Doc {
        total: i32,
        selected: u8,
    }

    fn reducer(state: Option<&Doc>, op: &Op) -> Doc {
        let mut doc = state.cloned().unwrap_or_default();
        match op {
            Op::Init => {}
            Op::Add(n) => doc.total += n,
            Op::Select(s) => doc.selected = *s,
        }
        doc
    }

    fn steps(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn seeded() -> UndoxState<Doc, Op> {
        UndoxState::seed(Op::Init, reducer(None, &Op::Init))
    }

    fn apply(state: &UndoxState<Doc, Op>, op: Op) -> UndoxState<Doc, Op> {
        delegate(
            state,
            op,
            &reducer,
            &IgnoredActions::new().ignore("SELECT"),
            &Comparator::default(),
        )
    }

    fn three_adds() -> UndoxState<Doc, Op> {
        let state = apply(&seeded(), Op::Add(1));
        let state = apply(&state, Op::Add(2));
        apply(&state, Op::Add(3))
    }

    #[test]
    fn delegate_records_changes() {
        let state = apply(&seeded(), Op::Add(5));
        assert_eq!(state.index(), 1);
        assert_eq!(state.len(), 2);
        assert_eq!(state.present().total, 5);
        assert_eq!(state.present_entry(), &HistoryEntry::Single(Op::Add(5)));
    }

    #[test]
    fn delegate_suppresses_no_ops() {
        let state = three_adds();
        let undone = undo(&reducer, &state, steps(1));
        let after = apply(&undone, Op::Add(0));
        assert_eq!(after, undone);
        assert_eq!(after.future_len(), 1);
    }

    #[test]
    fn delegate_drops_future_on_change() {
        let state = undo(&reducer, &three_adds(), steps(2));
        let state = apply(&state, Op::Add(10));
        assert_eq!(state.len(), 3);
        assert_eq!(state.index(), 2);
        assert!(!state.can_redo());
        assert_eq!(state.present().total, 11);
    }

    #[test]
    fn ignored_action_advances_present_only() {
        let state = apply(&seeded(), Op::Add(1));
        let state = apply(&state, Op::Select(4));
        assert_eq!(state.index(), 1);
        assert_eq!(state.len(), 2);
        assert_eq!(state.present().selected, 4);
    }

    #[test]
    fn ignored_action_still_prunes_future() {
        let state = undo(&reducer, &three_adds(), steps(2));
        assert_eq!(state.future_len(), 2);

        let state = apply(&state, Op::Select(7));
        assert_eq!(state.index(), 1);
        assert_eq!(state.len(), 2);
        assert!(!state.can_redo());
    }

    #[test]
    fn undo_replays_from_start() {
        let state = undo(&reducer, &three_adds(), steps(2));
        assert_eq!(state.index(), 1);
        assert_eq!(state.present().total, 1);
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn undo_past_start_clamps_to_init() {
        let state = undo(&reducer, &three_adds(), steps(10));
        assert_eq!(state.index(), 0);
        assert_eq!(state.present(), &Doc::default());
        assert_eq!(state.future_len(), 3);
    }

    #[test]
    fn undo_discards_ignored_changes_on_replay() {
        let state = apply(&seeded(), Op::Add(1));
        let state = apply(&state, Op::Select(9));
        let state = undo(&reducer, &state, steps(1));
        assert_eq!(state.present(), &Doc::default());
    }

    #[test]
    fn redo_folds_only_traversed_entries() {
        let state = undo(&reducer, &three_adds(), steps(3));
        let state = redo(&reducer, &state, steps(2));
        assert_eq!(state.index(), 2);
        assert_eq!(state.present().total, 3);
        assert_eq!(state.future_len(), 1);
    }

    #[test]
    fn redo_past_end_clamps_to_last_entry() {
        let state = undo(&reducer, &three_adds(), steps(2));
        let state = redo(&reducer, &state, steps(9));
        assert_eq!(state.index(), 3);
        assert_eq!(state.present().total, 6);
    }

    #[test]
    fn redo_without_future_is_stable() {
        let state = three_adds();
        let redone = redo(&reducer, &state, steps(1));
        assert_eq!(redone, state);
    }

    #[test]
    fn redo_builds_on_current_present() {
        // Ignored changes survive a redo because redo never replays from scratch
        let state = undo(&reducer, &three_adds(), steps(1));
        let with_selection = UndoxState::from_parts(
            state.history().to_vec(),
            state.index(),
            Doc {
                selected: 3,
                ..state.present().clone()
            },
        );
        let state = redo(&reducer, &with_selection, steps(1));
        assert_eq!(
            state.present(),
            &Doc {
                total: 6,
                selected: 3
            }
        );
    }

    #[test]
    fn group_records_single_entry() {
        let actions = ActionGroup::new(vec![Op::Add(1), Op::Add(1)]).unwrap();
        let state = group(&seeded(), &actions, &reducer, &Comparator::default());
        assert_eq!(state.index(), 1);
        assert_eq!(state.len(), 2);
        assert_eq!(state.present().total, 2);
        assert_eq!(
            state.present_entry(),
            &HistoryEntry::Group(vec![Op::Add(1), Op::Add(1)])
        );
    }

    #[test]
    fn group_no_op_is_discarded() {
        let actions = ActionGroup::new(vec![Op::Add(4), Op::Add(-4)]).unwrap();
        let before = undo(&reducer, &three_adds(), steps(1));
        let after = group(&before, &actions, &reducer, &Comparator::default());
        assert_eq!(after, before);
    }

    #[test]
    fn group_drops_future() {
        let actions = ActionGroup::new(vec![Op::Add(100)]).unwrap();
        let state = undo(&reducer, &three_adds(), steps(2));
        let state = group(&state, &actions, &reducer, &Comparator::default());
        assert_eq!(state.len(), 3);
        assert!(!state.can_redo());
        assert_eq!(state.present().total, 101);
    }

    #[test]
    fn group_is_undone_as_a_whole() {
        let actions = ActionGroup::new(vec![Op::Add(1), Op::Add(2), Op::Add(3)]).unwrap();
        let state = apply(&seeded(), Op::Add(10));
        let state = group(&state, &actions, &reducer, &Comparator::default());

        let undone = undo(&reducer, &state, steps(1));
        assert_eq!(undone.present().total, 10);

        let redone = redo(&reducer, &undone, steps(1));
        assert_eq!(redone.present().total, 16);
        assert_eq!(redone.index(), state.index());
    }

    #[test]
    fn handlers_leave_input_untouched() {
        let state = three_adds();
        let snapshot = state.clone();
        let _ = undo(&reducer, &state, steps(1));
        let _ = redo(&reducer, &state, steps(1));
        let _ = apply(&state, Op::Add(1));
        assert_eq!(state, snapshot);
    }
}
