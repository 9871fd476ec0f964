//! Property-based tests for the history reducer.
//!
//! These tests use proptest to verify the history invariants hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use undox::core::{
    group, redo, replay, undo, Action, IgnoredActions, UndoxAction, UndoxState,
};
use undox::{Comparator, Undox};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Init,
    Add(i8),
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
    total: i64,
    selected: u8,
}

fn reducer(state: Option<&Doc>, op: &Op) -> Doc {
    let mut doc = state.cloned().unwrap_or_default();
    match op {
        Op::Init => {}
        Op::Add(n) => doc.total += i64::from(*n),
        Op::Select(s) => doc.selected = *s,
    }
    doc
}

type Reduce = fn(Option<&Doc>, &Op) -> Doc;

fn wrapped() -> Undox<Doc, Op, Reduce> {
    Undox::with_parts(
        reducer as Reduce,
        Op::Init,
        Comparator::default(),
        IgnoredActions::new().ignore("SELECT"),
    )
}

fn run(undox: &Undox<Doc, Op, Reduce>, actions: &[UndoxAction<Op>]) -> UndoxState<Doc, Op> {
    actions
        .iter()
        .cloned()
        .fold(undox.initial_state(), |state, action| {
            undox.reduce(Some(&state), action)
        })
}

prop_compose! {
    fn arbitrary_add()(n in any::<i8>()) -> Op {
        Op::Add(n)
    }
}

/// Actions that are all recorded in history when they change state.
fn recorded_action() -> impl Strategy<Value = UndoxAction<Op>> {
    prop_oneof![
        4 => arbitrary_add().prop_map(UndoxAction::Delegate),
        2 => (1usize..5).prop_map(|n| undo::<Op>(n).unwrap()),
        2 => (1usize..5).prop_map(|n| redo::<Op>(n).unwrap()),
        1 => prop::collection::vec(arbitrary_add(), 1..4).prop_map(|ops| group(ops).unwrap()),
    ]
}

/// Recorded actions mixed with ignored selection changes.
fn any_action() -> impl Strategy<Value = UndoxAction<Op>> {
    prop_oneof![
        4 => recorded_action(),
        1 => any::<u8>().prop_map(|s| UndoxAction::Delegate(Op::Select(s))),
    ]
}

proptest! {
    #[test]
    fn present_matches_replay_of_past(
        actions in prop::collection::vec(recorded_action(), 0..30)
    ) {
        let undox = wrapped();
        let mut state = undox.initial_state();
        for action in actions {
            state = undox.reduce(Some(&state), action);
            let replayed = replay(&reducer, state.past_with_present());
            prop_assert_eq!(replayed.as_ref(), Some(state.present()));
        }
    }

    #[test]
    fn index_stays_in_bounds(
        actions in prop::collection::vec(any_action(), 0..30)
    ) {
        let undox = wrapped();
        let mut state = undox.initial_state();
        for action in actions {
            state = undox.reduce(Some(&state), action);
            prop_assert!(state.index() < state.len());
            prop_assert_eq!(state.history()[0].actions(), &[Op::Init]);
        }
    }

    #[test]
    fn no_op_leaves_history_untouched(
        actions in prop::collection::vec(any_action(), 0..20)
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);

        let after = undox.reduce(Some(&before), Op::Add(0).into());
        prop_assert_eq!(&after, &before);

        let after = undox.reduce(Some(&before), group(vec![Op::Add(0), Op::Add(0)]).unwrap());
        prop_assert_eq!(&after, &before);
    }

    #[test]
    fn real_change_drops_future(
        actions in prop::collection::vec(any_action(), 0..20),
        n in 1i8..=i8::MAX,
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);

        let after = undox.reduce(Some(&before), Op::Add(n).into());
        prop_assert!(!after.can_redo());
        prop_assert_eq!(after.len(), before.index() + 2);
        prop_assert_eq!(after.index(), before.index() + 1);
    }

    #[test]
    fn redo_inverts_undo(
        actions in prop::collection::vec(recorded_action(), 0..20),
        steps in 1usize..6,
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);
        prop_assume!(steps <= before.past_len());

        let undone = undox.reduce(Some(&before), undo(steps).unwrap());
        let redone = undox.reduce(Some(&undone), redo(steps).unwrap());

        prop_assert_eq!(redone.index(), before.index());
        prop_assert_eq!(redone.present(), before.present());
        prop_assert_eq!(redone.history(), before.history());
    }

    #[test]
    fn group_moves_as_one_entry(
        actions in prop::collection::vec(recorded_action(), 0..20),
        ops in prop::collection::vec(1i8..=i8::MAX, 1..6),
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);
        let ops: Vec<Op> = ops.into_iter().map(Op::Add).collect();

        let grouped = undox.reduce(Some(&before), group(ops.clone()).unwrap());
        prop_assert_eq!(grouped.index(), before.index() + 1);
        prop_assert_eq!(grouped.present_entry().actions(), ops.as_slice());

        let undone = undox.reduce(Some(&grouped), undo(1).unwrap());
        prop_assert_eq!(undone.index(), before.index());
        prop_assert_eq!(undone.present(), before.present());
    }

    #[test]
    fn ignored_change_prunes_without_recording(
        actions in prop::collection::vec(recorded_action(), 0..20),
        selection in 1u8..=u8::MAX,
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);
        prop_assume!(before.present().selected != selection);

        let after = undox.reduce(Some(&before), Op::Select(selection).into());
        prop_assert_eq!(after.index(), before.index());
        prop_assert_eq!(after.len(), before.index() + 1);
        prop_assert!(!after.can_redo());
        prop_assert_eq!(after.present().selected, selection);
    }

    #[test]
    fn undo_beyond_past_lands_on_init(
        actions in prop::collection::vec(any_action(), 0..20),
        extra in 1usize..10,
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);

        let initial = undox.initial_state();
        let after = undox.reduce(Some(&before), undo(before.past_len() + extra).unwrap());
        prop_assert_eq!(after.index(), 0);
        prop_assert_eq!(after.present(), initial.present());
        prop_assert_eq!(after.history(), before.history());
    }

    #[test]
    fn dispatch_never_mutates_its_input(
        actions in prop::collection::vec(any_action(), 0..20),
        next in any_action(),
    ) {
        let undox = wrapped();
        let before = run(&undox, &actions);
        let snapshot = before.clone();

        let _ = undox.reduce(Some(&before), next);
        prop_assert_eq!(before, snapshot);
    }
}
