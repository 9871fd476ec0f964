//! Action vocabulary understood by the history reducer.
//!
//! Caller actions pass through untouched; three reserved variants drive
//! undo, redo and grouping.

use std::fmt::Debug;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Tag of the undo action.
pub const UNDO: &str = "undox/UNDO";
/// Tag of the redo action.
pub const REDO: &str = "undox/REDO";
/// Tag of the group action.
pub const GROUP: &str = "undox/GROUP";
/// Tag conventionally carried by the action that seeds the initial state.
pub const INIT: &str = "undox/INIT";

/// Returns `true` for the undo, redo and group tags.
///
/// [`INIT`] is not reserved: the init action is an ordinary caller action.
pub fn is_reserved(tag: &str) -> bool {
    matches!(tag, UNDO | REDO | GROUP)
}

/// Trait for caller actions.
///
/// The tag returned by [`Action::action_type`] is what the ignored-actions
/// set is keyed on.
///
/// # Example
///
/// ```rust
/// use undox::core::Action;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Counter {
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
/// assert_eq!(Counter::Increment.action_type(), "INCREMENT");
/// ```
pub trait Action: Clone + Debug {
    /// Tag identifying the kind of this action.
    fn action_type(&self) -> &str;
}

/// Errors raised when constructing history actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Step count must be positive (got {steps})")]
    InvalidStepCount { steps: usize },

    #[error("A group must contain at least one action")]
    EmptyGroup,
}

/// A non-empty, ordered run of actions recorded as one history entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionGroup<A> {
    actions: Vec<A>,
}

impl<A> ActionGroup<A> {
    /// Create a group, rejecting an empty list.
    pub fn new(actions: Vec<A>) -> Result<Self, ActionError> {
        if actions.is_empty() {
            return Err(ActionError::EmptyGroup);
        }
        Ok(Self { actions })
    }

    /// Member actions in dispatch order.
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

/// Action accepted by the history reducer.
///
/// Reserved variants are matched exhaustively by the dispatcher; every
/// other action is wrapped in [`UndoxAction::Delegate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoxAction<A> {
    /// Move back by the given number of entries
    Undo(NonZeroUsize),

    /// Move forward by the given number of entries
    Redo(NonZeroUsize),

    /// Apply several actions as one atomic entry
    Group(ActionGroup<A>),

    /// Hand the action to the wrapped reducer
    Delegate(A),
}

impl<A: Action> UndoxAction<A> {
    /// Tag of this action: a reserved tag or the delegated action's own.
    pub fn action_type(&self) -> &str {
        match self {
            Self::Undo(_) => UNDO,
            Self::Redo(_) => REDO,
            Self::Group(_) => GROUP,
            Self::Delegate(action) => action.action_type(),
        }
    }
}

impl<A> From<A> for UndoxAction<A> {
    fn from(action: A) -> Self {
        Self::Delegate(action)
    }
}

fn steps(n: usize) -> Result<NonZeroUsize, ActionError> {
    NonZeroUsize::new(n).ok_or(ActionError::InvalidStepCount { steps: n })
}

/// Create an action that undoes `n` entries.
///
/// # Example
///
/// ```rust
/// use undox::core::{undo, ActionError, UndoxAction};
///
/// let action: UndoxAction<()> = undo(2).unwrap();
/// assert!(matches!(action, UndoxAction::Undo(n) if n.get() == 2));
///
/// let rejected = undo::<()>(0);
/// assert_eq!(rejected, Err(ActionError::InvalidStepCount { steps: 0 }));
/// ```
pub fn undo<A>(n: usize) -> Result<UndoxAction<A>, ActionError> {
    steps(n).map(UndoxAction::Undo)
}

/// Create an action that redoes `n` entries.
pub fn redo<A>(n: usize) -> Result<UndoxAction<A>, ActionError> {
    steps(n).map(UndoxAction::Redo)
}

/// Create an action that applies `actions` as a single history entry.
pub fn group<A>(actions: Vec<A>) -> Result<UndoxAction<A>, ActionError> {
    ActionGroup::new(actions).map(UndoxAction::Group)
}

/// Undo a single entry.
pub fn undo_once<A>() -> UndoxAction<A> {
    UndoxAction::Undo(NonZeroUsize::MIN)
}

/// Redo a single entry.
pub fn redo_once<A>() -> UndoxAction<A> {
    UndoxAction::Redo(NonZeroUsize::MIN)
}
