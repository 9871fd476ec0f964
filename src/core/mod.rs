//! Core history types and logic.
//!
//! This module contains the pure core of the history reducer:
//! - The action vocabulary and the entries recorded from it
//! - The history state and the four transition handlers
//! - Selectors that rebuild past and future states on demand
//! - The dispatcher that routes actions to handlers
//!
//! All logic in this module is pure (no side effects beyond tracing), in
//! keeping with the "pure core, imperative shell" split used by the store.

mod action;
mod comparator;
mod dispatcher;
mod entry;
pub mod handlers;
mod history;
mod ignored;
mod reducer;
mod selectors;

pub use action::{
    group, is_reserved, redo, redo_once, undo, undo_once, Action, ActionError, ActionGroup,
    UndoxAction, GROUP, INIT, REDO, UNDO,
};
pub use comparator::Comparator;
pub use dispatcher::{undox, Undox};
pub use entry::{flatten, HistoryEntry};
pub use history::UndoxState;
pub use ignored::IgnoredActions;
pub use reducer::{fold_from, replay, Reducer};
pub use selectors::{create_selectors, Selectors};
