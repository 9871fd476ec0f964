//! Undox: undo, redo and grouping for pure reducers
//!
//! Undox wraps a deterministic reducer `(state, action) -> state` without
//! touching it. Every applied action is recorded in a log, and past or
//! future states are rebuilt by replaying that log through the reducer.
//!
//! # Core Concepts
//!
//! - **Reducer**: the caller's pure transition function, via the `Reducer` trait
//! - **History**: an immutable `UndoxState` holding the action log, the
//!   present index and the materialized present state
//! - **Handlers**: `undo`, `redo`, `group` and `delegate`, each a pure
//!   function from one history state to the next
//! - **Selectors**: read-only views that rebuild past and future states
//! - **Store**: a single-writer shell that holds the current history
//!
//! # Example
//!
//! ```rust
//! use undox::core::{group, redo, undo, undox, Action};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! enum Counter {
//!     #[default]
//!     Init,
//!     Increment,
//!     Decrement,
//! }
//!
//! impl Action for Counter {
//!     fn action_type(&self) -> &str {
//!         match self {
//!             Self::Init => "undox/INIT",
//!             Self::Increment => "INCREMENT",
//!             Self::Decrement => "DECREMENT",
//!         }
//!     }
//! }
//!
//! let counter = |state: Option<&i32>, action: &Counter| {
//!     let state = state.copied().unwrap_or(0);
//!     match action {
//!         Counter::Init => state,
//!         Counter::Increment => state + 1,
//!         Counter::Decrement => state - 1,
//!     }
//! };
//!
//! let reducer = undox(counter);
//! let mut state = reducer.initial_state();
//! for action in [Counter::Increment, Counter::Increment, Counter::Decrement] {
//!     state = reducer.reduce(Some(&state), action.into());
//! }
//! assert_eq!((*state.present(), state.index()), (1, 3));
//!
//! let state = reducer.reduce(Some(&state), undo(2).unwrap());
//! assert_eq!((*state.present(), state.index()), (1, 1));
//!
//! let state = reducer.reduce(Some(&state), redo(1).unwrap());
//! assert_eq!((*state.present(), state.index()), (2, 2));
//!
//! let state = reducer.reduce(
//!     Some(&state),
//!     group(vec![Counter::Increment, Counter::Increment]).unwrap(),
//! );
//! assert_eq!((*state.present(), state.index()), (4, 3));
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, UndoxBuilder, UndoxConfig};
pub use core::{Action, Comparator, IgnoredActions, Reducer, Undox, UndoxAction, UndoxState};
pub use store::Store;
