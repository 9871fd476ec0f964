//! Builder API for configuring history reducers.
//!
//! The builder collects the init action, comparator and ignored tags, then
//! validates them once before producing an [`Undox`].

pub mod config;
pub mod error;

pub use config::UndoxConfig;
pub use error::{BuildError, ConfigViolation};

use crate::core::{Action, Comparator, IgnoredActions, Reducer, Undox};
use stillwater::validation::Validation;

/// Builder for history reducers with a fluent API.
///
/// # Example
///
/// ```rust
/// use undox::builder::UndoxBuilder;
/// use undox::core::Action;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Edit {
///     Init,
///     Type(char),
///     MoveCursor(usize),
/// }
///
/// impl Action for Edit {
///     fn action_type(&self) -> &str {
///         match self {
///             Self::Init => "undox/INIT",
///             Self::Type(_) => "TYPE",
///             Self::MoveCursor(_) => "MOVE_CURSOR",
///         }
///     }
/// }
///
/// let reducer = |state: Option<&(String, usize)>, edit: &Edit| {
///     let (mut text, mut cursor) = state.cloned().unwrap_or_default();
///     match edit {
///         Edit::Init => {}
///         Edit::Type(c) => {
///             text.push(*c);
///             cursor += 1;
///         }
///         Edit::MoveCursor(at) => cursor = *at,
///     }
///     (text, cursor)
/// };
///
/// let wrapped = UndoxBuilder::new(reducer)
///     .init_action(Edit::Init)
///     .ignore("MOVE_CURSOR")
///     .build()
///     .unwrap();
///
/// let state = wrapped.reduce(None, Edit::Type('a').into());
/// let state = wrapped.reduce(Some(&state), Edit::MoveCursor(0).into());
/// assert_eq!(state.index(), 1);
/// assert_eq!(state.present(), &("a".to_string(), 0));
/// ```
pub struct UndoxBuilder<S, A, R> {
    reducer: R,
    init_action: Option<A>,
    comparator: Comparator<S>,
    ignored: IgnoredActions,
}

impl<S, A, R> UndoxBuilder<S, A, R>
where
    S: Clone + PartialEq + 'static,
    A: Action,
    R: Reducer<S, A>,
{
    /// Create a builder that compares states with `PartialEq`.
    pub fn new(reducer: R) -> Self {
        Self::with_comparator(reducer, Comparator::default())
    }
}

impl<S, A, R> UndoxBuilder<S, A, R>
where
    S: Clone + 'static,
    A: Action,
    R: Reducer<S, A>,
{
    /// Create a builder with an explicit comparator, for states that do
    /// not implement `PartialEq`.
    pub fn with_comparator(reducer: R, comparator: Comparator<S>) -> Self {
        Self {
            reducer,
            init_action: None,
            comparator,
            ignored: IgnoredActions::new(),
        }
    }

    /// Set the action that seeds the initial state (required).
    pub fn init_action(mut self, action: A) -> Self {
        self.init_action = Some(action);
        self
    }

    /// Replace the comparator.
    pub fn comparator(mut self, comparator: Comparator<S>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Replace the comparator using a closure.
    pub fn compare_with<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S, &S) -> bool + Send + Sync + 'static,
    {
        self.comparator = Comparator::new(predicate);
        self
    }

    /// Record every action, even ones that leave the state unchanged.
    pub fn record_noops(mut self) -> Self {
        self.comparator = Comparator::never();
        self
    }

    /// Ignore one action tag.
    pub fn ignore(mut self, tag: impl Into<String>) -> Self {
        self.ignored = self.ignored.ignore(tag);
        self
    }

    /// Replace the whole ignored-actions set.
    pub fn ignored_actions(mut self, ignored: IgnoredActions) -> Self {
        self.ignored = ignored;
        self
    }

    /// Apply declarative settings on top of the builder's.
    pub fn config(mut self, config: UndoxConfig) -> Self {
        for (tag, ignored) in config.ignored_actions.iter() {
            self.ignored.set(tag, ignored);
        }
        if config.record_noops {
            self.comparator = Comparator::never();
        }
        self
    }

    /// Build the history reducer.
    /// Returns an error if the init action is missing or the ignored tags
    /// are invalid.
    pub fn build(self) -> Result<Undox<S, A, R>, BuildError> {
        let init_action = self.init_action.ok_or(BuildError::MissingInitAction)?;

        let settings = UndoxConfig {
            ignored_actions: self.ignored,
            record_noops: false,
        };
        if let Validation::Failure(errors) = settings.validate() {
            return Err(BuildError::InvalidConfig(errors.iter().cloned().collect()));
        }

        Ok(Undox::with_parts(
            self.reducer,
            init_action,
            self.comparator,
            settings.ignored_actions,
        ))
    }
}
