//! State comparators for detecting no-op transitions.
//!
//! When a comparator reports two states equal, the action that produced the
//! second one is not recorded in history.

use std::fmt;

/// Pure predicate that decides whether two states are the same.
///
/// The default comparator uses `PartialEq`. Use [`Comparator::never`] to
/// record every action, even those that leave the state untouched.
///
/// # Example
///
/// ```rust
/// use undox::core::Comparator;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Doc {
///     text: String,
///     revision: u32,
/// }
///
/// // Only text changes are worth an undo step
/// let same_text = Comparator::new(|a: &Doc, b: &Doc| a.text == b.text);
///
/// let before = Doc { text: "hi".into(), revision: 1 };
/// let after = Doc { text: "hi".into(), revision: 2 };
/// assert!(same_text.equals(&before, &after));
/// ```
pub struct Comparator<S> {
    predicate: Box<dyn Fn(&S, &S) -> bool + Send + Sync>,
}

impl<S> Comparator<S> {
    /// Create a comparator from a pure predicate.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &S) -> bool + Send + Sync + 'static,
    {
        Comparator {
            predicate: Box::new(predicate),
        }
    }

    /// Check whether `previous` and `next` count as the same state.
    pub fn equals(&self, previous: &S, next: &S) -> bool {
        (self.predicate)(previous, next)
    }
}

impl<S: 'static> Comparator<S> {
    /// Comparator that never reports equality, so no action is a no-op.
    ///
    /// ```rust
    /// use undox::core::Comparator;
    ///
    /// let never = Comparator::never();
    /// assert!(!never.equals(&1, &1));
    /// ```
    pub fn never() -> Self {
        Self::new(|_: &S, _: &S| false)
    }
}

impl<S: PartialEq + 'static> Default for Comparator<S> {
    fn default() -> Self {
        Self::new(|a: &S, b: &S| a == b)
    }
}

impl<S> fmt::Debug for Comparator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
