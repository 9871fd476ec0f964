//! Actions that update the present state without becoming history steps.

use serde::Deserialize;
use std::collections::HashMap;

/// Mapping from action tag to "ignored" flag.
///
/// Tags missing from the map are not ignored. An ignored action that
/// changes state still drops the redo stack.
///
/// # Example
///
/// ```rust
/// use undox::core::IgnoredActions;
///
/// let ignored: IgnoredActions = ["SELECT", "HOVER"].into_iter().collect();
///
/// assert!(ignored.is_ignored("SELECT"));
/// assert!(!ignored.is_ignored("DELETE"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IgnoredActions {
    tags: HashMap<String, bool>,
}

impl IgnoredActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `tag` as ignored, returning the updated set.
    pub fn ignore(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into(), true);
        self
    }

    /// Set the flag for `tag` explicitly.
    pub fn set(&mut self, tag: impl Into<String>, ignored: bool) {
        self.tags.insert(tag.into(), ignored);
    }

    pub fn is_ignored(&self, tag: &str) -> bool {
        self.tags.get(tag).copied().unwrap_or(false)
    }

    /// Iterate over every configured tag with its flag.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.tags.iter().map(|(tag, flag)| (tag.as_str(), *flag))
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl From<HashMap<String, bool>> for IgnoredActions {
    fn from(tags: HashMap<String, bool>) -> Self {
        Self { tags }
    }
}

impl<T: Into<String>> FromIterator<T> for IgnoredActions {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(|tag| (tag.into(), true)).collect(),
        }
    }
}

impl<T: Into<String>> Extend<T> for IgnoredActions {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tags
            .extend(iter.into_iter().map(|tag| (tag.into(), true)));
    }
}
