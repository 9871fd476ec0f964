//! Declarative settings for a history reducer.

use crate::builder::error::{BuildError, ConfigViolation};
use crate::core::{is_reserved, IgnoredActions};
use serde::Deserialize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The part of a history reducer's setup that can live in a file.
///
/// # Example
///
/// ```rust
/// use undox::builder::UndoxConfig;
///
/// let config = UndoxConfig::from_json(
///     r#"{ "ignored_actions": { "SELECT": true }, "record_noops": false }"#,
/// )
/// .unwrap();
///
/// assert!(config.ignored_actions.is_ignored("SELECT"));
/// assert!(config.validate().is_success());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UndoxConfig {
    /// Tags that update the present state without adding history entries
    pub ignored_actions: IgnoredActions,

    /// Record actions even when the state compares equal afterwards
    pub record_noops: bool,
}

impl UndoxConfig {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every setting, accumulating ALL violations.
    ///
    /// Returns `Validation::Success(())` when the configuration is usable.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = self
            .ignored_actions
            .iter()
            .map(|(tag, ignored)| check_tag(tag, ignored))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_tag(tag: &str, ignored: bool) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if tag.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptyTag)
    } else if ignored && is_reserved(tag) {
        Validation::fail(ConfigViolation::ReservedTag {
            tag: tag.to_string(),
        })
    } else {
        Validation::success(())
    }
}
