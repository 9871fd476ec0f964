//! Build errors for history reducers and their configuration.

use thiserror::Error;

/// A single problem found while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Ignored action tag must not be empty")]
    EmptyTag,

    #[error("Reserved tag '{tag}' cannot be ignored")]
    ReservedTag { tag: String },
}

/// Errors that can occur when building a history reducer.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Init action not specified. Call .init_action(action) before .build()")]
    MissingInitAction,

    #[error("Invalid configuration: {} violation(s)", .0.len())]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
