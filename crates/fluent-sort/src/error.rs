//! Error types for the fluent-sort crate.

use thiserror::Error;

/// Errors that can occur when configuring or executing a sort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A selector, path or sort key could not be used.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A sort was composed or executed without any rules.
    #[error("must provide at least one comparator")]
    EmptyRuleSet,

    /// The builder's rule set was not in a usable state for the call.
    #[error("corrupt sort state: {0}")]
    CorruptState(String),
}

impl SortError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SortError::InvalidArgument(message.into())
    }

    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        SortError::CorruptState(message.into())
    }
}

/// Result type for fluent-sort operations.
pub type Result<T> = std::result::Result<T, SortError>;
