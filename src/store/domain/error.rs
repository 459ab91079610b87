//! Error types for task domain validation and lifecycle rules.

use super::TaskName;
use thiserror::Error;

/// Errors returned while constructing or transitioning domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The username is empty or contains whitespace.
    #[error("invalid username '{0}', expected a single non-empty token")]
    InvalidUsername(String),

    /// The task name is empty or contains whitespace.
    #[error("invalid task name '{0}', expected a single non-empty token")]
    InvalidTaskName(String),

    /// The task cannot be reopened because it was never closed.
    #[error("task '{0}' is not closed and cannot be reopened")]
    NotClosed(TaskName),

    /// The task cannot be deleted while it is still open.
    #[error("task '{0}' must be closed before it can be deleted")]
    StillOpen(TaskName),
}
