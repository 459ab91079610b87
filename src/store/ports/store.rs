//! Task store port: per-user task creation, listing, and lifecycle
//! mutations.

use crate::store::domain::{TaskDomainError, TaskName, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store contract.
///
/// Mutating operations resolve ownership internally: the wire protocol
/// never carries a separate owner for mutations, so a store implementation
/// decides between [`TaskStoreError::NotFound`] (no live task of that name
/// anywhere) and [`TaskStoreError::AccessDenied`] (the task exists under a
/// different owner). Checks are ordered existence, then ownership, then
/// state, and each operation is atomic with respect to concurrent callers.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates a new open task at the end of `owner`'s collection.
    ///
    /// The user's collection is created implicitly when absent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::AlreadyExists`] when `owner` already has a
    /// live task named `name`, in either state.
    async fn create_task(&self, owner: &Username, name: &TaskName) -> TaskStoreResult<()>;

    /// Returns `owner`'s task names in creation order, both open and
    /// closed.
    ///
    /// Never fails for unknown users; their listing is empty. Any caller
    /// may list any owner's tasks.
    async fn list_tasks(&self, owner: &Username) -> TaskStoreResult<Vec<TaskName>>;

    /// Transitions the requester's task from open to closed.
    ///
    /// Closing an already-closed task is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] or
    /// [`TaskStoreError::AccessDenied`] per the ownership resolution rules.
    async fn close_task(&self, requester: &Username, name: &TaskName) -> TaskStoreResult<()>;

    /// Transitions the requester's task from closed back to open.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] or
    /// [`TaskStoreError::AccessDenied`] per the ownership resolution rules,
    /// or [`TaskStoreError::InvalidState`] when the task was never closed.
    async fn reopen_task(&self, requester: &Username, name: &TaskName) -> TaskStoreResult<()>;

    /// Removes the requester's task, freeing its name for reuse.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] or
    /// [`TaskStoreError::AccessDenied`] per the ownership resolution rules,
    /// or [`TaskStoreError::InvalidState`] when the task is still open.
    async fn delete_task(&self, requester: &Username, name: &TaskName) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The owner already has a live task with this name.
    #[error("task '{name}' already exists for user '{owner}'")]
    AlreadyExists {
        /// Owner whose collection rejected the duplicate.
        owner: Username,
        /// Conflicting task name.
        name: TaskName,
    },

    /// No live task with this name exists for any user.
    #[error("no task named '{0}' exists")]
    NotFound(TaskName),

    /// The task exists but belongs to a different user.
    #[error("user '{requester}' does not own task '{name}'")]
    AccessDenied {
        /// Identity that issued the rejected mutation.
        requester: Username,
        /// Name of the task owned by someone else.
        name: TaskName,
    },

    /// The task exists and is owned by the requester, but its current state
    /// forbids the transition.
    #[error(transparent)]
    InvalidState(#[from] TaskDomainError),

    /// Store-internal failure.
    #[error("store error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a store-internal error.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}
