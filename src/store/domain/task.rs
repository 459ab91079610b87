//! Task aggregate root and lifecycle transitions.

use super::{TaskDomainError, TaskName, Username};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created and is awaiting completion.
    Open,
    /// Task has been completed.
    Closed,
}

impl TaskStatus {
    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

/// Task aggregate root.
///
/// A task is owned by exactly one user and identified by a name unique
/// within that user's collection while the task exists. State transitions
/// are validated here; ownership checks belong to the store, which knows
/// the requesting identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    owner: Username,
    name: TaskName,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task owned by `owner`.
    #[must_use]
    pub fn new(owner: Username, name: TaskName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            owner,
            name,
            status: TaskStatus::Open,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> &Username {
        &self.owner
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns `true` when the task is closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.status, TaskStatus::Closed)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Closes the task.
    ///
    /// Closing an already-closed task is a successful no-op; the protocol
    /// does not distinguish the two cases, and the no-op leaves
    /// `updated_at` untouched.
    pub fn close(&mut self, clock: &impl Clock) {
        if self.is_closed() {
            return;
        }
        self.status = TaskStatus::Closed;
        self.touch(clock);
    }

    /// Reopens a closed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotClosed`] when the task is currently
    /// open.
    pub fn reopen(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if !self.is_closed() {
            return Err(TaskDomainError::NotClosed(self.name.clone()));
        }
        self.status = TaskStatus::Open;
        self.touch(clock);
        Ok(())
    }

    /// Checks that the task may be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::StillOpen`] when the task has not been
    /// closed.
    pub fn ensure_deletable(&self) -> Result<(), TaskDomainError> {
        if !self.is_closed() {
            return Err(TaskDomainError::StillOpen(self.name.clone()));
        }
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
