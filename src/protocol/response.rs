//! Response rendering to exact wire strings.

use crate::store::domain::TaskName;
use std::fmt;

/// Protocol response, one per request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Task created.
    Created,
    /// Task closed (or already closed).
    Closed,
    /// Closed task reopened.
    Reopened,
    /// Closed task deleted.
    Deleted,
    /// Operation rejected: duplicate name, unknown task, or invalid state.
    Error,
    /// Mutation attempted on a task owned by someone else.
    AccessDenied,
    /// Request line did not match any recognized command shape.
    WrongFormat,
    /// Listing result, in creation order.
    Tasks(Vec<TaskName>),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Reopened => write!(f, "REOPENED"),
            Self::Deleted => write!(f, "DELETED"),
            Self::Error => write!(f, "ERROR"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::WrongFormat => write!(f, "WRONG_FORMAT"),
            Self::Tasks(names) => {
                let joined = names
                    .iter()
                    .map(TaskName::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "TASKS [{joined}]")
            }
        }
    }
}
