//! Command line parsing.

use crate::store::domain::{TaskName, Username};
use thiserror::Error;

/// Error returned when a request line does not match any recognized
/// command shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed command line: '{0}'")]
pub struct ParseCommandError(pub String);

/// Parsed protocol command.
///
/// Every command names the acting identity first. Mutations operate on the
/// acting user's own task namespace; listing may target any user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<user> CREATE_TASK <task>`
    Create {
        /// Acting user, owner of the new task.
        owner: Username,
        /// Name for the new task.
        task: TaskName,
    },
    /// `<user> CLOSE_TASK <task>`
    Close {
        /// Acting user.
        requester: Username,
        /// Task to close.
        task: TaskName,
    },
    /// `<user> REOPEN_TASK <task>`
    Reopen {
        /// Acting user.
        requester: Username,
        /// Task to reopen.
        task: TaskName,
    },
    /// `<user> DELETE_TASK <task>`
    Delete {
        /// Acting user.
        requester: Username,
        /// Task to delete.
        task: TaskName,
    },
    /// `<user> LIST_TASK <targetUser>`
    List {
        /// Acting user (unused for authorization; listing is open to all).
        requester: Username,
        /// User whose tasks are listed.
        owner: Username,
    },
}

impl Command {
    /// Parses one request line.
    ///
    /// The line must contain exactly three whitespace-separated tokens:
    /// acting user, verb, argument. Verb matching is exact and
    /// case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCommandError`] for any line that does not match a
    /// recognized shape: wrong token count, unknown verb, or case mismatch
    /// on the verb.
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let malformed = || ParseCommandError(line.to_owned());
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [identity, verb, argument] = tokens.as_slice() else {
            return Err(malformed());
        };

        let user = Username::new(*identity).map_err(|_| malformed())?;
        match *verb {
            "CREATE_TASK" => Ok(Self::Create {
                owner: user,
                task: TaskName::new(*argument).map_err(|_| malformed())?,
            }),
            "CLOSE_TASK" => Ok(Self::Close {
                requester: user,
                task: TaskName::new(*argument).map_err(|_| malformed())?,
            }),
            "REOPEN_TASK" => Ok(Self::Reopen {
                requester: user,
                task: TaskName::new(*argument).map_err(|_| malformed())?,
            }),
            "DELETE_TASK" => Ok(Self::Delete {
                requester: user,
                task: TaskName::new(*argument).map_err(|_| malformed())?,
            }),
            "LIST_TASK" => Ok(Self::List {
                requester: user,
                owner: Username::new(*argument).map_err(|_| malformed())?,
            }),
            _ => Err(malformed()),
        }
    }
}
