//! Command dispatch and outcome-to-response mapping.

use super::{Command, Response};
use crate::store::ports::{TaskStore, TaskStoreError, TaskStoreResult};
use std::sync::Arc;
use tracing::error;

/// Stateless per-request command interpreter.
///
/// Holds the shared task store; every request line flows through
/// [`CommandInterpreter::handle_line`] and yields exactly one response.
#[derive(Debug)]
pub struct CommandInterpreter<S> {
    store: Arc<S>,
}

impl<S> CommandInterpreter<S>
where
    S: TaskStore,
{
    /// Creates an interpreter over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Interprets one request line and renders the response.
    ///
    /// Malformed lines are rejected before any store access. Store
    /// failures are recovered here; they never terminate the session.
    pub async fn handle_line(&self, line: &str) -> Response {
        match Command::parse(line) {
            Ok(command) => self.dispatch(command).await,
            Err(_) => Response::WrongFormat,
        }
    }

    async fn dispatch(&self, command: Command) -> Response {
        match command {
            Command::Create { owner, task } => {
                render_mutation(self.store.create_task(&owner, &task).await, Response::Created)
            }
            Command::Close { requester, task } => {
                render_mutation(self.store.close_task(&requester, &task).await, Response::Closed)
            }
            Command::Reopen { requester, task } => render_mutation(
                self.store.reopen_task(&requester, &task).await,
                Response::Reopened,
            ),
            Command::Delete { requester, task } => render_mutation(
                self.store.delete_task(&requester, &task).await,
                Response::Deleted,
            ),
            Command::List { owner, .. } => match self.store.list_tasks(&owner).await {
                Ok(names) => Response::Tasks(names),
                Err(err) => render_failure(&err),
            },
        }
    }
}

/// Maps a mutation outcome to its wire response.
fn render_mutation(result: TaskStoreResult<()>, success: Response) -> Response {
    match result {
        Ok(()) => success,
        Err(err) => render_failure(&err),
    }
}

/// Maps a store failure to its wire response.
///
/// Ownership violations have a dedicated response; every other rejection
/// collapses to `ERROR`, as the protocol does not distinguish them.
fn render_failure(err: &TaskStoreError) -> Response {
    match err {
        TaskStoreError::AccessDenied { .. } => Response::AccessDenied,
        TaskStoreError::AlreadyExists { .. }
        | TaskStoreError::NotFound(_)
        | TaskStoreError::InvalidState(_) => Response::Error,
        TaskStoreError::Internal(_) => {
            error!(err = %err, "task store failure");
            Response::Error
        }
    }
}
