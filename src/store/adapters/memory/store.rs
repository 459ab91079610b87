//! Thread-safe in-memory task store.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::{
    domain::{Task, TaskName, Username},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Per-user collections are plain vectors: appending preserves creation
/// order for listing, and collections stay small enough that name lookup
/// by linear scan is adequate. One lock guards the whole store, so each
/// operation's existence, ownership, and state checks are atomic with
/// respect to concurrent connections.
#[derive(Debug)]
pub struct InMemoryTaskStore<C> {
    clock: Arc<C>,
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<Username, Vec<Task>>,
}

impl<C> InMemoryTaskStore<C> {
    /// Creates an empty store using the given clock for task timestamps.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            state: Arc::default(),
        }
    }

    fn read_state(&self) -> TaskStoreResult<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::internal(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> TaskStoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::internal(std::io::Error::other(err.to_string())))
    }
}

/// Checks whether a collection holds a live task with the given name.
fn holds_task(tasks: &[Task], name: &TaskName) -> bool {
    tasks.iter().any(|task| task.name() == name)
}

/// Resolves a mutation target: existence first, then ownership.
///
/// A task the requester owns passes. A task of that name under any other
/// user is `AccessDenied`; a name that is live nowhere is `NotFound`.
fn ensure_requester_owns(
    state: &StoreState,
    requester: &Username,
    name: &TaskName,
) -> TaskStoreResult<()> {
    if state
        .users
        .get(requester)
        .is_some_and(|tasks| holds_task(tasks, name))
    {
        return Ok(());
    }

    let owned_by_other = state
        .users
        .iter()
        .any(|(owner, tasks)| owner != requester && holds_task(tasks, name));
    if owned_by_other {
        return Err(TaskStoreError::AccessDenied {
            requester: requester.clone(),
            name: name.clone(),
        });
    }
    Err(TaskStoreError::NotFound(name.clone()))
}

/// Looks up the requester's task for in-place mutation.
fn task_mut<'a>(
    state: &'a mut StoreState,
    requester: &Username,
    name: &TaskName,
) -> Option<&'a mut Task> {
    state
        .users
        .get_mut(requester)
        .and_then(|tasks| tasks.iter_mut().find(|task| task.name() == name))
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn create_task(&self, owner: &Username, name: &TaskName) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        let tasks = state.users.entry(owner.clone()).or_default();
        if holds_task(tasks, name) {
            return Err(TaskStoreError::AlreadyExists {
                owner: owner.clone(),
                name: name.clone(),
            });
        }
        tasks.push(Task::new(owner.clone(), name.clone(), &*self.clock));
        Ok(())
    }

    async fn list_tasks(&self, owner: &Username) -> TaskStoreResult<Vec<TaskName>> {
        let state = self.read_state()?;
        Ok(state
            .users
            .get(owner)
            .map(|tasks| tasks.iter().map(|task| task.name().clone()).collect())
            .unwrap_or_default())
    }

    async fn close_task(&self, requester: &Username, name: &TaskName) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        ensure_requester_owns(&state, requester, name)?;
        if let Some(task) = task_mut(&mut state, requester, name) {
            task.close(&*self.clock);
        }
        Ok(())
    }

    async fn reopen_task(&self, requester: &Username, name: &TaskName) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        ensure_requester_owns(&state, requester, name)?;
        task_mut(&mut state, requester, name).map_or_else(
            || Err(TaskStoreError::NotFound(name.clone())),
            |task| task.reopen(&*self.clock).map_err(TaskStoreError::from),
        )
    }

    async fn delete_task(&self, requester: &Username, name: &TaskName) -> TaskStoreResult<()> {
        let mut state = self.write_state()?;
        ensure_requester_owns(&state, requester, name)?;

        let tasks = state
            .users
            .get_mut(requester)
            .ok_or_else(|| TaskStoreError::NotFound(name.clone()))?;
        let position = tasks
            .iter()
            .position(|task| task.name() == name)
            .ok_or_else(|| TaskStoreError::NotFound(name.clone()))?;
        if let Some(task) = tasks.get(position) {
            task.ensure_deletable()?;
        }
        tasks.remove(position);

        let emptied = tasks.is_empty();
        if emptied {
            state.users.remove(requester);
        }
        Ok(())
    }
}
