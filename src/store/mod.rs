//! Task store: per-user, creation-ordered task collections.
//!
//! The store owns the mapping of user to ordered task collection and
//! enforces the lifecycle and uniqueness invariants: task names are unique
//! per user while the task exists, listing preserves creation order, a task
//! must be closed before deletion, and only the owner may mutate a task.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
