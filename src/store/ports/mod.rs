//! Port contracts for the task store.
//!
//! Ports define infrastructure-agnostic interfaces used by the command
//! interpreter.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
