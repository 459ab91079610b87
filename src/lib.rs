//! Taskline: a line-protocol task-tracking service.
//!
//! Clients send one command per line (`<user> <VERB> <arg>`) and receive one
//! response line per command. The service keeps an in-memory, per-user,
//! creation-ordered task list and enforces ownership rules: only a task's
//! owner may close, reopen, or delete it, while anyone may list another
//! user's tasks.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task-lifecycle logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the task store
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`store`]: Task store — domain model, store port, in-memory adapter
//! - [`protocol`]: Command interpreter — parsing, dispatch, response
//!   rendering
//! - [`server`]: TCP transport that frames lines and drives the interpreter

pub mod protocol;
pub mod server;
pub mod store;
