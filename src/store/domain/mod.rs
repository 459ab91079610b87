//! Domain model for per-user task tracking.
//!
//! The task domain models named tasks owned by a single user, with an
//! open/closed lifecycle, while keeping all transport and storage concerns
//! outside of the domain boundary.

mod error;
mod names;
mod task;

pub use error::TaskDomainError;
pub use names::{TaskName, Username};
pub use task::{Task, TaskStatus};
