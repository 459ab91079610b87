//! In-memory task store adapter.

pub mod store;

pub use store::InMemoryTaskStore;
