//! Shared test helpers for command session tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use taskline::protocol::CommandInterpreter;
use taskline::store::adapters::memory::InMemoryTaskStore;
use tokio::runtime::Runtime;

/// Interpreter type under test.
pub type TestInterpreter = CommandInterpreter<InMemoryTaskStore<DefaultClock>>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides an interpreter over a fresh in-memory store for each test.
#[fixture]
pub fn interpreter() -> TestInterpreter {
    CommandInterpreter::new(Arc::new(InMemoryTaskStore::new(Arc::new(DefaultClock))))
}

/// Sends one request line and returns the rendered response line.
pub fn send(rt: &Runtime, interpreter: &TestInterpreter, line: &str) -> String {
    rt.block_on(interpreter.handle_line(line)).to_string()
}

/// Sends `<user> CREATE_TASK <task>`.
pub fn create_task(rt: &Runtime, interpreter: &TestInterpreter, user: &str, task: &str) -> String {
    send(rt, interpreter, &format!("{user} CREATE_TASK {task}"))
}

/// Sends `<user> CLOSE_TASK <task>`.
pub fn close_task(rt: &Runtime, interpreter: &TestInterpreter, user: &str, task: &str) -> String {
    send(rt, interpreter, &format!("{user} CLOSE_TASK {task}"))
}

/// Sends `<user> REOPEN_TASK <task>`.
pub fn reopen_task(rt: &Runtime, interpreter: &TestInterpreter, user: &str, task: &str) -> String {
    send(rt, interpreter, &format!("{user} REOPEN_TASK {task}"))
}

/// Sends `<user> DELETE_TASK <task>`.
pub fn delete_task(rt: &Runtime, interpreter: &TestInterpreter, user: &str, task: &str) -> String {
    send(rt, interpreter, &format!("{user} DELETE_TASK {task}"))
}

/// Asserts that `user`'s own listing matches `expected` in order.
pub fn assert_list(rt: &Runtime, interpreter: &TestInterpreter, user: &str, expected: &[&str]) {
    assert_list_as(rt, interpreter, user, user, expected);
}

/// Asserts the listing of `owner`'s tasks as seen by `requester`.
pub fn assert_list_as(
    rt: &Runtime,
    interpreter: &TestInterpreter,
    requester: &str,
    owner: &str,
    expected: &[&str],
) {
    let response = send(rt, interpreter, &format!("{requester} LIST_TASK {owner}"));
    assert_eq!(response, format!("TASKS [{}]", expected.join(", ")));
}
