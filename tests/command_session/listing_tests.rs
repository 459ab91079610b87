//! Per-user listings and cross-user reads.

use super::helpers::{
    TestInterpreter, assert_list, assert_list_as, close_task, create_task, interpreter, runtime,
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
fn listings_are_scoped_per_user(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
) -> eyre::Result<()> {
    let rt = runtime?;
    for task in ["task1", "task2"] {
        assert_eq!(create_task(&rt, &interpreter, "user1", task), "CREATED");
    }
    for task in ["task56", "another_one", "a_perfect_circle"] {
        assert_eq!(create_task(&rt, &interpreter, "user2", task), "CREATED");
    }

    assert_list(&rt, &interpreter, "user1", &["task1", "task2"]);
    assert_list(
        &rt,
        &interpreter,
        "user2",
        &["task56", "another_one", "a_perfect_circle"],
    );
    Ok(())
}

#[rstest]
fn unknown_user_lists_empty(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
) -> eyre::Result<()> {
    let rt = runtime?;
    assert_list(&rt, &interpreter, "nobody", &[]);
    Ok(())
}

#[rstest]
#[case("u1", &["task_u1", "task_u2", "task_u3"], "other_u")]
#[case("000", &["t000", "t002", "t003"], "007")]
#[case("xyz", &["abc", "def", "ghy"], "xyzxyz")]
fn anyone_may_list_another_users_tasks(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
    #[case] owner: &str,
    #[case] tasks: &[&str],
    #[case] reader: &str,
) -> eyre::Result<()> {
    let rt = runtime?;
    for task in tasks {
        assert_eq!(create_task(&rt, &interpreter, owner, task), "CREATED");
    }
    if let Some(second) = tasks.get(1) {
        assert_eq!(close_task(&rt, &interpreter, owner, second), "CLOSED");
    }

    // Closed tasks stay listed, and a non-owner sees the same view.
    assert_list(&rt, &interpreter, owner, tasks);
    assert_list_as(&rt, &interpreter, reader, owner, tasks);
    Ok(())
}
