//! Ownership enforcement on mutating commands.

use super::helpers::{
    TestInterpreter, assert_list, close_task, create_task, delete_task, interpreter, reopen_task,
    runtime,
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
#[case("billy_talent", "rusted_from_the_rain")]
#[case("kino", "mama_i_know_we_are_all_deadly_sick")]
fn non_owner_cannot_close(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
    #[case] user: &str,
    #[case] task: &str,
) -> eyre::Result<()> {
    let rt = runtime?;
    assert_eq!(create_task(&rt, &interpreter, user, task), "CREATED");

    let imposter = format!("{user}_IMPOSTER");
    assert_eq!(close_task(&rt, &interpreter, &imposter, task), "ACCESS_DENIED");

    // The task is untouched: still open, so the owner's reopen is an error.
    assert_eq!(reopen_task(&rt, &interpreter, user, task), "ERROR");
    assert_list(&rt, &interpreter, user, &[task]);
    Ok(())
}

#[rstest]
#[case("queen", "one_vision")]
#[case("jackals", "legacy")]
fn non_owner_cannot_delete(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
    #[case] user: &str,
    #[case] task: &str,
) -> eyre::Result<()> {
    let rt = runtime?;
    assert_eq!(create_task(&rt, &interpreter, user, task), "CREATED");
    assert_eq!(close_task(&rt, &interpreter, user, task), "CLOSED");

    let imposter = format!("{user}_IMPOSTER");
    assert_eq!(delete_task(&rt, &interpreter, &imposter, task), "ACCESS_DENIED");
    assert_list(&rt, &interpreter, user, &[task]);
    Ok(())
}

#[rstest]
#[case("xxx", "taskxxx", "yyy")]
#[case("123", "task123", "321")]
fn non_owner_cannot_reopen(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
    #[case] user: &str,
    #[case] task: &str,
    #[case] other_user: &str,
) -> eyre::Result<()> {
    let rt = runtime?;
    assert_eq!(create_task(&rt, &interpreter, user, task), "CREATED");
    assert_eq!(close_task(&rt, &interpreter, user, task), "CLOSED");

    assert_eq!(reopen_task(&rt, &interpreter, other_user, task), "ACCESS_DENIED");

    // Still closed for the owner, so reopening succeeds.
    assert_eq!(reopen_task(&rt, &interpreter, user, task), "REOPENED");
    Ok(())
}

#[rstest]
fn ownership_is_checked_before_state(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
) -> eyre::Result<()> {
    let rt = runtime?;
    // Open task: deletion would be an ERROR for the owner, but an imposter
    // must get ACCESS_DENIED, never the state rejection.
    assert_eq!(create_task(&rt, &interpreter, "owner", "pending"), "CREATED");
    assert_eq!(
        delete_task(&rt, &interpreter, "intruder", "pending"),
        "ACCESS_DENIED"
    );
    assert_eq!(
        reopen_task(&rt, &interpreter, "intruder", "pending"),
        "ACCESS_DENIED"
    );
    Ok(())
}

#[rstest]
fn unknown_task_is_an_error_not_denied(
    runtime: io::Result<Runtime>,
    interpreter: TestInterpreter,
) -> eyre::Result<()> {
    let rt = runtime?;
    assert_eq!(close_task(&rt, &interpreter, "user1", "ghost"), "ERROR");
    assert_eq!(reopen_task(&rt, &interpreter, "user1", "ghost"), "ERROR");
    assert_eq!(delete_task(&rt, &interpreter, "user1", "ghost"), "ERROR");
    Ok(())
}
