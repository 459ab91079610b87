//! When steps for task command BDD scenarios.

use super::world::CommandWorld;
use rstest_bdd_macros::when;

#[when(r#"the line "{line}" is sent"#)]
fn line_is_sent(world: &mut CommandWorld, line: String) {
    let response = world.send(&line);
    world.last_response = Some(response);
}
