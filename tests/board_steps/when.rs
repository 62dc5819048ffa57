//! When steps for Kanban board BDD scenarios.

use super::world::{BoardWorld, parse_column};
use chrono::TimeDelta;
use eyre::WrapErr;
use kanban_core::board::domain::FilterPatch;
use rstest_bdd_macros::when;

#[when(r#"the task "{title}" is moved to column "{column}""#)]
fn task_moved(world: &mut BoardWorld, title: String, column: String) -> Result<(), eyre::Report> {
    let id = world.created_task(&title)?.id().clone();
    let destination = parse_column(&column)?;
    world.clock.advance(TimeDelta::seconds(1))?;
    world
        .store_mut()?
        .move_task(&id, destination)
        .wrap_err("move task in scenario")?;
    Ok(())
}

#[when(r#"the board is filtered by tag "{tag}""#)]
fn filtered_by_tag(world: &mut BoardWorld, tag: String) -> Result<(), eyre::Report> {
    world
        .store_mut()?
        .set_filters(FilterPatch::new().tag(Some(tag.as_str())));
    Ok(())
}

#[when("the board is opened")]
fn board_opened(world: &mut BoardWorld) {
    world.open();
}

#[when("{days:u64} days pass and the board is reopened")]
fn days_pass(world: &mut BoardWorld, days: u64) -> Result<(), eyre::Report> {
    let days = i64::try_from(days).wrap_err("day count fits in i64")?;
    world.clock.advance(TimeDelta::days(days))?;
    world.open();
    Ok(())
}
