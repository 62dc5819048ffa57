//! Given steps for Kanban board BDD scenarios.

use super::world::{BoardWorld, parse_column};
use kanban_core::board::{adapters::memory::InMemoryKeyValueStore, domain::NewTask};
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.open();
}

#[given(r#"stored board content "{raw}""#)]
fn stored_board_content(world: &mut BoardWorld, raw: String) {
    world.storage = InMemoryKeyValueStore::with_entry("kanban_tasks", raw);
}

#[given(r#"a task "{title}" created in column "{column}""#)]
fn task_created(
    world: &mut BoardWorld,
    title: String,
    column: String,
) -> Result<(), eyre::Report> {
    let input = NewTask::new(title, parse_column(&column)?)?;
    let task = world.store_mut()?.create(input);
    world.created.push(task);
    Ok(())
}

#[given(r#"a tagged task "{title}" with tag "{tag}" in column "{column}""#)]
fn tagged_task_created(
    world: &mut BoardWorld,
    title: String,
    tag: String,
    column: String,
) -> Result<(), eyre::Report> {
    let input = NewTask::new(title, parse_column(&column)?)?.with_tags([tag]);
    let task = world.store_mut()?.create(input);
    world.created.push(task);
    Ok(())
}
