//! Then steps for Kanban board BDD scenarios.

use super::world::{BoardWorld, parse_column};
use rstest_bdd_macros::then;

#[then(r#"column "{column}" shows "{title}""#)]
fn column_shows(world: &BoardWorld, column: String, title: String) -> Result<(), eyre::Report> {
    let board = world.store()?.board();
    if !board.column(parse_column(&column)?).contains_title(&title) {
        return Err(eyre::eyre!("expected {title} in column {column}"));
    }
    Ok(())
}

#[then(r#"column "{column}" does not show "{title}""#)]
fn column_does_not_show(
    world: &BoardWorld,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let board = world.store()?.board();
    if board.column(parse_column(&column)?).contains_title(&title) {
        return Err(eyre::eyre!("did not expect {title} in column {column}"));
    }
    Ok(())
}

#[then(r#"the task "{title}" was updated after it was created"#)]
fn task_updated_after_creation(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let created = world.created_task(&title)?;
    let current = world
        .store()?
        .task(created.id())
        .ok_or_else(|| eyre::eyre!("task {title} is no longer on the board"))?;
    if current.updated_at() <= created.created_at() {
        return Err(eyre::eyre!(
            "expected updated_at {} to be after created_at {}",
            current.updated_at(),
            created.created_at()
        ));
    }
    Ok(())
}

#[then("the board has {count:u64} tasks")]
fn board_has_tasks(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.store()?.tasks().len())?;
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}
