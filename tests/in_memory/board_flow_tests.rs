//! End-to-end task flows through the public store API.

use super::helpers::{MemoryStore, TestClock, new_task, open_store, start_time};
use chrono::TimeDelta;
use kanban_core::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Column, DetailedStatus, FilterPatch, PersonId, Priority, TaskPatch},
    services::{BoardIntent, MoveOutcome, PersistenceConfig, Transition},
};
use rstest::{fixture, rstest};
use std::sync::Arc;

struct Board {
    clock: Arc<TestClock>,
    store: MemoryStore,
}

#[fixture]
fn board() -> Board {
    let clock = Arc::new(TestClock::at(start_time()));
    let store = open_store(
        &InMemoryKeyValueStore::new(),
        &clock,
        PersistenceConfig::default().without_seed(),
    );
    Board { clock, store }
}

#[rstest]
fn task_moves_across_the_whole_board(mut board: Board) {
    let task = board.store.create(new_task("Task A", Column::ToDo));

    for column in [Column::InProgress, Column::Done] {
        board.clock.advance(TimeDelta::minutes(1));
        let before = board
            .store
            .task(task.id())
            .map(|t| t.updated_at())
            .expect("task exists");

        let outcome = board
            .store
            .move_task(task.id(), column)
            .expect("task exists");

        assert_eq!(outcome, MoveOutcome::Moved);
        let view = board.store.board();
        for other in Column::ALL {
            assert_eq!(view.column(other).contains_title("Task A"), other == column);
        }
        let after = board
            .store
            .task(task.id())
            .map(|t| t.updated_at())
            .expect("task exists");
        assert!(after > before);
    }
}

#[rstest]
fn presentation_can_drive_the_store_through_dispatch(mut board: Board) {
    let task = board.store.create(new_task("Dispatched", Column::ToDo));
    let at = start_time() + TimeDelta::hours(2);

    let transition = board.store.dispatch(BoardIntent::MoveTask {
        id: task.id().clone(),
        column: Column::InProgress,
        at,
    });
    assert_eq!(transition, Transition::TasksChanged);

    let transition = board.store.dispatch(BoardIntent::OpenModal);
    assert_eq!(transition, Transition::ViewChanged);
    assert!(board.store.ui().is_modal_open);

    let moved = board.store.task(task.id()).expect("task exists");
    assert_eq!(moved.column(), Column::InProgress);
    assert_eq!(moved.updated_at(), at);
}

#[rstest]
fn filters_narrow_every_column(mut board: Board) {
    let joao = PersonId::new("u-joao").expect("valid id");
    let paulo = PersonId::new("u-paulo").expect("valid id");
    board.store.create(
        new_task("Motor", Column::InProgress)
            .with_responsible(joao.clone())
            .with_detailed_status(DetailedStatus::AwaitingParts)
            .with_tags(["engenharia", "urgente"]),
    );
    board.store.create(
        new_task("Valve", Column::ToDo)
            .with_responsible(paulo)
            .with_priority(Priority::High),
    );
    board
        .store
        .create(new_task("Report", Column::Done).with_responsible(joao.clone()));

    board
        .store
        .set_filters(FilterPatch::new().responsible(Some(joao)));
    let view = board.store.board();
    assert!(view.column(Column::ToDo).is_empty());
    assert!(view.column(Column::InProgress).contains_title("Motor"));
    assert!(view.column(Column::Done).contains_title("Report"));

    board
        .store
        .set_filters(FilterPatch::new().detailed_status(Some(DetailedStatus::AwaitingParts)));
    assert_eq!(board.store.board().visible_count(), 1);

    board.store.clear_filters();
    assert_eq!(board.store.board().visible_count(), 3);
}

#[rstest]
fn edits_survive_a_reopen() {
    let storage = InMemoryKeyValueStore::new();
    let clock = Arc::new(TestClock::at(start_time()));
    let config = PersistenceConfig::default().without_seed();
    let mut store = open_store(&storage, &clock, config.clone());

    let task = store.create(new_task("Draft title", Column::ToDo));
    clock.advance(TimeDelta::minutes(3));
    let assignment = store.assignment(PersonId::new("u-carlos"));
    store
        .update(
            task.id(),
            TaskPatch::new()
                .with_title("Final title")
                .expect("valid title")
                .with_description("details")
                .with_responsible(assignment)
                .with_due_date(Some(start_time() + TimeDelta::days(7))),
        )
        .expect("task exists");

    let reopened = open_store(&storage, &clock, config);
    let restored = reopened.task(task.id()).expect("task persisted");
    assert_eq!(restored.title().as_str(), "Final title");
    assert_eq!(restored.description(), "details");
    assert_eq!(restored.responsible_name(), "Carlos");
    assert_eq!(restored.due_date(), Some(start_time() + TimeDelta::days(7)));
    assert_eq!(restored.updated_at(), start_time() + TimeDelta::minutes(3));
}

#[rstest]
fn deleted_tasks_stay_deleted(mut board: Board) {
    let task = board.store.create(new_task("Temporary", Column::ToDo));
    assert!(board.store.delete(task.id()));
    assert!(!board.store.delete(task.id()));
    assert!(board.store.task(task.id()).is_none());
    assert!(board.store.board().column(Column::ToDo).is_empty());
}
