//! Load-time behaviour: seeding, retention and recovery.

use super::helpers::{TestClock, new_task, open_store, start_time};
use chrono::TimeDelta;
use kanban_core::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::Column,
    ports::KeyValueStore,
    services::{LoadSource, PersistenceConfig},
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn first_run_shows_the_example_task() {
    let storage = InMemoryKeyValueStore::new();
    let clock = Arc::new(TestClock::at(start_time()));

    let store = open_store(&storage, &clock, PersistenceConfig::default());

    assert_eq!(store.load_report().source, LoadSource::Seeded);
    assert!(
        store
            .board()
            .column(Column::InProgress)
            .contains_title("Trocar servo motor")
    );
    let stored = storage
        .read("kanban_tasks")
        .expect("read succeeds")
        .expect("seed written back");
    assert!(stored.contains("Trocar servo motor"));

    let reopened = open_store(&storage, &clock, PersistenceConfig::default());
    assert_eq!(reopened.load_report().source, LoadSource::Stored);
    assert_eq!(reopened.tasks(), store.tasks());
}

#[rstest]
#[case(29, 1)]
#[case(30, 1)]
#[case(31, 0)]
fn done_tasks_expire_after_thirty_days(#[case] days: i64, #[case] remaining: usize) {
    let storage = InMemoryKeyValueStore::new();
    let clock = Arc::new(TestClock::at(start_time()));
    let config = PersistenceConfig::default().without_seed();
    {
        let mut store = open_store(&storage, &clock, config.clone());
        let task = store.create(new_task("Shipped", Column::ToDo));
        store
            .move_task(task.id(), Column::Done)
            .expect("task exists");
    }
    clock.advance(TimeDelta::days(days));

    let store = open_store(&storage, &clock, config);

    assert_eq!(store.tasks().len(), remaining);
}

#[rstest]
fn corrupted_storage_yields_an_empty_board() {
    let storage = InMemoryKeyValueStore::with_entry("kanban_tasks", "][ definitely not json");
    let clock = Arc::new(TestClock::at(start_time()));

    let store = open_store(&storage, &clock, PersistenceConfig::default());

    assert_eq!(store.load_report().source, LoadSource::Recovered);
    assert!(store.tasks().is_empty());
    assert_eq!(store.board().visible_count(), 0);
}
