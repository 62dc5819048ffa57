//! Shared helpers for in-memory integration tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use kanban_core::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Column, NewTask, Roster},
    services::{PersistenceConfig, TaskStore},
};
use mockable::Clock;
use std::sync::{Arc, Mutex};

/// Store type used by the integration tests.
pub type MemoryStore = TaskStore<InMemoryKeyValueStore, TestClock>;

/// Manually advanced clock.
#[derive(Debug)]
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl TestClock {
    /// Creates a clock frozen at `start`.
    pub fn at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().expect("clock lock");
        *now += delta;
    }
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock")
    }
}

/// Fixed starting instant for deterministic timestamps.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 8, 30, 0)
        .single()
        .expect("valid start time")
}

/// Opens a store over `storage` with the given configuration.
pub fn open_store(
    storage: &InMemoryKeyValueStore,
    clock: &Arc<TestClock>,
    config: PersistenceConfig,
) -> MemoryStore {
    TaskStore::open(
        Arc::new(storage.clone()),
        Arc::clone(clock),
        config,
        Roster::default_team(),
    )
}

/// Builds creation input, panicking on an invalid title.
pub fn new_task(title: &str, column: Column) -> NewTask {
    NewTask::new(title, column).expect("valid task input")
}
