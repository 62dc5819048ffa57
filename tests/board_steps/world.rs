//! Shared world state for Kanban board BDD scenarios.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use kanban_core::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Column, Roster, Task},
    services::{PersistenceConfig, TaskStore},
};
use mockable::Clock;
use rstest::fixture;

/// Manually advanced clock for scenarios.
#[derive(Debug)]
pub struct ScenarioClock {
    now: Mutex<DateTime<Utc>>,
}

impl ScenarioClock {
    fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 1, 15, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self {
            now: Mutex::new(start),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: TimeDelta) -> Result<(), eyre::Report> {
        let mut now = self
            .now
            .lock()
            .map_err(|err| eyre::eyre!("clock lock poisoned: {err}"))?;
        *now += delta;
        Ok(())
    }
}

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.lock().map(|now| *now).unwrap_or_default()
    }
}

/// Store type used by the BDD world.
pub type TestBoardStore = TaskStore<InMemoryKeyValueStore, ScenarioClock>;

/// Scenario world for Kanban board behaviour tests.
pub struct BoardWorld {
    pub storage: InMemoryKeyValueStore,
    pub clock: Arc<ScenarioClock>,
    pub store: Option<TestBoardStore>,
    pub created: Vec<Task>,
}

impl BoardWorld {
    /// Creates a world with empty storage and no open store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryKeyValueStore::new(),
            clock: Arc::new(ScenarioClock::new()),
            store: None,
            created: Vec::new(),
        }
    }

    /// Opens (or reopens) the store over the world's storage.
    pub fn open(&mut self) {
        self.store = Some(TaskStore::open(
            Arc::new(self.storage.clone()),
            Arc::clone(&self.clock),
            PersistenceConfig::default().without_seed(),
            Roster::default_team(),
        ));
    }

    /// Returns the open store.
    pub fn store(&self) -> Result<&TestBoardStore, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been opened in this scenario"))
    }

    /// Returns the open store mutably.
    pub fn store_mut(&mut self) -> Result<&mut TestBoardStore, eyre::Report> {
        self.store
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board has not been opened in this scenario"))
    }

    /// Returns the task created under `title` in this scenario.
    pub fn created_task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.created
            .iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title} was created"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a column label used in a scenario.
pub fn parse_column(label: &str) -> Result<Column, eyre::Report> {
    Column::try_from(label).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
