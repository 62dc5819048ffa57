//! Persistence adapter: hydrates the board from its storage slot and mirrors
//! every change back to it.

use super::{
    PersistenceConfig,
    snapshot::{self, Decoded},
};
use crate::board::{
    domain::{
        Column, DetailedStatus, PersistedTaskData, PersonId, Priority, Roster, Task, TaskId,
        TaskTitle,
    },
    ports::{KeyValueStore, StorageError},
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Where the tasks returned by [`TaskPersistence::load`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the storage slot.
    Stored,
    /// The slot was empty and the example task was substituted.
    Seeded,
    /// The slot was empty and seeding is disabled.
    Empty,
    /// The slot could not be read or parsed; the board starts empty.
    Recovered,
}

/// Summary of a load, kept by the store for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Origin of the loaded tasks.
    pub source: LoadSource,
    /// Done tasks discarded by retention cleanup.
    pub purged: usize,
    /// Stored records dropped because they could not be coerced.
    pub skipped: usize,
}

/// Tasks produced by a load together with its report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Tasks to hydrate the board with, in stored order.
    pub tasks: Vec<Task>,
    /// What happened during the load.
    pub report: LoadReport,
}

/// Errors returned when saving the board snapshot.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    /// A save was attempted before the initial load completed.
    #[error("board snapshot not loaded yet; refusing to overwrite storage")]
    NotLoaded,

    /// The task list could not be serialized.
    #[error("failed to serialize board snapshot: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// The storage backend rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Loads and saves the task list through a [`KeyValueStore`].
pub struct TaskPersistence<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: PersistenceConfig,
    roster: Roster,
    loaded: AtomicBool,
}

impl<S, C> TaskPersistence<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Creates a persistence adapter over the default team roster. Saves
    /// are refused until [`Self::load`] has run.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>, config: PersistenceConfig) -> Self {
        Self {
            storage,
            clock,
            config,
            roster: Roster::default_team(),
            loaded: AtomicBool::new(false),
        }
    }

    /// Replaces the roster used to name people in the first-run seed.
    #[must_use]
    pub fn with_roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    /// Returns the clock shared with the store.
    #[must_use]
    pub fn clock(&self) -> Arc<C> {
        Arc::clone(&self.clock)
    }

    /// Returns `true` once [`Self::load`] has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Reads the stored task list and applies retention cleanup.
    ///
    /// Never fails: an unreadable or unparseable slot is logged and yields
    /// an empty board. Marks the adapter as loaded, enabling saves.
    pub fn load(&self) -> LoadOutcome {
        let now = self.clock.utc();
        let key = self.config.storage_key.as_str();

        let (raw_tasks, source, skipped) = match self.storage.read(key) {
            Ok(Some(raw)) => match snapshot::decode(&raw, now) {
                Ok(Decoded { tasks, rejected }) => {
                    for reason in &rejected {
                        warn!(event = "board_load", key, error = %reason, "skipping stored record");
                    }
                    (tasks, LoadSource::Stored, rejected.len())
                }
                Err(err) => {
                    error!(event = "board_load", key, error = %err, "stored board is not valid JSON; starting empty");
                    (Vec::new(), LoadSource::Recovered, 0)
                }
            },
            Ok(None) if self.config.seed_on_first_run => {
                (seed_tasks(now, &self.roster), LoadSource::Seeded, 0)
            }
            Ok(None) => (Vec::new(), LoadSource::Empty, 0),
            Err(err) => {
                error!(event = "board_load", key, error = %err, "storage unreadable; starting empty");
                (Vec::new(), LoadSource::Recovered, 0)
            }
        };

        let before = raw_tasks.len();
        let tasks = apply_retention(raw_tasks, now, self.config.retention_days);
        let purged = before.saturating_sub(tasks.len());

        self.loaded.store(true, Ordering::Release);
        let report = LoadReport {
            source,
            purged,
            skipped,
        };
        info!(
            event = "board_load",
            key,
            source = ?report.source,
            tasks = tasks.len(),
            purged,
            skipped,
            "board hydrated"
        );
        LoadOutcome { tasks, report }
    }

    /// Overwrites the storage slot with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::NotLoaded`] before the initial load,
    /// [`PersistenceError::Serialization`] when encoding fails, or
    /// [`PersistenceError::Storage`] when the backend rejects the write.
    pub fn save(&self, tasks: &[Task]) -> PersistenceResult<()> {
        if !self.is_loaded() {
            return Err(PersistenceError::NotLoaded);
        }
        let encoded =
            snapshot::encode(tasks).map_err(|err| PersistenceError::Serialization(Arc::new(err)))?;
        self.storage.write(&self.config.storage_key, &encoded)?;
        debug!(event = "board_save", key = %self.config.storage_key, tasks = tasks.len(), "board persisted");
        Ok(())
    }
}

/// Discards Done tasks whose last update is older than the retention window.
///
/// A task updated exactly `retention_days` ago is kept. Tasks in other
/// columns are never discarded. Order is preserved.
#[must_use]
pub fn apply_retention(tasks: Vec<Task>, now: DateTime<Utc>, retention_days: u32) -> Vec<Task> {
    let Some(cutoff) = TimeDelta::try_days(i64::from(retention_days))
        .and_then(|window| now.checked_sub_signed(window))
    else {
        return tasks;
    };
    tasks
        .into_iter()
        .filter(|task| !(task.column() == Column::Done && task.updated_at() < cutoff))
        .collect()
}

/// Example task substituted on a first run so the board is not empty.
///
/// The responsible party's name is resolved from `roster`; it is empty when
/// the roster does not know the seed's person.
#[must_use]
pub fn seed_tasks(now: DateTime<Utc>, roster: &Roster) -> Vec<Task> {
    let responsible_id = PersonId::new("u-joao");
    let responsible_name = responsible_id
        .as_ref()
        .map(|id| roster.display_name(id))
        .unwrap_or_default();

    TaskTitle::new("Trocar servo motor")
        .map(|title| {
            Task::from_persisted(PersistedTaskData {
                id: TaskId::new(),
                title,
                description: "necessário trocar o motor".to_owned(),
                column: Column::InProgress,
                detailed_status: Some(DetailedStatus::AwaitingParts),
                priority: Priority::Medium,
                responsible_id,
                responsible_name,
                tags: vec!["engenharia".to_owned(), "urgente".to_owned()],
                due_date: None,
                created_at: now,
                updated_at: now,
            })
        })
        .into_iter()
        .collect()
}
