//! Task store: the single owner of board state.
//!
//! Every mutation goes through [`reduce`]; changes to the task list are then
//! mirrored to storage. A failed save is logged and the in-memory change
//! stands for the rest of the session.

use super::{
    BoardIntent, BoardState, LoadReport, LoadSource, PersistenceConfig, TaskPersistence,
    Transition,
    query::{self, BoardView},
    reduce,
};
use crate::board::{
    domain::{
        Assignment, Column, FilterCriteria, FilterPatch, NewTask, PersonId, Roster, Task, TaskId,
        TaskPatch, UiState,
    },
    ports::KeyValueStore,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors signalled by store operations that reference a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// No task has the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Result of a successful move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task changed column and its timestamp was refreshed.
    Moved,
    /// The task was already in the destination column.
    Unchanged,
}

/// Owns the board state and dispatches intents against it.
pub struct TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    state: BoardState,
    persistence: TaskPersistence<S, C>,
    clock: Arc<C>,
    roster: Roster,
    load_report: LoadReport,
}

impl<S, C> TaskStore<S, C>
where
    S: KeyValueStore,
    C: Clock + Send + Sync,
{
    /// Opens the board: loads the stored tasks (with retention cleanup),
    /// hydrates the state from them and writes the cleaned list back.
    #[must_use]
    pub fn open(storage: Arc<S>, clock: Arc<C>, config: PersistenceConfig, roster: Roster) -> Self {
        let persistence =
            TaskPersistence::new(storage, Arc::clone(&clock), config).with_roster(roster);
        Self::from_persistence(persistence)
    }

    /// Opens the board over an existing persistence adapter, sharing its
    /// roster.
    #[must_use]
    pub fn from_persistence(persistence: TaskPersistence<S, C>) -> Self {
        let outcome = persistence.load();
        let clock = persistence.clock();
        let roster = persistence.roster().clone();
        let (state, _) = reduce(BoardState::default(), BoardIntent::SetTasks(outcome.tasks));
        let store = Self {
            state,
            persistence,
            clock,
            roster,
            load_report: outcome.report,
        };
        // Storage holding records that could not be read is left as is
        // until the first real change.
        let report = store.load_report;
        if report.source != LoadSource::Recovered && report.skipped == 0 {
            store.persist();
        }
        store
    }

    /// Applies `intent` and persists the task list when it changed.
    pub fn dispatch(&mut self, intent: BoardIntent) -> Transition {
        let name = intent.name();
        let current = std::mem::take(&mut self.state);
        let (next, transition) = reduce(current, intent);
        self.state = next;
        match &transition {
            Transition::NotFound(id) => {
                warn!(event = "board_intent", intent = name, task_id = %id, "task not found; intent ignored");
            }
            Transition::Duplicate(id) => {
                warn!(event = "board_intent", intent = name, task_id = %id, "task id already on the board; intent ignored");
            }
            _ => debug!(event = "board_intent", intent = name, transition = ?transition, "intent applied"),
        }

        if transition.persists() {
            self.persist();
        }
        transition
    }

    fn persist(&self) {
        if let Err(err) = self.persistence.save(&self.state.tasks) {
            warn!(event = "board_save", error = %err, "failed to persist board; change kept in memory");
        }
    }

    /// Creates a task from validated input and places it first on the board.
    pub fn create(&mut self, input: NewTask) -> Task {
        let task = Task::new(input, &self.roster, &*self.clock);
        self.dispatch(BoardIntent::AddTask(task.clone()));
        task
    }

    /// Merges `patch` over the task with `id` and refreshes its timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`; the state
    /// is left untouched.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> TaskStoreResult<Task> {
        let at = self.clock.utc();
        let intent = BoardIntent::UpdateTask {
            id: id.clone(),
            patch,
            at,
        };
        match self.dispatch(intent) {
            Transition::NotFound(missing) => Err(TaskStoreError::NotFound(missing)),
            _ => self.require(id).cloned(),
        }
    }

    /// Moves the task with `id` to `column`.
    ///
    /// Moving to the column the task is already in changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has `id`.
    pub fn move_task(&mut self, id: &TaskId, column: Column) -> TaskStoreResult<MoveOutcome> {
        let at = self.clock.utc();
        let intent = BoardIntent::MoveTask {
            id: id.clone(),
            column,
            at,
        };
        match self.dispatch(intent) {
            Transition::NotFound(missing) => Err(TaskStoreError::NotFound(missing)),
            Transition::TasksChanged => Ok(MoveOutcome::Moved),
            _ => Ok(MoveOutcome::Unchanged),
        }
    }

    /// Deletes the task with `id`. Returns whether a task was removed;
    /// deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        self.dispatch(BoardIntent::DeleteTask(id.clone())).persists()
    }

    /// Merges filter criteria.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.dispatch(BoardIntent::SetFilters(patch));
    }

    /// Resets every filter criterion.
    pub fn clear_filters(&mut self) {
        self.dispatch(BoardIntent::ClearFilters);
    }

    /// Opens the task-creation modal.
    pub fn open_modal(&mut self) {
        self.dispatch(BoardIntent::OpenModal);
    }

    /// Closes the task-creation modal.
    pub fn close_modal(&mut self) {
        self.dispatch(BoardIntent::CloseModal);
    }

    /// Builds a responsible-party change resolved against this store's
    /// roster; `None` clears the assignment.
    #[must_use]
    pub fn assignment(&self, id: Option<PersonId>) -> Assignment {
        id.map_or_else(Assignment::nobody, |person| {
            Assignment::to(person, &self.roster)
        })
    }

    fn require(&self, id: &TaskId) -> TaskStoreResult<&Task> {
        self.state
            .task(id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))
    }

    /// Returns the full state.
    #[must_use]
    pub const fn state(&self) -> &BoardState {
        &self.state
    }

    /// Returns every task, most recently created first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.state.task(id)
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.state.filters
    }

    /// Returns the presentation state.
    #[must_use]
    pub const fn ui(&self) -> UiState {
        self.state.ui
    }

    /// Returns the roster used for name resolution.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns what happened when the board was loaded.
    #[must_use]
    pub const fn load_report(&self) -> LoadReport {
        self.load_report
    }

    /// Returns the filtered, per-column projection for rendering.
    #[must_use]
    pub fn board(&self) -> BoardView<'_> {
        query::project_board(&self.state.tasks, &self.state.filters)
    }
}
