//! Board state, the closed set of intents and the pure transition function.

use crate::board::domain::{Column, FilterCriteria, FilterPatch, Task, TaskId, TaskPatch, UiState};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Tasks, most recently created first.
    pub tasks: Vec<Task>,
    /// Active filter criteria.
    pub filters: FilterCriteria,
    /// Presentation state.
    pub ui: UiState,
}

impl BoardState {
    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }
}

/// Tagged mutation request applied by [`reduce`].
///
/// Timestamps travel inside the intent so the transition stays a pure
/// function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardIntent {
    /// Replace the whole task list (hydration).
    SetTasks(Vec<Task>),
    /// Prepend a newly created task.
    AddTask(Task),
    /// Merge fields over an existing task.
    UpdateTask {
        /// Task to update.
        id: TaskId,
        /// Fields to merge.
        patch: TaskPatch,
        /// Mutation time.
        at: DateTime<Utc>,
    },
    /// Move a task to another column.
    MoveTask {
        /// Task to move.
        id: TaskId,
        /// Destination column.
        column: Column,
        /// Mutation time.
        at: DateTime<Utc>,
    },
    /// Remove a task.
    DeleteTask(TaskId),
    /// Merge filter criteria.
    SetFilters(FilterPatch),
    /// Reset all filter criteria.
    ClearFilters,
    /// Open the task-creation modal.
    OpenModal,
    /// Close the task-creation modal.
    CloseModal,
}

impl BoardIntent {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetTasks(_) => "set_tasks",
            Self::AddTask(_) => "add_task",
            Self::UpdateTask { .. } => "update_task",
            Self::MoveTask { .. } => "move_task",
            Self::DeleteTask(_) => "delete_task",
            Self::SetFilters(_) => "set_filters",
            Self::ClearFilters => "clear_filters",
            Self::OpenModal => "open_modal",
            Self::CloseModal => "close_modal",
        }
    }
}

/// What an intent did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The task list changed and should be persisted.
    TasksChanged,
    /// Only filters or UI state changed.
    ViewChanged,
    /// The intent was valid but changed nothing.
    Unchanged,
    /// The referenced task does not exist; nothing changed.
    NotFound(TaskId),
    /// A task with the same identifier already exists; nothing changed.
    Duplicate(TaskId),
}

impl Transition {
    /// Returns `true` when the task list must be written back to storage.
    #[must_use]
    pub const fn persists(&self) -> bool {
        matches!(self, Self::TasksChanged)
    }
}

/// Applies `intent` to `state`, producing the next state.
#[must_use]
pub fn reduce(mut state: BoardState, intent: BoardIntent) -> (BoardState, Transition) {
    let transition = match intent {
        BoardIntent::SetTasks(tasks) => {
            state.tasks = dedupe(tasks);
            Transition::TasksChanged
        }
        BoardIntent::AddTask(task) => {
            if state.task(task.id()).is_some() {
                Transition::Duplicate(task.id().clone())
            } else {
                state.tasks.insert(0, task);
                Transition::TasksChanged
            }
        }
        BoardIntent::UpdateTask { id, patch, at } => match find_mut(&mut state.tasks, &id) {
            Some(task) => {
                task.apply_patch(patch, at);
                Transition::TasksChanged
            }
            None => Transition::NotFound(id),
        },
        BoardIntent::MoveTask { id, column, at } => match find_mut(&mut state.tasks, &id) {
            Some(task) => {
                if task.move_to(column, at) {
                    Transition::TasksChanged
                } else {
                    Transition::Unchanged
                }
            }
            None => Transition::NotFound(id),
        },
        BoardIntent::DeleteTask(id) => {
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id() != &id);
            if state.tasks.len() == before {
                Transition::NotFound(id)
            } else {
                Transition::TasksChanged
            }
        }
        BoardIntent::SetFilters(patch) => {
            state.filters.apply(patch);
            Transition::ViewChanged
        }
        BoardIntent::ClearFilters => {
            state.filters = FilterCriteria::default();
            Transition::ViewChanged
        }
        BoardIntent::OpenModal => set_modal(&mut state.ui, true),
        BoardIntent::CloseModal => set_modal(&mut state.ui, false),
    };
    (state, transition)
}

fn find_mut<'a>(tasks: &'a mut [Task], id: &TaskId) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|task| task.id() == id)
}

fn set_modal(ui: &mut UiState, open: bool) -> Transition {
    if ui.is_modal_open == open {
        return Transition::Unchanged;
    }
    ui.is_modal_open = open;
    Transition::ViewChanged
}

/// Keeps the first occurrence of every identifier.
fn dedupe(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| seen.insert(task.id().clone()))
        .collect()
}
