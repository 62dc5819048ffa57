//! Query engine deriving the visible, per-column projection of the board.
//!
//! Every function here is pure: the output depends only on the task slice
//! and the filter criteria, and tasks keep their collection order.

use crate::board::domain::{Column, FilterCriteria, Task, fold_diacritics};

/// Folds text for tag search: accents stripped, lower-cased.
#[must_use]
pub fn normalize_for_search(value: &str) -> String {
    fold_diacritics(value)
}

/// Returns `true` when `task` satisfies every active criterion.
#[must_use]
pub fn matches(task: &Task, criteria: &FilterCriteria) -> bool {
    let responsible_ok = criteria
        .responsible_id()
        .is_none_or(|id| task.responsible_id() == Some(id));
    let status_ok = criteria
        .detailed_status()
        .is_none_or(|status| task.detailed_status() == Some(status));
    let priority_ok = criteria
        .priority()
        .is_none_or(|priority| task.priority() == priority);
    let tag_ok = criteria.tag().is_none_or(|needle| has_tag_like(task, needle));

    responsible_ok && status_ok && priority_ok && tag_ok
}

fn has_tag_like(task: &Task, needle: &str) -> bool {
    let folded_needle = normalize_for_search(needle);
    task.tags()
        .iter()
        .any(|tag| normalize_for_search(tag).contains(&folded_needle))
}

/// Returns the tasks matching `criteria`, in collection order.
#[must_use]
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    tasks.iter().filter(|task| matches(task, criteria)).collect()
}

/// Returns the tasks in `column` matching `criteria`, in collection order.
#[must_use]
pub fn tasks_in_column<'a>(
    tasks: &'a [Task],
    column: Column,
    criteria: &FilterCriteria,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.column() == column && matches(task, criteria))
        .collect()
}

/// Filtered tasks of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<'a> {
    column: Column,
    tasks: Vec<&'a Task>,
}

impl<'a> ColumnView<'a> {
    /// Returns the column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the visible tasks.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns `true` when nothing is visible, i.e. the "no tasks"
    /// placeholder should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of visible tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when a task with the given title is visible.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title().as_str() == title)
    }
}

/// Per-column projection of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    to_do: ColumnView<'a>,
    in_progress: ColumnView<'a>,
    done: ColumnView<'a>,
}

impl<'a> BoardView<'a> {
    /// Returns the view of `column`.
    #[must_use]
    pub const fn column(&self, column: Column) -> &ColumnView<'a> {
        match column {
            Column::ToDo => &self.to_do,
            Column::InProgress => &self.in_progress,
            Column::Done => &self.done,
        }
    }

    /// Returns every column view in display order.
    #[must_use]
    pub const fn columns(&self) -> [&ColumnView<'a>; 3] {
        [&self.to_do, &self.in_progress, &self.done]
    }

    /// Returns the number of visible tasks across all columns.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.columns().iter().map(|view| view.len()).sum()
    }
}

/// Partitions the matching tasks by column.
#[must_use]
pub fn project_board<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> BoardView<'a> {
    let view_of = |column| ColumnView {
        column,
        tasks: tasks_in_column(tasks, column, criteria),
    };
    BoardView {
        to_do: view_of(Column::ToDo),
        in_progress: view_of(Column::InProgress),
        done: view_of(Column::Done),
    }
}
