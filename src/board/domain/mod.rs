//! Domain model for the Kanban board.
//!
//! Tasks, their enumerated attributes, the team roster and the ephemeral
//! filter and UI state. No storage or presentation concerns live here.

mod error;
mod filter;
mod ids;
mod labels;
mod roster;
mod task;
mod text;

pub use error::{BoardDomainError, LabelKind, ParseLabelError};
pub use filter::{FilterCriteria, FilterPatch, UiState};
pub use ids::{PersonId, TaskId, TaskTitle};
pub use labels::{Column, DetailedStatus, Priority};
pub use roster::{Person, Roster};
pub use task::{Assignment, NewTask, PersistedTaskData, Task, TaskPatch};
pub use text::{clean_tag, clean_tags, fold_diacritics};
