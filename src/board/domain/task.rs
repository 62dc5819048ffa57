//! Task aggregate root and its creation and patch payloads.

use super::{
    BoardDomainError, Column, DetailedStatus, PersonId, Priority, Roster, TaskId, TaskTitle,
    clean_tags,
};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    column: Column,
    detailed_status: Option<DetailedStatus>,
    priority: Priority,
    responsible_id: Option<PersonId>,
    responsible_name: String,
    tags: Vec<String>,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted column.
    pub column: Column,
    /// Persisted detailed status, if any.
    pub detailed_status: Option<DetailedStatus>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted responsible-party identifier, if any.
    pub responsible_id: Option<PersonId>,
    /// Persisted responsible-party display name.
    pub responsible_name: String,
    /// Persisted tags.
    pub tags: Vec<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from validated input.
    ///
    /// Both timestamps are set to the current clock time and the responsible
    /// party's display name is resolved from `roster`.
    #[must_use]
    pub fn new(input: NewTask, roster: &Roster, clock: &impl Clock) -> Self {
        let timestamp = stamp(clock.utc());
        let responsible_name = input
            .responsible_id
            .as_ref()
            .map(|id| roster.display_name(id))
            .unwrap_or_default();

        Self {
            id: TaskId::new(),
            title: input.title,
            description: input.description.trim().to_owned(),
            column: input.column,
            detailed_status: input.detailed_status,
            priority: input.priority,
            responsible_id: input.responsible_id,
            responsible_name,
            tags: clean_tags(input.tags),
            due_date: input.due_date.map(stamp),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// Tags are re-cleaned and an `updated_at` earlier than `created_at` is
    /// raised to `created_at`.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            column: data.column,
            detailed_status: data.detailed_status,
            priority: data.priority,
            responsible_id: data.responsible_id,
            responsible_name: data.responsible_name,
            tags: clean_tags(data.tags),
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at.max(data.created_at),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the board column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the detailed status, if set.
    #[must_use]
    pub const fn detailed_status(&self) -> Option<DetailedStatus> {
        self.detailed_status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the responsible-party identifier, if set.
    #[must_use]
    pub const fn responsible_id(&self) -> Option<&PersonId> {
        self.responsible_id.as_ref()
    }

    /// Returns the responsible-party display name, empty when unassigned.
    #[must_use]
    pub fn responsible_name(&self) -> &str {
        &self.responsible_name
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges the supplied fields over this task and refreshes `updated_at`.
    pub fn apply_patch(&mut self, patch: TaskPatch, at: DateTime<Utc>) {
        let TaskPatch {
            title,
            description,
            column,
            detailed_status,
            priority,
            responsible,
            tags,
            due_date,
        } = patch;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = column {
            self.column = value;
        }
        if let Some(value) = detailed_status {
            self.detailed_status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(assignment) = responsible {
            self.responsible_id = assignment.id;
            self.responsible_name = assignment.name;
        }
        if let Some(value) = tags {
            self.tags = value;
        }
        if let Some(value) = due_date {
            self.due_date = value.map(stamp);
        }
        self.touch(at);
    }

    /// Moves the task to another column.
    ///
    /// Returns `false`, leaving the task untouched, when it is already in
    /// `column`.
    pub fn move_to(&mut self, column: Column, at: DateTime<Utc>) -> bool {
        if self.column == column {
            return false;
        }
        self.column = column;
        self.touch(at);
        true
    }

    /// Updates `updated_at`, never moving it backwards.
    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = stamp(at).max(self.updated_at);
    }
}

/// Truncates to the millisecond precision the stored snapshot keeps.
fn stamp(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(3)
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    column: Column,
    description: String,
    detailed_status: Option<DetailedStatus>,
    priority: Priority,
    responsible_id: Option<PersonId>,
    tags: Vec<String>,
    due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates creation input with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, column: Column) -> Result<Self, BoardDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            column,
            description: String::new(),
            detailed_status: None,
            priority: Priority::default(),
            responsible_id: None,
            tags: Vec::new(),
            due_date: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the detailed status.
    #[must_use]
    pub const fn with_detailed_status(mut self, status: DetailedStatus) -> Self {
        self.detailed_status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the responsible party.
    #[must_use]
    pub fn with_responsible(mut self, id: PersonId) -> Self {
        self.responsible_id = Some(id);
        self
    }

    /// Sets the tags. Entries are trimmed and blanks dropped on creation.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Responsible-party change carried by a [`TaskPatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    id: Option<PersonId>,
    name: String,
}

impl Assignment {
    /// Assigns `id`, resolving its display name from `roster`.
    #[must_use]
    pub fn to(id: PersonId, roster: &Roster) -> Self {
        let name = roster.display_name(&id);
        Self { id: Some(id), name }
    }

    /// Clears the responsible party.
    #[must_use]
    pub const fn nobody() -> Self {
        Self {
            id: None,
            name: String::new(),
        }
    }

    /// Returns the assigned identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&PersonId> {
        self.id.as_ref()
    }

    /// Returns the resolved display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Partial set of task fields to merge over an existing task.
///
/// Fields left unset keep their current value. Optional task fields use a
/// nested `Option` so they can be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<TaskTitle>,
    description: Option<String>,
    column: Option<Column>,
    detailed_status: Option<Option<DetailedStatus>>,
    priority: Option<Priority>,
    responsible: Option<Assignment>,
    tags: Option<Vec<String>>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is blank.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        self.title = Some(TaskTitle::new(title)?);
        Ok(self)
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into().trim().to_owned());
        self
    }

    /// Replaces the column.
    #[must_use]
    pub const fn with_column(mut self, column: Column) -> Self {
        self.column = Some(column);
        self
    }

    /// Sets or clears the detailed status.
    #[must_use]
    pub const fn with_detailed_status(mut self, status: Option<DetailedStatus>) -> Self {
        self.detailed_status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the responsible party.
    #[must_use]
    pub fn with_responsible(mut self, assignment: Assignment) -> Self {
        self.responsible = Some(assignment);
        self
    }

    /// Replaces the tags, trimming entries and dropping blanks.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = Some(clean_tags(tags));
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.column.is_none()
            && self.detailed_status.is_none()
            && self.priority.is_none()
            && self.responsible.is_none()
            && self.tags.is_none()
            && self.due_date.is_none()
    }
}
