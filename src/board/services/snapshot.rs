//! JSON layout of the persisted task list.
//!
//! The slot holds an array of task records with camelCase keys and epoch
//! millisecond timestamps. Reading is lenient: Portuguese keys and labels are
//! accepted, optional fields may be missing, and each record is coerced on
//! its own so one damaged record does not take the rest of the board down.

use crate::board::domain::{
    BoardDomainError, Column, DetailedStatus, ParseLabelError, PersistedTaskData, PersonId,
    Priority, Task, TaskId, TaskTitle,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Stored identifier; older boards wrote numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredId {
    Text(String),
    Number(i64),
}

/// Stored timestamp: epoch milliseconds, or an RFC 3339 / `YYYY-MM-DD`
/// string from hand-edited snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Millis(i64),
    Text(String),
}

impl StoredTimestamp {
    fn from_datetime(value: DateTime<Utc>) -> Self {
        Self::Millis(value.timestamp_millis())
    }

    fn to_datetime(&self) -> Result<DateTime<Utc>, RecordError> {
        match self {
            Self::Millis(millis) => {
                DateTime::from_timestamp_millis(*millis).ok_or(RecordError::InvalidTimestamp)
            }
            Self::Text(text) => parse_text_timestamp(text).ok_or(RecordError::InvalidTimestamp),
        }
    }
}

fn parse_text_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// One task record as written to storage.
///
/// Portuguese keys are read into their own fields so a record carrying both
/// spellings still parses; the English key wins when both are present. They
/// are never written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    #[serde(default)]
    id: Option<StoredId>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detailed_status: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    responsible_id: Option<String>,
    #[serde(default)]
    responsible: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<StoredTimestamp>,
    #[serde(default)]
    created_at: Option<StoredTimestamp>,
    #[serde(default)]
    updated_at: Option<StoredTimestamp>,
    #[serde(default, skip_serializing)]
    titulo: Option<String>,
    #[serde(default, skip_serializing)]
    descricao: Option<String>,
    #[serde(default, skip_serializing)]
    coluna: Option<String>,
    #[serde(default, skip_serializing)]
    status_detalhado: Option<String>,
    #[serde(default, skip_serializing)]
    responsavel_id: Option<String>,
    #[serde(default, skip_serializing)]
    responsavel: Option<String>,
    #[serde(default, skip_serializing)]
    criado_em: Option<StoredTimestamp>,
    #[serde(default, skip_serializing)]
    atualizado_em: Option<StoredTimestamp>,
}

/// Reasons a stored record cannot become a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum RecordError {
    /// The record is not a JSON object of the expected shape.
    #[error("malformed record: {0}")]
    Malformed(String),
    /// The record has no identifier.
    #[error("record has no identifier")]
    MissingId,
    /// The record has no column.
    #[error("record has no column")]
    MissingColumn,
    /// A timestamp is out of range or unreadable.
    #[error("record has an invalid timestamp")]
    InvalidTimestamp,
    /// A required field failed domain validation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The column label is unknown.
    #[error(transparent)]
    Label(#[from] ParseLabelError),
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(StoredId::Text(task.id().as_str().to_owned())),
            title: Some(task.title().as_str().to_owned()),
            description: Some(task.description().to_owned()),
            column: Some(task.column().as_str().to_owned()),
            detailed_status: task.detailed_status().map(|s| s.as_str().to_owned()),
            priority: Some(task.priority().as_str().to_owned()),
            responsible_id: task.responsible_id().map(|id| id.as_str().to_owned()),
            responsible: Some(task.responsible_name().to_owned()),
            tags: Some(task.tags().to_vec()),
            due_date: task.due_date().map(StoredTimestamp::from_datetime),
            created_at: Some(StoredTimestamp::from_datetime(task.created_at())),
            updated_at: Some(StoredTimestamp::from_datetime(task.updated_at())),
            ..Self::default()
        }
    }
}

impl StoredTask {
    /// Coerces the record into a task, filling gaps with defaults.
    ///
    /// `now` stands in for both timestamps when neither was stored.
    fn into_task(self, now: DateTime<Utc>) -> Result<Task, RecordError> {
        let id = match self.id {
            Some(StoredId::Text(text)) => TaskId::parse(text)?,
            Some(StoredId::Number(number)) => TaskId::parse(number.to_string())?,
            None => return Err(RecordError::MissingId),
        };
        let title = TaskTitle::new(self.title.or(self.titulo).unwrap_or_default())?;
        let column_label = self
            .column
            .or(self.coluna)
            .ok_or(RecordError::MissingColumn)?;
        let column = Column::try_from(column_label.as_str())?;

        let created = self
            .created_at
            .or(self.criado_em)
            .as_ref()
            .map(StoredTimestamp::to_datetime)
            .transpose()?;
        let updated = self
            .updated_at
            .or(self.atualizado_em)
            .as_ref()
            .map(StoredTimestamp::to_datetime)
            .transpose()?;
        let created_at = created.or(updated).unwrap_or(now);
        let updated_at = updated.unwrap_or(created_at);
        let due_date = self.due_date.as_ref().and_then(|due| due.to_datetime().ok());
        let detailed_status = self.detailed_status.or(self.status_detalhado);

        Ok(Task::from_persisted(PersistedTaskData {
            id,
            title,
            description: self
                .description
                .or(self.descricao)
                .unwrap_or_default()
                .trim()
                .to_owned(),
            column,
            detailed_status: lenient_status(detailed_status.as_deref()),
            priority: lenient_priority(self.priority.as_deref()),
            responsible_id: self
                .responsible_id
                .or(self.responsavel_id)
                .and_then(PersonId::new),
            responsible_name: self.responsible.or(self.responsavel).unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            due_date,
            created_at,
            updated_at,
        }))
    }
}

fn lenient_status(value: Option<&str>) -> Option<DetailedStatus> {
    let raw = value.map(str::trim).filter(|raw| !raw.is_empty())?;
    match DetailedStatus::try_from(raw) {
        Ok(status) => Some(status),
        Err(err) => {
            warn!(event = "snapshot_coerce", field = "detailedStatus", error = %err, "dropping unknown status");
            None
        }
    }
}

fn lenient_priority(value: Option<&str>) -> Priority {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Priority::default();
    };
    Priority::try_from(raw).unwrap_or_else(|err| {
        warn!(event = "snapshot_coerce", field = "priority", error = %err, "defaulting unknown priority");
        Priority::default()
    })
}

/// Serializes the task list into the stored JSON layout.
pub(crate) fn encode(tasks: &[Task]) -> serde_json::Result<String> {
    let records: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    serde_json::to_string(&records)
}

/// Result of decoding a stored snapshot.
#[derive(Debug, Default)]
pub(crate) struct Decoded {
    /// Tasks recovered from the snapshot, in stored order.
    pub tasks: Vec<Task>,
    /// Records that could not be coerced, with the reason.
    pub rejected: Vec<RecordError>,
}

/// Parses a stored snapshot.
///
/// # Errors
///
/// Returns the JSON error when the text is not a JSON array. Individual
/// records that fail coercion are reported in [`Decoded::rejected`].
pub(crate) fn decode(raw: &str, now: DateTime<Utc>) -> serde_json::Result<Decoded> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    let mut decoded = Decoded::default();
    for value in values {
        let record = serde_json::from_value::<StoredTask>(value)
            .map_err(|err| RecordError::Malformed(err.to_string()))
            .and_then(|stored| stored.into_task(now));
        match record {
            Ok(task) => decoded.tasks.push(task),
            Err(err) => decoded.rejected.push(err),
        }
    }
    Ok(decoded)
}
