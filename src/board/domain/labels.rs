//! Enumerated task attributes: board column, priority and detailed status.
//!
//! Canonical labels are English. Portuguese labels written by earlier boards
//! are accepted when parsing; matching ignores case and accents.

use super::{LabelKind, ParseLabelError, fold_diacritics};
use std::fmt;

/// Board column a task is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Column {
    /// Work not yet started.
    #[default]
    ToDo,
    /// Work underway.
    InProgress,
    /// Work completed; subject to retention cleanup.
    Done,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for Column {
    type Error = ParseLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match fold_diacritics(value.trim()).as_str() {
            "to do" | "todo" | "to_do" | "a fazer" => Ok(Self::ToDo),
            "in progress" | "in_progress" | "em progresso" => Ok(Self::InProgress),
            "done" | "concluido" => Ok(Self::Done),
            _ => Err(ParseLabelError::new(LabelKind::Column, value)),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    /// Low priority; the default for new tasks.
    #[default]
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParseLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match fold_diacritics(value.trim()).as_str() {
            "low" | "baixa" => Ok(Self::Low),
            "medium" | "media" => Ok(Self::Medium),
            "high" | "alta" => Ok(Self::High),
            _ => Err(ParseLabelError::new(LabelKind::Priority, value)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained workflow status shown on a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DetailedStatus {
    /// Work has been requested.
    Requested,
    /// Request is being analysed.
    UnderAnalysis,
    /// Blocked waiting for parts.
    AwaitingParts,
    /// Work has been scheduled.
    Scheduled,
    /// Work is being executed.
    InExecution,
    /// Work is under inspection.
    Inspection,
    /// Work is finished.
    Finished,
}

impl DetailedStatus {
    /// All detailed statuses in workflow order.
    pub const ALL: [Self; 7] = [
        Self::Requested,
        Self::UnderAnalysis,
        Self::AwaitingParts,
        Self::Scheduled,
        Self::InExecution,
        Self::Inspection,
        Self::Finished,
    ];

    /// Returns the canonical label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "Requested",
            Self::UnderAnalysis => "Under Analysis",
            Self::AwaitingParts => "Awaiting Parts",
            Self::Scheduled => "Scheduled",
            Self::InExecution => "In Execution",
            Self::Inspection => "Inspection",
            Self::Finished => "Finished",
        }
    }
}

impl TryFrom<&str> for DetailedStatus {
    type Error = ParseLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match fold_diacritics(value.trim()).as_str() {
            "requested" | "solicitado" => Ok(Self::Requested),
            "under analysis" | "em analise" => Ok(Self::UnderAnalysis),
            "awaiting parts" | "aguardando pecas" => Ok(Self::AwaitingParts),
            "scheduled" | "programado" => Ok(Self::Scheduled),
            "in execution" | "em execucao" => Ok(Self::InExecution),
            "inspection" | "inspecao" => Ok(Self::Inspection),
            "finished" | "finalizado" => Ok(Self::Finished),
            _ => Err(ParseLabelError::new(LabelKind::DetailedStatus, value)),
        }
    }
}

impl fmt::Display for DetailedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
