//! Error types for board domain validation and label parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,
}

/// Enumerated field a label failed to parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Board column.
    Column,
    /// Task priority.
    Priority,
    /// Detailed workflow status.
    DetailedStatus,
}

impl LabelKind {
    /// Returns a lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Priority => "priority",
            Self::DetailedStatus => "detailed status",
        }
    }
}

/// Error returned when a stored or user-supplied label is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {}: {value}", kind.as_str())]
pub struct ParseLabelError {
    /// Field the label was meant for.
    pub kind: LabelKind,
    /// Raw label as received.
    pub value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: LabelKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
