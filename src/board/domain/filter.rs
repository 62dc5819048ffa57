//! Ephemeral view state: filter criteria and creation-modal visibility.

use super::{DetailedStatus, PersonId, Priority, clean_tag};

/// Active filter criteria. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    responsible_id: Option<PersonId>,
    detailed_status: Option<DetailedStatus>,
    priority: Option<Priority>,
    tag: Option<String>,
}

impl FilterCriteria {
    /// Creates unconstrained criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the responsible-party constraint.
    #[must_use]
    pub const fn responsible_id(&self) -> Option<&PersonId> {
        self.responsible_id.as_ref()
    }

    /// Returns the detailed-status constraint.
    #[must_use]
    pub const fn detailed_status(&self) -> Option<DetailedStatus> {
        self.detailed_status
    }

    /// Returns the priority constraint.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the tag-substring constraint.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns `true` when no criterion is active.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.responsible_id.is_none()
            && self.detailed_status.is_none()
            && self.priority.is_none()
            && self.tag.is_none()
    }

    /// Merges the supplied fields of `patch` into these criteria.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(value) = patch.responsible_id {
            self.responsible_id = value;
        }
        if let Some(value) = patch.detailed_status {
            self.detailed_status = value;
        }
        if let Some(value) = patch.priority {
            self.priority = value;
        }
        if let Some(value) = patch.tag {
            self.tag = value;
        }
    }
}

/// Partial change to [`FilterCriteria`].
///
/// Each setter takes an `Option`; `None` clears that criterion. Fields not
/// mentioned keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    responsible_id: Option<Option<PersonId>>,
    detailed_status: Option<Option<DetailedStatus>>,
    priority: Option<Option<Priority>>,
    tag: Option<Option<String>>,
}

impl FilterPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the responsible-party criterion.
    #[must_use]
    pub fn responsible(mut self, id: Option<PersonId>) -> Self {
        self.responsible_id = Some(id);
        self
    }

    /// Sets or clears the detailed-status criterion.
    #[must_use]
    pub const fn detailed_status(mut self, status: Option<DetailedStatus>) -> Self {
        self.detailed_status = Some(status);
        self
    }

    /// Sets or clears the priority criterion.
    #[must_use]
    pub const fn priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets or clears the tag-substring criterion. Blank text clears it.
    #[must_use]
    pub fn tag(mut self, tag: Option<&str>) -> Self {
        self.tag = Some(tag.and_then(clean_tag));
        self
    }
}

/// Presentation state owned by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the task-creation modal is open.
    pub is_modal_open: bool,
}
