//! Persistence configuration.

use serde::{Deserialize, Serialize};

/// Configuration for loading and saving the board snapshot.
///
/// # Examples
///
/// ```
/// use kanban_core::board::services::PersistenceConfig;
///
/// let config = PersistenceConfig::default();
/// assert_eq!(config.storage_key, "kanban_tasks");
/// assert_eq!(config.retention_days, 30);
///
/// let custom = PersistenceConfig::default()
///     .with_storage_key("team_board")
///     .without_seed();
/// assert!(!custom.seed_on_first_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Key of the storage slot holding the task list.
    pub storage_key: String,
    /// Days a task may stay in the Done column, counted from its last
    /// update, before load-time cleanup discards it.
    pub retention_days: u32,
    /// Whether a first run with empty storage starts from the example task.
    pub seed_on_first_run: bool,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            storage_key: "kanban_tasks".to_owned(),
            retention_days: 30,
            seed_on_first_run: true,
        }
    }
}

impl PersistenceConfig {
    /// Sets the storage slot key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the Done-column retention window.
    #[must_use]
    pub const fn with_retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    /// Starts first runs from an empty board.
    #[must_use]
    pub const fn without_seed(mut self) -> Self {
        self.seed_on_first_run = false;
        self
    }
}
