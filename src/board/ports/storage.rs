//! Key-value slot port used to persist the board snapshot.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string storage addressed by key.
///
/// The board keeps its whole task list in a single slot, so implementations
/// only need whole-value reads and overwrites.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been written under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] when the key is not accepted by
    /// the backend or [`StorageError::Unavailable`] when the backend cannot
    /// be read.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] when the key is not accepted by
    /// the backend or [`StorageError::Unavailable`] when the write fails
    /// (quota exhausted, storage disabled, I/O failure).
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Errors returned by key-value storage implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be used with this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The backend failed or is disabled.
    #[error("storage unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
