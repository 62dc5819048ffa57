//! In-memory adapters.

mod storage;

pub use storage::InMemoryKeyValueStore;
