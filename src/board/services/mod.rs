//! Application services: the task store, its persistence adapter and the
//! query engine.

mod config;
mod intent;
mod persistence;
pub mod query;
mod snapshot;
mod store;

pub use config::PersistenceConfig;
pub use intent::{BoardIntent, BoardState, Transition, reduce};
pub use persistence::{
    LoadOutcome, LoadReport, LoadSource, PersistenceError, PersistenceResult, TaskPersistence,
    apply_retention, seed_tasks,
};
pub use query::{BoardView, ColumnView};
pub use store::{MoveOutcome, TaskStore, TaskStoreError, TaskStoreResult};
