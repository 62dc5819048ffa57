//! Kanban board core.
//!
//! The board keeps a list of tasks spread over three columns, the filter
//! criteria the user has selected, and whether the creation modal is open.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store, persistence adapter and query engine in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
