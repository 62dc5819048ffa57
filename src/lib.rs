//! Kanban board core: task state store, persistence and filtering.
//!
//! This crate provides the data layer behind a Kanban task board. A
//! presentation layer renders the state it exposes and calls back with
//! intents; everything else lives here.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, labels, roster and filter state with no
//!   infrastructure dependencies
//! - **Ports**: The key-value slot the board is persisted to
//! - **Adapters**: In-memory and directory-backed storage
//! - **Services**: The reducer-driven task store, the load/save cycle with
//!   retention cleanup, and the per-column query engine
//!
//! # Modules
//!
//! - [`board`]: Task board state, persistence and queries

pub mod board;
