//! Storage adapters for the board's key-value port.

pub mod fs;
pub mod memory;
