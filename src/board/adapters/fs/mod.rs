//! Filesystem adapters.

mod directory;

pub use directory::DirectoryKeyValueStore;
