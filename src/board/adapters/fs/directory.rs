//! Directory-backed key-value store using capability-scoped file access.
//!
//! Each key maps to `<key>.json` inside one directory. Writes go to a
//! temporary sibling first and are renamed into place; readers never see a
//! partially written snapshot.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::board::ports::{KeyValueStore, StorageError, StorageResult};

const FILE_EXTENSION: &str = "json";
const TEMP_SUFFIX: &str = "tmp";

/// Key-value store persisting each key as a file in a directory.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Opens `path` as the storage directory, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(StorageError::unavailable)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(StorageError::unavailable)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Maps a key to its file name, rejecting anything that could escape the
/// directory or collide with temporary files.
fn file_name(key: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::unavailable(err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = file_name(key)?;
        let temp_name = format!("{name}.{TEMP_SUFFIX}");
        self.dir
            .write(&temp_name, value)
            .map_err(StorageError::unavailable)?;
        self.dir
            .rename(&temp_name, &self.dir, &name)
            .map_err(StorageError::unavailable)
    }
}
