// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File-backed key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// A key-value store persisted as a single JSON file.
///
/// Every operation reads or writes the whole file, so the durability model
/// is exactly "whole-value read, whole-value write, last-writer-wins". Two
/// processes sharing one file can overwrite each other's saves; see the
/// [module documentation](crate::store) for this known limitation.
///
/// A file that exists but cannot be parsed is logged and treated as empty,
/// so a corrupted store degrades to defaults instead of failing every
/// operation.
///
/// # Examples
///
/// ```no_run
/// use lumipanel::store::{FileStore, KeyValueStore};
///
/// let store = FileStore::at_default_location().unwrap();
/// store.set("greeting", "hello").unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file.
    ///
    /// The file is created on first write; a missing file reads as empty.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the platform configuration
    /// directory cannot be determined.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let Some(mut path) = dirs::config_dir() else {
            return Err(StoreError::Unavailable(
                "could not determine config directory".to_string(),
            ));
        };
        path.push("lumipanel");
        path.push("store.json");
        Ok(Self::new(path))
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::error!("store file {} is corrupt, treating as empty: {e}", self.path.display());
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("store.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        FileStore::new(&path).set("key", "value").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn remove_deletes_one_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn clear_removes_the_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("a", "1").unwrap();

        store.clear().unwrap();

        assert!(!store.path().exists());
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "definitely not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("key").unwrap(), None);
        // Writing replaces the corrupt contents
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn nested_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep").join("nested").join("store.json");
        let store = FileStore::new(path);
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }
}
