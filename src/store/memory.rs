// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory key-value store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// A key-value store held entirely in process memory.
///
/// The default store for tests and demos. An optional byte quota simulates
/// the capacity failures of real client-local storage: once keys plus values
/// would exceed the quota, writes fail with [`StoreError::QuotaExceeded`]
/// while reads keep working.
///
/// # Examples
///
/// ```
/// use lumipanel::store::{KeyValueStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
///
/// store.remove("greeting").unwrap();
/// assert_eq!(store.get("greeting").unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Creates an empty store without a quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that holds at most `quota_bytes` of data.
    ///
    /// The quota covers the byte lengths of all keys and values combined.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumipanel::store::{KeyValueStore, MemoryStore};
    ///
    /// let store = MemoryStore::with_quota(8);
    /// assert!(store.set("k", "v").is_ok());
    /// assert!(store.set("big", "too large to fit").is_err());
    /// ```
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        if let Some(limit) = self.quota_bytes {
            let replaced = entries.get(key).map_or(0, |v| key.len() + v.len());
            let used = Self::used_bytes(&entries) - replaced;
            if used + key.len() + value.len() > limit {
                return Err(StoreError::QuotaExceeded { limit });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.entries.write().clear();
        Ok(())
    }
}
