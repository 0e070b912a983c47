// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client-local key-value storage.
//!
//! The panel persists its snapshots through the [`KeyValueStore`] trait:
//! whole-value reads and whole-value writes of strings under namespace
//! keys, last-writer-wins. There is exactly one logical writer per store in
//! this process, so no locking discipline is required beyond what each
//! implementation needs internally.
//!
//! # Known limitation
//!
//! Nothing coordinates two *separate* sessions sharing one backing store
//! (two processes pointed at the same [`FileStore`] file, for instance).
//! Their whole-value writes can overwrite each other. This mirrors the
//! uncoordinated multi-tab behavior of browser local storage and is out of
//! scope for correctness guarantees.
//!
//! # Implementations
//!
//! - [`MemoryStore`] - in-process map, optionally quota-limited
//! - [`FileStore`] - single JSON file on disk (feature `file-store`)

#[cfg(feature = "file-store")]
mod file;
mod memory;

#[cfg(feature = "file-store")]
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// A persistent string-to-string store.
///
/// Values are opaque serialized snapshots; the store neither inspects nor
/// validates them. All methods take `&self`: implementations provide their
/// own interior mutability so a store can be shared with the UI wiring
/// layer.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store cannot be written,
    /// including [`StoreError::QuotaExceeded`] when the store is full.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Removes every value in the store.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing store cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

// A shared reference is a store too, so one backing store can serve several
// short-lived panel sessions (one per page entry).
impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
