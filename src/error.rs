// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `LumiPanel` library.
//!
//! This module provides an error hierarchy for handling failures across the
//! library: value validation, key-value store access, and persisted snapshot
//! parsing.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when operating
/// the control panel.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while accessing the key-value store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Error occurred while parsing a persisted snapshot.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// An unknown room key was provided.
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// An unknown theme name was provided.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Errors related to the persistent key-value store.
///
/// Save operations may fail when the backing store is unavailable or full.
/// These failures are non-fatal: in-memory state remains valid for the rest
/// of the session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The write would exceed the store's capacity.
    #[error("store quota of {limit} bytes exceeded")]
    QuotaExceeded {
        /// The configured capacity in bytes.
        limit: usize,
    },

    /// Encoding the store's on-disk representation failed.
    #[error("store encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The store cannot be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors related to parsing persisted snapshots.
///
/// A snapshot that fails to parse is treated as absent by the loading code;
/// these errors are logged, never propagated out of a load.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an unknown schema version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the snapshot.
        found: u32,
        /// The version this library writes.
        expected: u32,
    },

    /// A room is missing from the snapshot.
    #[error("missing room in snapshot: {0}")]
    MissingRoom(String),

    /// A field holds a value outside its valid range.
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// The field that failed validation.
        field: String,
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
