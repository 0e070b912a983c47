// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User preferences.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::types::Theme;

/// Schema version written into settings snapshots.
pub const SETTINGS_SNAPSHOT_VERSION: u32 = 1;

/// Per-user panel preferences.
///
/// Follows the same lifecycle as the light registry: loaded wholesale from
/// its own namespace key, saved wholesale, and falling back to the defaults
/// below when no (valid) snapshot exists.
///
/// # Examples
///
/// ```
/// use lumipanel::settings::UserSettings;
/// use lumipanel::types::Theme;
///
/// let settings = UserSettings::default();
/// assert_eq!(settings.name, "Admin User");
/// assert_eq!(settings.theme, Theme::Dark);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Display name shown in the panel header.
    pub name: String,
    /// Contact email shown on the settings page.
    pub email: String,
    /// Preferred color theme.
    pub theme: Theme,
}

impl UserSettings {
    /// Serializes the settings wholesale into snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        let snapshot = SettingsSnapshot {
            version: SETTINGS_SNAPSHOT_VERSION,
            settings: self.clone(),
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuilds settings from snapshot JSON.
    ///
    /// Like the registry snapshot, this is untrusted input: the schema
    /// version must match and the theme must be a known name. Callers
    /// loading from a store treat any error as "no snapshot" and fall back
    /// to [`UserSettings::default`].
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] describing the first violation found.
    pub fn from_snapshot(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: SettingsSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SETTINGS_SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: SETTINGS_SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot.settings)
    }
}

impl Default for UserSettings {
    /// The demo account's settings: dark theme, admin identity.
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            theme: Theme::Dark,
        }
    }
}

/// Wire form of persisted settings.
#[derive(Serialize, Deserialize)]
struct SettingsSnapshot {
    version: u32,
    #[serde(flatten)]
    settings: UserSettings,
}
