// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The light registry: one light per room.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::state::LightState;
use crate::types::{Brightness, Room};

/// Schema version written into registry snapshots.
///
/// Snapshots carrying any other version are treated as malformed.
pub const REGISTRY_SNAPSHOT_VERSION: u32 = 1;

/// In-memory mapping from room to light state.
///
/// The room set is fixed for the lifetime of a session; iteration follows
/// [`Room::ALL`] order. The registry is the single source of truth for every
/// derived computation and rendering decision.
///
/// The registry itself is pure state. Persistence (loading snapshots from
/// and saving them to a key-value store) is driven by
/// [`ControlPanel`](crate::panel::ControlPanel).
///
/// # Examples
///
/// ```
/// use lumipanel::state::LightRegistry;
/// use lumipanel::types::Room;
///
/// let mut registry = LightRegistry::default();
/// assert!(!registry.light(Room::Kitchen).is_on());
///
/// let now_on = registry.toggle(Room::Kitchen);
/// assert!(now_on);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightRegistry {
    lights: [LightState; Room::COUNT],
}

impl LightRegistry {
    /// Creates a registry with every light off at 50% brightness.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of one room's light.
    #[must_use]
    pub fn light(&self, room: Room) -> LightState {
        self.lights[room.index()]
    }

    /// Iterates over all rooms and their light states in fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Room, LightState)> + '_ {
        Room::ALL.iter().map(|&room| (room, self.lights[room.index()]))
    }

    /// Flips one room's light and returns its new power flag.
    ///
    /// Brightness is untouched, so the light resumes at its last level.
    pub fn toggle(&mut self, room: Room) -> bool {
        self.lights[room.index()].toggle()
    }

    /// Sets one room's light level.
    pub fn set_brightness(&mut self, room: Room, brightness: Brightness) {
        self.lights[room.index()].set_brightness(brightness);
    }

    /// Returns `true` if every light is on.
    #[must_use]
    pub fn all_on(&self) -> bool {
        self.lights.iter().all(LightState::is_on)
    }

    /// Master switch: sets every light to the same power state.
    ///
    /// If every light is already on, all are turned off; in any other
    /// configuration (all off or mixed) all are turned on. A single room
    /// being off while the rest are on therefore turns everything ON.
    /// Returns the power state every light now has.
    pub fn toggle_all(&mut self) -> bool {
        let target = !self.all_on();
        for light in &mut self.lights {
            light.set_on(target);
        }
        target
    }

    /// Serializes the registry wholesale into snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails.
    pub fn to_snapshot(&self) -> Result<String, SnapshotError> {
        let rooms: BTreeMap<String, LightState> = self
            .iter()
            .map(|(room, light)| (room.as_key().to_string(), light))
            .collect();
        let snapshot = RegistrySnapshot {
            version: REGISTRY_SNAPSHOT_VERSION,
            rooms,
        };
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuilds a registry from snapshot JSON, replacing all rooms at once.
    ///
    /// The snapshot is untrusted external input and is fully validated: the
    /// schema version must match, every room must be present, and brightness
    /// values must be in range. There is no field-level merge; a snapshot
    /// either replaces the whole registry or is rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] describing the first violation found.
    /// Callers loading from a store treat any error as "no snapshot" and
    /// fall back to the default registry.
    pub fn from_snapshot(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: RegistrySnapshot = serde_json::from_str(json)?;
        if snapshot.version != REGISTRY_SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: REGISTRY_SNAPSHOT_VERSION,
            });
        }

        let mut registry = Self::default();
        for room in Room::ALL {
            let light = snapshot
                .rooms
                .get(room.as_key())
                .ok_or_else(|| SnapshotError::MissingRoom(room.as_key().to_string()))?;
            registry.lights[room.index()] = *light;
        }
        Ok(registry)
    }
}

impl Default for LightRegistry {
    fn default() -> Self {
        Self {
            lights: [LightState::default(); Room::COUNT],
        }
    }
}

/// Wire form of a persisted registry.
///
/// Rooms are keyed by their kebab-case storage keys. Unknown extra keys are
/// ignored on load; missing rooms reject the snapshot.
#[derive(Serialize, Deserialize)]
struct RegistrySnapshot {
    version: u32,
    rooms: BTreeMap<String, LightState>,
}
