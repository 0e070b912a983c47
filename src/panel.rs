// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The control panel session.
//!
//! [`ControlPanel`] is the explicit state container behind a panel session:
//! it owns the light registry, the user settings, and the key-value store
//! they persist to. The embedding page constructs one panel, injects it into
//! its UI wiring, and routes every event through it. There are no ambient
//! globals; a panel without a real UI (as in tests) works identically.
//!
//! Each page picks the loads it needs at entry: the rooms and energy pages
//! call [`load_lights`](ControlPanel::load_lights), the settings page
//! [`load_settings`](ControlPanel::load_settings), the dashboard both.
//!
//! # Failure model
//!
//! Loads never fail: a missing or malformed snapshot falls back to defaults
//! with a logged diagnostic. Mutations mutate in memory first and then
//! persist; if the save fails the in-memory change stands, the error is
//! returned, and the session remains fully usable. Nothing here is fatal.

use crate::energy::{self, UsageSummary};
use crate::error::Result;
use crate::settings::UserSettings;
use crate::state::LightRegistry;
use crate::store::KeyValueStore;
use crate::types::{Brightness, Room};

/// Store key holding the serialized light registry.
pub const LIGHT_REGISTRY_KEY: &str = "light-registry";

/// Store key holding the serialized user settings.
pub const USER_SETTINGS_KEY: &str = "user-settings";

/// Store key holding the session flag (boolean-as-string).
pub const SESSION_FLAG_KEY: &str = "session-flag";

const SESSION_ACTIVE: &str = "true";

/// Demo account email accepted by [`ControlPanel::login`].
pub const DEMO_EMAIL: &str = "admin@example.com";

/// Demo account password accepted by [`ControlPanel::login`].
pub const DEMO_PASSWORD: &str = "admin123";

/// A panel session over a key-value store.
///
/// # Examples
///
/// ```
/// use lumipanel::panel::ControlPanel;
/// use lumipanel::store::MemoryStore;
/// use lumipanel::types::Room;
///
/// let mut panel = ControlPanel::new(MemoryStore::new());
/// panel.load_lights();
///
/// let now_on = panel.toggle_light(Room::Kitchen).unwrap();
/// assert!(now_on);
/// assert_eq!(panel.usage().lights_on, 1);
/// ```
#[derive(Debug)]
pub struct ControlPanel<S: KeyValueStore> {
    store: S,
    lights: LightRegistry,
    settings: UserSettings,
}

impl<S: KeyValueStore> ControlPanel<S> {
    /// Creates a panel session with default state over the given store.
    ///
    /// Nothing is read from the store yet; call
    /// [`load_lights`](Self::load_lights) and
    /// [`load_settings`](Self::load_settings) as the entering page requires.
    pub fn new(store: S) -> Self {
        Self {
            store,
            lights: LightRegistry::default(),
            settings: UserSettings::default(),
        }
    }

    /// Returns the current light registry.
    #[must_use]
    pub fn lights(&self) -> &LightRegistry {
        &self.lights
    }

    /// Returns the current user settings.
    #[must_use]
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Returns the store this session persists to.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========== Light registry persistence ==========

    /// Loads the persisted light registry, replacing the in-memory one
    /// wholesale.
    ///
    /// With no persisted snapshot, or one that fails validation, the
    /// registry is the hardcoded default (all rooms off at 50%); a malformed
    /// snapshot is logged and otherwise treated exactly like an absent one.
    pub fn load_lights(&mut self) {
        self.lights = match self.store.get(LIGHT_REGISTRY_KEY) {
            Ok(Some(json)) => match LightRegistry::from_snapshot(&json) {
                Ok(registry) => registry,
                Err(e) => {
                    tracing::warn!("discarding malformed light registry snapshot: {e}");
                    LightRegistry::default()
                }
            },
            Ok(None) => LightRegistry::default(),
            Err(e) => {
                tracing::warn!("could not read light registry, using defaults: {e}");
                LightRegistry::default()
            }
        };
    }

    /// Persists the in-memory registry wholesale, overwriting any prior
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or written.
    pub fn save_lights(&self) -> Result<()> {
        let json = self.lights.to_snapshot()?;
        self.store.set(LIGHT_REGISTRY_KEY, &json)?;
        Ok(())
    }

    /// Erases the persisted registry snapshot.
    ///
    /// Distinct from writing defaults: the namespace key is removed, so a
    /// later [`load_lights`](Self::load_lights) yields the hardcoded default
    /// because no persisted value exists. The in-memory registry is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset_lights(&self) -> Result<()> {
        self.store.remove(LIGHT_REGISTRY_KEY)?;
        Ok(())
    }

    // ========== Light mutations ==========

    /// Flips one room's light and persists the registry.
    ///
    /// Returns the light's new power flag. If persisting fails the in-memory
    /// flip stands and the error is returned for non-fatal surfacing (a
    /// toast, typically).
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be persisted.
    pub fn toggle_light(&mut self, room: Room) -> Result<bool> {
        let now_on = self.lights.toggle(room);
        tracing::debug!(room = %room, on = now_on, "toggled light");
        self.save_lights()?;
        Ok(now_on)
    }

    /// Sets one room's brightness from raw UI input and persists the
    /// registry.
    ///
    /// The input is clamped to [0, 100]: sliders and form fields deliver
    /// whatever they like, and out-of-range values must not corrupt the
    /// registry. Returns the brightness actually applied. On a failed save
    /// the in-memory change stands, as with
    /// [`toggle_light`](Self::toggle_light).
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be persisted.
    pub fn set_brightness(&mut self, room: Room, value: i64) -> Result<Brightness> {
        let level = Brightness::saturating_from(value);
        self.lights.set_brightness(room, level);
        tracing::debug!(room = %room, level = %level, "set brightness");
        self.save_lights()?;
        Ok(level)
    }

    /// Master switch: drives every room to one power state and persists.
    ///
    /// If every light is on, all turn off; from any other configuration
    /// (all off or mixed) all turn on. Returns the power state every light
    /// now has.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be persisted.
    pub fn toggle_all(&mut self) -> Result<bool> {
        let now_on = self.lights.toggle_all();
        tracing::debug!(on = now_on, "master switch");
        self.save_lights()?;
        Ok(now_on)
    }

    // ========== Derived values ==========

    /// Returns the aggregate usage of the current registry.
    #[must_use]
    pub fn usage(&self) -> UsageSummary {
        energy::total_usage(&self.lights)
    }

    // ========== User settings ==========

    /// Loads the persisted user settings, replacing the in-memory ones
    /// wholesale. Same fallback behavior as
    /// [`load_lights`](Self::load_lights).
    pub fn load_settings(&mut self) {
        self.settings = match self.store.get(USER_SETTINGS_KEY) {
            Ok(Some(json)) => match UserSettings::from_snapshot(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("discarding malformed settings snapshot: {e}");
                    UserSettings::default()
                }
            },
            Ok(None) => UserSettings::default(),
            Err(e) => {
                tracing::warn!("could not read settings, using defaults: {e}");
                UserSettings::default()
            }
        };
    }

    /// Replaces the in-memory settings and persists them wholesale.
    ///
    /// On a failed save the in-memory change stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be persisted.
    pub fn update_settings(&mut self, settings: UserSettings) -> Result<()> {
        self.settings = settings;
        let json = self.settings.to_snapshot()?;
        self.store.set(USER_SETTINGS_KEY, &json)?;
        Ok(())
    }

    // ========== Session gate ==========

    /// Attempts to start a session with the given credentials.
    ///
    /// This is a placeholder equality test against the demo account, not a
    /// security boundary: there is no hashing, no secret management, and no
    /// protection against anything. Returns `true` and sets the session
    /// flag on a match, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the session flag cannot be written.
    pub fn login(&self, email: &str, password: &str) -> Result<bool> {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            self.store.set(SESSION_FLAG_KEY, SESSION_ACTIVE)?;
            tracing::debug!("session started");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns `true` if a session flag is present.
    ///
    /// An unreadable store counts as logged out, so a broken store degrades
    /// to the login page rather than an error.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(
            self.store.get(SESSION_FLAG_KEY),
            Ok(Some(flag)) if flag == SESSION_ACTIVE
        )
    }

    /// Ends the session: removes the session flag and the persisted light
    /// registry.
    ///
    /// User settings survive a logout; only a
    /// [`full_reset`](Self::full_reset) clears them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn logout(&self) -> Result<()> {
        self.store.remove(SESSION_FLAG_KEY)?;
        self.store.remove(LIGHT_REGISTRY_KEY)?;
        tracing::debug!("session ended");
        Ok(())
    }

    /// Clears every persisted value: registry, settings, and session flag.
    ///
    /// The in-memory state is untouched; the embedding page navigates back
    /// to the login page after a reset, discarding it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    pub fn full_reset(&self) -> Result<()> {
        self.store.clear()?;
        tracing::debug!("full reset");
        Ok(())
    }
}
