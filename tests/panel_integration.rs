// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for full panel sessions over both store backends.

use lumipanel::energy;
use lumipanel::panel::{
    ControlPanel, DEMO_EMAIL, DEMO_PASSWORD, LIGHT_REGISTRY_KEY, SESSION_FLAG_KEY,
    USER_SETTINGS_KEY,
};
use lumipanel::settings::UserSettings;
use lumipanel::state::LightRegistry;
use lumipanel::store::{KeyValueStore, MemoryStore};
use lumipanel::types::{Room, Theme};

// ============================================================================
// Session Flow Tests
// ============================================================================

mod session_flow {
    use super::*;

    #[test]
    fn login_dashboard_rooms_energy_logout() {
        let mut panel = ControlPanel::new(MemoryStore::new());

        // Login page
        assert!(!panel.is_logged_in());
        assert!(panel.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap());

        // Dashboard entry loads both snapshots
        panel.load_lights();
        panel.load_settings();
        assert_eq!(panel.usage().lights_on, 0);
        assert_eq!(
            energy::system_status_message(panel.lights()),
            "No lights are on"
        );

        // Rooms page: turn on two rooms
        panel.toggle_light(Room::LivingRoom).unwrap();
        panel.set_brightness(Room::LivingRoom, 100).unwrap();
        panel.toggle_light(Room::Kitchen).unwrap();

        // Energy page figures
        let usage = panel.usage();
        assert_eq!(usage.total_watts, 90.0);
        assert_eq!(usage.lights_on, 2);
        assert!(!energy::is_over_threshold(panel.lights()));
        assert_eq!(
            energy::system_status_message(panel.lights()),
            "All systems operational."
        );

        // Logout wipes the registry snapshot but keeps settings
        panel.logout().unwrap();
        assert!(!panel.is_logged_in());
        assert_eq!(panel.store().get(LIGHT_REGISTRY_KEY).unwrap(), None);
    }

    #[test]
    fn state_survives_page_navigation() {
        // Each page entry constructs its own panel over the shared store,
        // the way each HTML page re-runs its initializer.
        let store = MemoryStore::new();

        {
            let mut rooms_page = ControlPanel::new(&store);
            rooms_page.load_lights();
            rooms_page.toggle_light(Room::Study).unwrap();
            rooms_page.set_brightness(Room::Study, 80).unwrap();
        }

        let mut energy_page = ControlPanel::new(&store);
        energy_page.load_lights();

        let breakdown = energy::per_room_breakdown(energy_page.lights());
        assert_eq!(breakdown[Room::Study.index()].watts, 48.0);
    }

    #[test]
    fn full_reset_returns_panel_to_first_run() {
        let store = MemoryStore::new();
        let mut panel = ControlPanel::new(&store);
        panel.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
        panel.toggle_all().unwrap();
        panel
            .update_settings(UserSettings {
                name: "Someone".to_string(),
                email: "someone@example.com".to_string(),
                theme: Theme::Light,
            })
            .unwrap();

        panel.full_reset().unwrap();

        let mut fresh = ControlPanel::new(&store);
        fresh.load_lights();
        fresh.load_settings();
        assert!(!fresh.is_logged_in());
        assert_eq!(fresh.lights(), &LightRegistry::default());
        assert_eq!(fresh.settings(), &UserSettings::default());
        assert_eq!(fresh.store().get(SESSION_FLAG_KEY).unwrap(), None);
        assert_eq!(fresh.store().get(USER_SETTINGS_KEY).unwrap(), None);
    }
}

// ============================================================================
// Master Switch Tests
// ============================================================================

mod master_switch {
    use super::*;

    #[test]
    fn mixed_state_turns_all_on_then_all_off() {
        let mut panel = ControlPanel::new(MemoryStore::new());
        panel.toggle_light(Room::Bedroom).unwrap();

        assert!(panel.toggle_all().unwrap());
        assert!(panel.lights().all_on());

        assert!(!panel.toggle_all().unwrap());
        assert_eq!(panel.usage().lights_on, 0);
    }

    #[test]
    fn master_switch_keeps_brightness_levels() {
        let mut panel = ControlPanel::new(MemoryStore::new());
        panel.set_brightness(Room::Kitchen, 20).unwrap();
        panel.set_brightness(Room::Study, 90).unwrap();

        panel.toggle_all().unwrap();

        assert_eq!(panel.lights().light(Room::Kitchen).brightness().value(), 20);
        assert_eq!(panel.lights().light(Room::Study).brightness().value(), 90);
    }
}

// ============================================================================
// File Store Tests
// ============================================================================

#[cfg(feature = "file-store")]
mod file_store {
    use super::*;
    use lumipanel::store::FileStore;

    #[test]
    fn panel_state_survives_process_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut panel = ControlPanel::new(FileStore::new(&path));
            panel.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
            panel.toggle_light(Room::LivingRoom).unwrap();
            panel.set_brightness(Room::LivingRoom, 65).unwrap();
        }

        // A new panel over a new store instance sees the saved session
        let mut panel = ControlPanel::new(FileStore::new(&path));
        assert!(panel.is_logged_in());
        panel.load_lights();
        let light = panel.lights().light(Room::LivingRoom);
        assert!(light.is_on());
        assert_eq!(light.brightness().value(), 65);
    }

    #[test]
    fn corrupt_snapshot_on_disk_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::new(&path);
        store
            .set(LIGHT_REGISTRY_KEY, "{\"version\":1,\"rooms\":\"oops\"}")
            .unwrap();

        let mut panel = ControlPanel::new(store);
        panel.load_lights();
        assert_eq!(panel.lights(), &LightRegistry::default());
    }
}
