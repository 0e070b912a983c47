// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `LumiPanel` - A Rust library simulating a home lighting control panel.
//!
//! This library models the state behind a lighting dashboard: per-room
//! lights with retained brightness, aggregate energy estimation, user
//! preferences, and a demo session gate, all persisted to a pluggable
//! client-local key-value store. Everything is synchronous and
//! single-threaded; each operation is a whole-value read-modify-write
//! against the store, triggered by a UI event.
//!
//! # Supported Features
//!
//! - **Light control**: Per-room on/off and brightness, master switch
//! - **Energy estimation**: Simulated wattage, daily kWh, usage warnings
//! - **Persistence**: Versioned snapshots with validate-on-load
//! - **Preferences**: Name, email, and color theme
//!
//! # Quick Start
//!
//! ## A panel session over an in-memory store
//!
//! ```
//! use lumipanel::energy;
//! use lumipanel::panel::ControlPanel;
//! use lumipanel::store::MemoryStore;
//! use lumipanel::types::Room;
//!
//! fn main() -> lumipanel::Result<()> {
//!     let mut panel = ControlPanel::new(MemoryStore::new());
//!     panel.load_lights();
//!
//!     // Turn the kitchen light on at 75%
//!     panel.toggle_light(Room::Kitchen)?;
//!     panel.set_brightness(Room::Kitchen, 75)?;
//!
//!     let usage = panel.usage();
//!     assert_eq!(usage.lights_on, 1);
//!     assert_eq!(usage.total_watts, 45.0);
//!
//!     // Per-room figures for the energy page
//!     for entry in energy::per_room_breakdown(panel.lights()) {
//!         println!("{}: {:.1} W", entry.label(), entry.watts);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Persisting across sessions
//!
//! ```no_run
//! use lumipanel::panel::ControlPanel;
//! use lumipanel::store::FileStore;
//! use lumipanel::types::Room;
//!
//! fn main() -> lumipanel::Result<()> {
//!     let store = FileStore::at_default_location()?;
//!     let mut panel = ControlPanel::new(store);
//!
//!     // Picks up whatever the last session saved
//!     panel.load_lights();
//!     panel.toggle_light(Room::LivingRoom)?;
//!     Ok(())
//! }
//! ```
//!
//! ## The session gate
//!
//! ```
//! use lumipanel::panel::{ControlPanel, DEMO_EMAIL, DEMO_PASSWORD};
//! use lumipanel::store::MemoryStore;
//!
//! fn main() -> lumipanel::Result<()> {
//!     let panel = ControlPanel::new(MemoryStore::new());
//!
//!     // Placeholder credential check - a demo gate, not security
//!     assert!(panel.login(DEMO_EMAIL, DEMO_PASSWORD)?);
//!     assert!(panel.is_logged_in());
//!
//!     panel.logout()?;
//!     assert!(!panel.is_logged_in());
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod energy;
pub mod error;
pub mod panel;
pub mod settings;
pub mod state;
pub mod store;
pub mod types;

pub use energy::{
    MAX_WATTS_PER_LIGHT, RoomUsage, USAGE_WARNING_THRESHOLD_WATTS, UsageSummary,
};
pub use error::{Error, Result, SnapshotError, StoreError, ValueError};
pub use panel::ControlPanel;
pub use settings::UserSettings;
pub use state::{LightRegistry, LightState};
#[cfg(feature = "file-store")]
pub use store::FileStore;
pub use store::{KeyValueStore, MemoryStore};
pub use types::{Brightness, Room, Theme};
