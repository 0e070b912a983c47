// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state management types.
//!
//! This module provides the per-room [`LightState`] and the session-wide
//! [`LightRegistry`] holding one light per room. The registry is pure state;
//! persistence against the key-value store lives in
//! [`panel`](crate::panel).
//!
//! # Examples
//!
//! ```
//! use lumipanel::state::LightRegistry;
//! use lumipanel::types::{Brightness, Room};
//!
//! let mut registry = LightRegistry::default();
//! registry.toggle(Room::LivingRoom);
//! registry.set_brightness(Room::LivingRoom, Brightness::new(80).unwrap());
//!
//! assert!(registry.light(Room::LivingRoom).is_on());
//! ```

mod light_state;
mod registry;

pub use light_state::LightState;
pub use registry::{LightRegistry, REGISTRY_SNAPSHOT_VERSION};
