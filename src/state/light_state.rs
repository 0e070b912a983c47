// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-room light state.

use serde::{Deserialize, Serialize};

use crate::types::Brightness;

/// State of a single room's light.
///
/// Brightness is retained across power-off: switching a light off and back
/// on resumes at the previous level rather than resetting it.
///
/// # Examples
///
/// ```
/// use lumipanel::state::LightState;
/// use lumipanel::types::Brightness;
///
/// let mut light = LightState::default();
/// assert!(!light.is_on());
/// assert_eq!(light.brightness().value(), 50);
///
/// light.set_brightness(Brightness::new(80).unwrap());
/// light.toggle();
/// assert!(light.is_on());
/// assert_eq!(light.brightness().value(), 80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightState {
    /// Whether the light is switched on.
    is_on: bool,
    /// Light level, kept even while the light is off.
    brightness: Brightness,
}

impl LightState {
    /// Creates a light state with the given power flag and brightness.
    #[must_use]
    pub const fn new(is_on: bool, brightness: Brightness) -> Self {
        Self { is_on, brightness }
    }

    /// Returns `true` if the light is switched on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Returns the light level.
    #[must_use]
    pub const fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Flips the power flag and returns the new value.
    ///
    /// Brightness is untouched.
    pub fn toggle(&mut self) -> bool {
        self.is_on = !self.is_on;
        self.is_on
    }

    /// Sets the power flag.
    pub fn set_on(&mut self, on: bool) {
        self.is_on = on;
    }

    /// Sets the light level.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }
}

impl Default for LightState {
    /// A light that is off at 50% brightness.
    fn default() -> Self {
        Self::new(false, Brightness::DEFAULT)
    }
}
