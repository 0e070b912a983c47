// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy usage estimation.
//!
//! Every function in this module is a pure computation over a
//! [`LightRegistry`] snapshot: no side effects, no persisted state, and no
//! caching (recomputation is O(room count)).
//!
//! The figures are a simulation, not a measurement. Each light is modelled
//! as a linear load from 0 W up to [`MAX_WATTS_PER_LIGHT`] at full
//! brightness, and the daily estimate assumes that load held constant for
//! 24 hours.
//!
//! # Examples
//!
//! ```
//! use lumipanel::energy;
//! use lumipanel::state::LightRegistry;
//! use lumipanel::types::{Brightness, Room};
//!
//! let mut registry = LightRegistry::default();
//! registry.toggle(Room::Kitchen);
//! registry.set_brightness(Room::Kitchen, Brightness::MAX);
//!
//! let usage = energy::total_usage(&registry);
//! assert_eq!(usage.total_watts, 60.0);
//! assert_eq!(usage.lights_on, 1);
//! ```

use crate::state::{LightRegistry, LightState};
use crate::types::Room;

/// Maximum simulated power draw of one light at full brightness, in Watts.
pub const MAX_WATTS_PER_LIGHT: f64 = 60.0;

/// Total draw above which the panel shows a high-usage warning, in Watts.
pub const USAGE_WARNING_THRESHOLD_WATTS: f64 = 150.0;

const HOURS_PER_DAY: f64 = 24.0;
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Issue text reported while no light is on.
const NO_LIGHTS_ISSUE: &str = "No lights are on";

/// Status text reported while no issue is active.
const ALL_OPERATIONAL: &str = "All systems operational.";

/// Aggregate usage over the whole registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageSummary {
    /// Sum of every light's simulated draw, in Watts.
    pub total_watts: f64,
    /// Number of lights currently switched on.
    pub lights_on: usize,
}

/// Simulated draw of one room, paired with the room for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomUsage {
    /// The room.
    pub room: Room,
    /// Simulated draw of this room's light, in Watts.
    pub watts: f64,
}

impl RoomUsage {
    /// Returns the display label for this entry.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.room.label()
    }
}

/// Returns the simulated draw of a single light, in Watts.
///
/// A light that is off draws nothing; an on light draws proportionally to
/// its brightness, up to [`MAX_WATTS_PER_LIGHT`].
#[must_use]
pub fn wattage(light: LightState) -> f64 {
    if light.is_on() {
        light.brightness().as_fraction() * MAX_WATTS_PER_LIGHT
    } else {
        0.0
    }
}

/// Sums usage over all rooms.
#[must_use]
pub fn total_usage(registry: &LightRegistry) -> UsageSummary {
    let mut summary = UsageSummary {
        total_watts: 0.0,
        lights_on: 0,
    };
    for (_, light) in registry.iter() {
        summary.total_watts += wattage(light);
        if light.is_on() {
            summary.lights_on += 1;
        }
    }
    summary
}

/// Projects the current draw over a full day, in kWh.
///
/// This is a constant-load-for-24-hours simulation, not a metering model.
#[must_use]
pub fn daily_estimate_kwh(registry: &LightRegistry) -> f64 {
    total_usage(registry).total_watts * HOURS_PER_DAY / WATTS_PER_KILOWATT
}

/// Returns each room's simulated draw, in fixed room order.
#[must_use]
pub fn per_room_breakdown(registry: &LightRegistry) -> Vec<RoomUsage> {
    registry
        .iter()
        .map(|(room, light)| RoomUsage {
            room,
            watts: wattage(light),
        })
        .collect()
}

/// Returns `true` if total draw exceeds [`USAGE_WARNING_THRESHOLD_WATTS`].
#[must_use]
pub fn is_over_threshold(registry: &LightRegistry) -> bool {
    total_usage(registry).total_watts > USAGE_WARNING_THRESHOLD_WATTS
}

/// Returns the currently active system issues.
///
/// The only issue the panel reports is "No lights are on", raised while
/// every light is off.
#[must_use]
pub fn active_issues(registry: &LightRegistry) -> Vec<&'static str> {
    let mut issues = Vec::new();
    if total_usage(registry).lights_on == 0 {
        issues.push(NO_LIGHTS_ISSUE);
    }
    issues
}

/// Returns the system status line shown on the dashboard.
///
/// Active issues are joined by `", "`; with no issues the message is
/// `"All systems operational."`.
#[must_use]
pub fn system_status_message(registry: &LightRegistry) -> String {
    let issues = active_issues(registry);
    if issues.is_empty() {
        ALL_OPERATIONAL.to_string()
    } else {
        issues.join(", ")
    }
}
