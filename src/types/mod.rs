// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the lighting panel.
//!
//! This module provides type-safe representations of values used across the
//! panel. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`Room`] - The fixed set of lighting zones
//! - [`Brightness`] - Light level (0-100%)
//! - [`Theme`] - UI color theme preference

mod brightness;
mod room;
mod theme;

pub use brightness::Brightness;
pub use room::Room;
pub use theme::Theme;
