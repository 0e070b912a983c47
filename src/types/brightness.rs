// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness type for light level control.
//!
//! This module provides a type-safe representation of brightness values,
//! ensuring values are always within the valid range of 0-100%.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// Light level as a percentage (0-100).
///
/// A value of 0 is fully dimmed and 100 is full brightness. A light that is
/// switched off keeps its last brightness, so turning it back on resumes at
/// the previous level.
///
/// # Examples
///
/// ```
/// use lumipanel::types::Brightness;
///
/// // Create a brightness at 75%
/// let level = Brightness::new(75).unwrap();
/// assert_eq!(level.value(), 75);
///
/// // Use predefined values
/// let min = Brightness::MIN;
/// let max = Brightness::MAX;
/// assert_eq!(min.value(), 0);
/// assert_eq!(max.value(), 100);
///
/// // Invalid values return error
/// assert!(Brightness::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness value (100%).
    pub const MAX: Self = Self(100);

    /// Default brightness for a freshly initialized light (50%).
    pub const DEFAULT: Self = Self(50);

    /// Creates a new brightness value.
    ///
    /// # Arguments
    ///
    /// * `value` - The brightness percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumipanel::types::Brightness;
    ///
    /// let level = Brightness::new(50).unwrap();
    /// assert_eq!(level.value(), 50);
    /// ```
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to the valid range.
    ///
    /// Values above 100 are clamped to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumipanel::types::Brightness;
    ///
    /// let level = Brightness::clamped(150);
    /// assert_eq!(level.value(), 100);
    /// ```
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a brightness value from an untrusted signed input, clamping
    /// to the valid range.
    ///
    /// UI sliders and form fields deliver raw integers that may be negative
    /// or above 100. Negative inputs clamp to 0 and inputs above 100 clamp
    /// to 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumipanel::types::Brightness;
    ///
    /// assert_eq!(Brightness::saturating_from(-20).value(), 0);
    /// assert_eq!(Brightness::saturating_from(60).value(), 60);
    /// assert_eq!(Brightness::saturating_from(400).value(), 100);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn saturating_from(value: i64) -> Self {
        if value < 0 {
            Self(0)
        } else if value > 100 {
            Self(100)
        } else {
            // Safe: value is within [0, 100]
            Self(value as u8)
        }
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float between 0.0 and 1.0.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Brightness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Brightness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_valid_values() {
        for v in 0..=100 {
            let level = Brightness::new(v).unwrap();
            assert_eq!(level.value(), v);
        }
    }

    #[test]
    fn brightness_invalid_value() {
        let result = Brightness::new(101);
        assert!(result.is_err());
    }

    #[test]
    fn brightness_clamped() {
        assert_eq!(Brightness::clamped(50).value(), 50);
        assert_eq!(Brightness::clamped(150).value(), 100);
        assert_eq!(Brightness::clamped(255).value(), 100);
    }

    #[test]
    fn brightness_saturating_from() {
        assert_eq!(Brightness::saturating_from(-1).value(), 0);
        assert_eq!(Brightness::saturating_from(0).value(), 0);
        assert_eq!(Brightness::saturating_from(100).value(), 100);
        assert_eq!(Brightness::saturating_from(101).value(), 100);
        assert_eq!(Brightness::saturating_from(i64::MAX).value(), 100);
        assert_eq!(Brightness::saturating_from(i64::MIN).value(), 0);
    }

    #[test]
    fn brightness_as_fraction() {
        assert!((Brightness::MIN.as_fraction() - 0.0).abs() < f64::EPSILON);
        assert!((Brightness::MAX.as_fraction() - 1.0).abs() < f64::EPSILON);
        assert!((Brightness::new(50).unwrap().as_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn brightness_default_is_half() {
        assert_eq!(Brightness::default(), Brightness::DEFAULT);
        assert_eq!(Brightness::DEFAULT.value(), 50);
    }

    #[test]
    fn brightness_display() {
        assert_eq!(Brightness::new(75).unwrap().to_string(), "75%");
    }

    #[test]
    fn brightness_serde_round_trip() {
        let level = Brightness::new(80).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, "80");
        let back: Brightness = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }

    #[test]
    fn brightness_deserialize_rejects_out_of_range() {
        let result: Result<Brightness, _> = serde_json::from_str("101");
        assert!(result.is_err());
    }

    #[test]
    fn brightness_ordering() {
        assert!(Brightness::MIN < Brightness::MAX);
        assert!(Brightness::new(50).unwrap() < Brightness::new(75).unwrap());
    }
}
