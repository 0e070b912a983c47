// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UI color theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// The user's preferred color theme.
///
/// Persisted as the lowercase strings `"light"` and `"dark"`. The panel
/// defaults to the dark theme.
///
/// # Examples
///
/// ```
/// use lumipanel::types::Theme;
///
/// assert_eq!(Theme::Light.as_str(), "light");
/// assert_eq!(Theme::default(), Theme::Dark);
/// assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light theme.
    Light,
    /// Dark theme (the default).
    #[default]
    Dark,
}

impl Theme {
    /// Returns the persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ValueError::UnknownTheme(s.to_string())),
        }
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_as_str() {
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn theme_from_str() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    }

    #[test]
    fn theme_from_str_unknown() {
        let result = "sepia".parse::<Theme>();
        assert!(matches!(result, Err(ValueError::UnknownTheme(_))));
    }

    #[test]
    fn theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn theme_serde_round_trip() {
        let json = serde_json::to_string(&Theme::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Theme::Light);
    }

    #[test]
    fn theme_deserialize_rejects_unknown() {
        let result: Result<Theme, _> = serde_json::from_str("\"sepia\"");
        assert!(result.is_err());
    }
}
