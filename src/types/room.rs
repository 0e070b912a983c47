// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room identifiers for the lighting zones.
//!
//! The panel controls a fixed set of rooms. Modelling them as an enum makes
//! unknown room keys unrepresentable: mutation operations cannot be handed
//! an identifier outside the set, and the set never changes at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;

/// A named zone with one controllable light.
///
/// The set of rooms is fixed for the lifetime of a session. Iteration order
/// (and the order of every per-room report) is the declaration order below.
///
/// # Examples
///
/// ```
/// use lumipanel::types::Room;
///
/// assert_eq!(Room::LivingRoom.as_key(), "living-room");
/// assert_eq!(Room::LivingRoom.label(), "Living Room");
/// assert_eq!(Room::ALL.len(), 4);
///
/// let room: Room = "kitchen".parse().unwrap();
/// assert_eq!(room, Room::Kitchen);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    /// The living room.
    LivingRoom,
    /// The bedroom.
    Bedroom,
    /// The kitchen.
    Kitchen,
    /// The study.
    Study,
}

impl Room {
    /// All rooms, in fixed display order.
    pub const ALL: [Self; 4] = [Self::LivingRoom, Self::Bedroom, Self::Kitchen, Self::Study];

    /// Number of rooms.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the storage key for this room.
    ///
    /// Keys are kebab-case and double as the per-room identifiers in
    /// persisted snapshots.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::LivingRoom => "living-room",
            Self::Bedroom => "bedroom",
            Self::Kitchen => "kitchen",
            Self::Study => "study",
        }
    }

    /// Returns the human-readable label for this room.
    ///
    /// This is the storage key with separators replaced by spaces and each
    /// word capitalized.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Bedroom => "Bedroom",
            Self::Kitchen => "Kitchen",
            Self::Study => "Study",
        }
    }

    /// Returns the position of this room in the fixed order.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::LivingRoom => 0,
            Self::Bedroom => 1,
            Self::Kitchen => 2,
            Self::Study => 3,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for Room {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "living-room" => Ok(Self::LivingRoom),
            "bedroom" => Ok(Self::Bedroom),
            "kitchen" => Ok(Self::Kitchen),
            "study" => Ok(Self::Study),
            _ => Err(ValueError::UnknownRoom(s.to_string())),
        }
    }
}

impl Serialize for Room {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_key())
    }
}

impl<'de> Deserialize<'de> for Room {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_keys() {
        assert_eq!(Room::LivingRoom.as_key(), "living-room");
        assert_eq!(Room::Bedroom.as_key(), "bedroom");
        assert_eq!(Room::Kitchen.as_key(), "kitchen");
        assert_eq!(Room::Study.as_key(), "study");
    }

    #[test]
    fn room_labels_capitalize_each_word() {
        assert_eq!(Room::LivingRoom.label(), "Living Room");
        assert_eq!(Room::Bedroom.label(), "Bedroom");
        assert_eq!(Room::Kitchen.label(), "Kitchen");
        assert_eq!(Room::Study.label(), "Study");
    }

    #[test]
    fn room_from_str() {
        for room in Room::ALL {
            assert_eq!(room.as_key().parse::<Room>().unwrap(), room);
        }
    }

    #[test]
    fn room_from_str_unknown() {
        let result = "garage".parse::<Room>();
        assert!(matches!(result, Err(ValueError::UnknownRoom(_))));
    }

    #[test]
    fn room_indices_match_fixed_order() {
        for (i, room) in Room::ALL.iter().enumerate() {
            assert_eq!(room.index(), i);
        }
    }

    #[test]
    fn room_serde_uses_key() {
        let json = serde_json::to_string(&Room::LivingRoom).unwrap();
        assert_eq!(json, "\"living-room\"");
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Room::LivingRoom);
    }

    #[test]
    fn room_display() {
        assert_eq!(Room::Study.to_string(), "study");
    }
}
