// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the availability state of a room.
///
/// `Occupied` is written exclusively by the booking lifecycle. Staff may
/// override between `Available` and `Maintenance` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// The room can be reserved.
    #[default]
    Available,
    /// An active booking holds the room.
    Occupied,
    /// Staff override: the room is out of service.
    Maintenance,
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidRoomStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl RoomStatus {
    /// Converts this room status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }

    /// Returns whether a room in this status accepts new reservations.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Checks if staff may manually set this status to another.
    ///
    /// Manual overrides move between `Available` and `Maintenance` in either
    /// direction. `Occupied` can neither be entered nor left manually; the
    /// booking lifecycle owns it.
    #[must_use]
    pub const fn can_override_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Available, Self::Maintenance) | (Self::Maintenance, Self::Available)
        )
    }
}
