// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a booking.
///
/// Transitions are guarded by an explicit table; arbitrary status writes
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Initial state after reservation. Room is held, payment outstanding.
    #[default]
    Pending,
    /// Payment recorded. The stay is guaranteed.
    Confirmed,
    /// Reservation withdrawn. Terminal; the room is released.
    Cancelled,
    /// Stay finished. Terminal; the room is released.
    Completed,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this booking status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Pending → Confirmed | Cancelled | Completed
    /// - Confirmed → Cancelled | Completed
    ///
    /// Cancelled and Completed are terminal. Self-transitions are rejected.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending | Self::Confirmed, Self::Cancelled | Self::Completed)
        )
    }

    /// Returns whether a booking in this status holds its room.
    ///
    /// Cancelled and completed bookings no longer count toward room
    /// occupancy.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Returns whether entering this status releases the booked room.
    #[must_use]
    pub const fn releases_room(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }
}
