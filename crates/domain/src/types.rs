// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::room_status::RoomStatus;
use serde::{Deserialize, Serialize};
use time::Date;

/// Represents a room type classification.
///
/// Room types are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Standard room.
    Standard,
    /// Deluxe room.
    Deluxe,
    /// Suite.
    Suite,
    /// Presidential suite.
    Presidential,
}

impl RoomType {
    /// Parses a room type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid room type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            "presidential" => Ok(Self::Presidential),
            _ => Err(DomainError::InvalidRoomType(format!(
                "Unknown room type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this room type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deluxe => "deluxe",
            Self::Suite => "suite",
            Self::Presidential => "presidential",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash at the desk.
    Cash,
    /// Card at the desk.
    Card,
    /// Bank transfer.
    BankTransfer,
    /// Stripe checkout.
    Stripe,
}

impl PaymentMethod {
    /// Parses a payment method from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid payment method.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "bank_transfer" => Ok(Self::BankTransfer),
            "stripe" => Ok(Self::Stripe),
            _ => Err(DomainError::InvalidPaymentMethod(format!(
                "Unknown payment method: {s}"
            ))),
        }
    }

    /// Returns the string representation of this payment method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::Stripe => "stripe",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the settlement state of a payment record.
///
/// Payments are recorded, not processed against a gateway; records created
/// by the lifecycle are `Paid`. The remaining states exist for imported or
/// corrected records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Recorded but not settled.
    Pending,
    /// Settled.
    Paid,
    /// Settlement failed.
    Failed,
    /// Settled, then returned.
    Refunded,
}

impl PaymentStatus {
    /// Parses a payment status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid payment status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(DomainError::InvalidPaymentStatus(format!(
                "Unknown payment status: {s}"
            ))),
        }
    }

    /// Returns the string representation of this payment status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a hotel room.
///
/// The room number is unique within the hotel. `status` is written by the
/// booking lifecycle, with a staff override restricted to the
/// available/maintenance pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the room has not been persisted yet.
    pub room_id: Option<i64>,
    /// The room number (e.g., "101"). Unique within the hotel.
    pub number: String,
    /// The room type classification.
    pub room_type: RoomType,
    /// The floor the room is on (zero or positive).
    pub floor: i32,
    /// The per-night rate.
    pub price: f64,
    /// The maximum number of guests.
    pub capacity: i32,
    /// The availability state.
    pub status: RoomStatus,
}

// Two Rooms are equal if they have the same number, regardless of their IDs.
impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Room {
    /// Creates a new `Room` without a persisted ID.
    ///
    /// New rooms start `Available`.
    #[must_use]
    pub fn new(number: &str, room_type: RoomType, floor: i32, price: f64, capacity: i32) -> Self {
        Self {
            room_id: None,
            number: number.to_string(),
            room_type,
            floor,
            price,
            capacity,
            status: RoomStatus::Available,
        }
    }

    /// Creates a `Room` with an existing persisted ID.
    #[must_use]
    pub fn with_id(
        room_id: i64,
        number: &str,
        room_type: RoomType,
        floor: i32,
        price: f64,
        capacity: i32,
        status: RoomStatus,
    ) -> Self {
        Self {
            room_id: Some(room_id),
            number: number.to_string(),
            room_type,
            floor,
            price,
            capacity,
            status,
        }
    }
}

/// Represents a hotel guest.
///
/// The email is the unique identifier for lookups and is normalized to
/// lowercase for case-insensitive uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the guest has not been persisted yet.
    pub guest_id: Option<i64>,
    /// The guest's name (informational, not unique).
    pub name: String,
    /// The guest's email (unique, normalized to lowercase).
    pub email: String,
    /// The guest's phone number.
    pub phone: String,
    /// Creation timestamp assigned by the database.
    pub created_at: Option<String>,
}

// Two Guests are equal if they have the same email, regardless of their IDs.
impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Guest {
    /// Creates a new `Guest` without a persisted ID.
    ///
    /// The email is normalized to lowercase.
    #[must_use]
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            guest_id: None,
            name: name.to_string(),
            email: email.to_lowercase(),
            phone: phone.to_string(),
            created_at: None,
        }
    }

    /// Creates a `Guest` with an existing persisted ID.
    #[must_use]
    pub fn with_id(
        guest_id: i64,
        name: &str,
        email: &str,
        phone: &str,
        created_at: Option<String>,
    ) -> Self {
        Self {
            guest_id: Some(guest_id),
            name: name.to_string(),
            email: email.to_lowercase(),
            phone: phone.to_string(),
            created_at,
        }
    }
}

/// Represents a reservation of one room by one guest for a date range.
///
/// `total_price` is fixed at creation time; later room price edits never
/// change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the booking has not been persisted yet.
    pub booking_id: Option<i64>,
    /// The guest holding this booking.
    pub guest_id: i64,
    /// The reserved room.
    pub room_id: i64,
    /// The check-in date.
    pub check_in: Date,
    /// The check-out date (strictly after check-in).
    pub check_out: Date,
    /// The total price, computed as nights × room price at creation.
    pub total_price: f64,
    /// The lifecycle state.
    pub status: BookingStatus,
    /// Creation timestamp assigned by the database.
    pub created_at: Option<String>,
}

impl Booking {
    /// Creates a new pending `Booking` without a persisted ID.
    #[must_use]
    pub const fn new(
        guest_id: i64,
        room_id: i64,
        check_in: Date,
        check_out: Date,
        total_price: f64,
    ) -> Self {
        Self {
            booking_id: None,
            guest_id,
            room_id,
            check_in,
            check_out,
            total_price,
            status: BookingStatus::Pending,
            created_at: None,
        }
    }

    /// Creates a `Booking` with an existing persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        booking_id: i64,
        guest_id: i64,
        room_id: i64,
        check_in: Date,
        check_out: Date,
        total_price: f64,
        status: BookingStatus,
        created_at: Option<String>,
    ) -> Self {
        Self {
            booking_id: Some(booking_id),
            guest_id,
            room_id,
            check_in,
            check_out,
            total_price,
            status,
            created_at,
        }
    }
}

/// Represents a financial record attached 1:1 to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the payment has not been persisted yet.
    pub payment_id: Option<i64>,
    /// The booking this payment settles (unique — one payment per booking).
    pub booking_id: i64,
    /// The paid amount.
    pub amount: f64,
    /// The payment method.
    pub method: PaymentMethod,
    /// The settlement state.
    pub status: PaymentStatus,
    /// Creation timestamp assigned by the database.
    pub created_at: Option<String>,
}

impl Payment {
    /// Creates a new `Payment` without a persisted ID.
    #[must_use]
    pub const fn new(
        booking_id: i64,
        amount: f64,
        method: PaymentMethod,
        status: PaymentStatus,
    ) -> Self {
        Self {
            payment_id: None,
            booking_id,
            amount,
            method,
            status,
            created_at: None,
        }
    }

    /// Creates a `Payment` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        payment_id: i64,
        booking_id: i64,
        amount: f64,
        method: PaymentMethod,
        status: PaymentStatus,
        created_at: Option<String>,
    ) -> Self {
        Self {
            payment_id: Some(payment_id),
            booking_id,
            amount,
            method,
            status,
            created_at,
        }
    }
}
