// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::BookingStatus;
use crate::room_status::RoomStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Room number is empty or invalid.
    InvalidRoomNumber(String),
    /// Room type string is not recognized.
    InvalidRoomType(String),
    /// Room status string is not recognized.
    InvalidRoomStatus(String),
    /// Floor must be zero or positive.
    InvalidFloor {
        /// The invalid floor value.
        floor: i32,
    },
    /// Nightly price must be a positive, finite amount.
    InvalidPrice {
        /// The invalid price value.
        price: f64,
    },
    /// Capacity must be positive.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: i32,
    },
    /// Guest name is empty or invalid.
    InvalidGuestName(String),
    /// Guest email is malformed.
    InvalidEmail(String),
    /// Guest phone is empty or invalid.
    InvalidPhone(String),
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Payment method string is not recognized.
    InvalidPaymentMethod(String),
    /// Payment status string is not recognized.
    InvalidPaymentStatus(String),
    /// Payment amount must be a positive, finite amount.
    InvalidAmount {
        /// The invalid amount value.
        amount: f64,
    },
    /// Check-out must be strictly after check-in.
    InvalidStayDates {
        /// The requested check-in date.
        check_in: time::Date,
        /// The requested check-out date.
        check_out: time::Date,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A room number is already in use.
    DuplicateRoomNumber(String),
    /// A guest email is already registered.
    DuplicateGuestEmail(String),
    /// The room cannot be reserved because it is occupied.
    RoomOccupied {
        /// The room identifier.
        room_id: i64,
    },
    /// The room cannot be reserved because it is under maintenance.
    RoomUnderMaintenance {
        /// The room identifier.
        room_id: i64,
    },
    /// The requested booking status transition is not allowed.
    IllegalBookingTransition {
        /// The current booking status.
        from: BookingStatus,
        /// The requested booking status.
        to: BookingStatus,
    },
    /// The room status cannot be set manually.
    RoomStatusNotOverridable {
        /// The current room status.
        from: RoomStatus,
        /// The requested room status.
        to: RoomStatus,
    },
    /// A payment already exists for the booking.
    PaymentAlreadyExists {
        /// The booking identifier.
        booking_id: i64,
    },
    /// The booking cannot accept a payment in its current status.
    BookingNotPayable {
        /// The booking identifier.
        booking_id: i64,
        /// The current booking status.
        status: BookingStatus,
    },
    /// The room cannot be deleted while bookings reference it.
    RoomHasBookings {
        /// The room identifier.
        room_id: i64,
    },
    /// The guest cannot be deleted while bookings reference them.
    GuestHasBookings {
        /// The guest identifier.
        guest_id: i64,
    },
    /// Staff role string is not recognized.
    InvalidRole(String),
    /// Staff name is empty or invalid.
    InvalidStaffName(String),
}

impl std::fmt::Display for DomainError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoomNumber(msg) => write!(f, "Invalid room number: {msg}"),
            Self::InvalidRoomType(msg) => write!(f, "Invalid room type: {msg}"),
            Self::InvalidRoomStatus(msg) => write!(f, "Invalid room status: {msg}"),
            Self::InvalidFloor { floor } => {
                write!(f, "Invalid floor: {floor}. Must be zero or positive")
            }
            Self::InvalidPrice { price } => {
                write!(f, "Invalid price: {price}. Must be a positive amount")
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be greater than 0")
            }
            Self::InvalidGuestName(msg) => write!(f, "Invalid guest name: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone: {msg}"),
            Self::InvalidBookingStatus(msg) => write!(f, "Invalid booking status: {msg}"),
            Self::InvalidPaymentMethod(msg) => write!(f, "Invalid payment method: {msg}"),
            Self::InvalidPaymentStatus(msg) => write!(f, "Invalid payment status: {msg}"),
            Self::InvalidAmount { amount } => {
                write!(f, "Invalid amount: {amount}. Must be a positive amount")
            }
            Self::InvalidStayDates {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be strictly after check-in date {check_in}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DuplicateRoomNumber(number) => {
                write!(f, "Room number '{number}' already exists")
            }
            Self::DuplicateGuestEmail(email) => {
                write!(f, "Guest with email '{email}' already exists")
            }
            Self::RoomOccupied { room_id } => {
                write!(f, "Room {room_id} is already occupied")
            }
            Self::RoomUnderMaintenance { room_id } => {
                write!(f, "Room {room_id} is under maintenance")
            }
            Self::IllegalBookingTransition { from, to } => {
                write!(f, "Booking status cannot change from '{from}' to '{to}'")
            }
            Self::RoomStatusNotOverridable { from, to } => {
                write!(
                    f,
                    "Room status cannot be set from '{from}' to '{to}' manually"
                )
            }
            Self::PaymentAlreadyExists { booking_id } => {
                write!(f, "Payment already exists for booking {booking_id}")
            }
            Self::BookingNotPayable { booking_id, status } => {
                write!(
                    f,
                    "Booking {booking_id} cannot accept a payment in status '{status}'"
                )
            }
            Self::RoomHasBookings { room_id } => {
                write!(f, "Room {room_id} cannot be deleted: bookings reference it")
            }
            Self::GuestHasBookings { guest_id } => {
                write!(
                    f,
                    "Guest {guest_id} cannot be deleted: bookings reference them"
                )
            }
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidStaffName(msg) => write!(f, "Invalid staff name: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
