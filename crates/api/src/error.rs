// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use innkeep::CoreError;
use innkeep_domain::DomainError;
use innkeep_persistence::PersistenceError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No staff account exists for the presented email.
    UnknownStaff {
        /// The email that was presented.
        email: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::UnknownStaff { email } => {
                write!(f, "No staff account found for '{email}'")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract:
/// validation (400), conflict (409), not-found (404), authentication (401),
/// internal (500).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    Validation {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A uniqueness or state rule was violated.
    Conflict {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    NotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Validation { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::NotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::UnknownStaff { email } => Self::NotFound {
                resource_type: String::from("Staff"),
                message: format!("No staff account found for '{email}'"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRoomNumber(msg) => ApiError::Validation {
            field: String::from("number"),
            message: msg,
        },
        DomainError::InvalidRoomType(msg) => ApiError::Validation {
            field: String::from("type"),
            message: msg,
        },
        DomainError::InvalidRoomStatus(msg) => ApiError::Validation {
            field: String::from("status"),
            message: msg,
        },
        DomainError::InvalidFloor { floor } => ApiError::Validation {
            field: String::from("floor"),
            message: format!("Invalid floor: {floor}. Must be zero or positive"),
        },
        DomainError::InvalidPrice { price } => ApiError::Validation {
            field: String::from("price"),
            message: format!("Invalid price: {price}. Must be a positive amount"),
        },
        DomainError::InvalidCapacity { capacity } => ApiError::Validation {
            field: String::from("capacity"),
            message: format!("Invalid capacity: {capacity}. Must be greater than 0"),
        },
        DomainError::InvalidGuestName(msg) | DomainError::InvalidStaffName(msg) => {
            ApiError::Validation {
                field: String::from("name"),
                message: msg,
            }
        }
        DomainError::InvalidEmail(msg) => ApiError::Validation {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidPhone(msg) => ApiError::Validation {
            field: String::from("phone"),
            message: msg,
        },
        DomainError::InvalidBookingStatus(msg) => ApiError::Validation {
            field: String::from("status"),
            message: msg,
        },
        DomainError::InvalidPaymentMethod(msg) => ApiError::Validation {
            field: String::from("method"),
            message: msg,
        },
        DomainError::InvalidPaymentStatus(msg) => ApiError::Validation {
            field: String::from("status"),
            message: msg,
        },
        DomainError::InvalidAmount { amount } => ApiError::Validation {
            field: String::from("amount"),
            message: format!("Invalid amount: {amount}. Must be a positive amount"),
        },
        DomainError::InvalidStayDates {
            check_in,
            check_out,
        } => ApiError::Validation {
            field: String::from("checkOut"),
            message: format!(
                "Check-out date {check_out} must be strictly after check-in date {check_in}"
            ),
        },
        DomainError::DateParseError { date_string, error } => ApiError::Validation {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidRole(msg) => ApiError::Validation {
            field: String::from("role"),
            message: msg,
        },
        DomainError::DuplicateRoomNumber(number) => ApiError::Conflict {
            rule: String::from("unique_room_number"),
            message: format!("Room number '{number}' already exists"),
        },
        DomainError::DuplicateGuestEmail(email) => ApiError::Conflict {
            rule: String::from("unique_guest_email"),
            message: format!("Guest with email '{email}' already exists"),
        },
        DomainError::RoomOccupied { room_id } => ApiError::Conflict {
            rule: String::from("room_available"),
            message: format!("Room {room_id} is already occupied"),
        },
        DomainError::RoomUnderMaintenance { room_id } => ApiError::Conflict {
            rule: String::from("room_available"),
            message: format!("Room {room_id} is under maintenance"),
        },
        DomainError::IllegalBookingTransition { from, to } => ApiError::Conflict {
            rule: String::from("booking_transition"),
            message: format!("Booking status cannot change from '{from}' to '{to}'"),
        },
        DomainError::RoomStatusNotOverridable { from, to } => ApiError::Conflict {
            rule: String::from("room_status_override"),
            message: format!("Room status cannot be set from '{from}' to '{to}' manually"),
        },
        DomainError::PaymentAlreadyExists { booking_id } => ApiError::Conflict {
            rule: String::from("single_payment"),
            message: format!("Payment already exists for booking {booking_id}"),
        },
        DomainError::BookingNotPayable { booking_id, status } => ApiError::Conflict {
            rule: String::from("booking_payable"),
            message: format!("Booking {booking_id} cannot accept a payment in status '{status}'"),
        },
        DomainError::RoomHasBookings { room_id } => ApiError::Conflict {
            rule: String::from("room_referenced"),
            message: format!("Room {room_id} cannot be deleted: bookings reference it"),
        },
        DomainError::GuestHasBookings { guest_id } => ApiError::Conflict {
            rule: String::from("guest_referenced"),
            message: format!("Guest {guest_id} cannot be deleted: bookings reference them"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal {
            message: format!("Internal error: {msg}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Uniqueness violations and lost guarded updates surface as conflicts;
/// everything infrastructural becomes an internal error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UniqueViolation(msg) => ApiError::Conflict {
            rule: String::from("unique_constraint"),
            message: msg,
        },
        PersistenceError::RoomStatusConflict { room_id } => ApiError::Conflict {
            rule: String::from("room_available"),
            message: format!("Room {room_id} is already occupied"),
        },
        PersistenceError::BookingStatusConflict { booking_id } => ApiError::Conflict {
            rule: String::from("booking_transition"),
            message: format!("Booking {booking_id} changed status concurrently"),
        },
        PersistenceError::RoomReferenced { room_id } => ApiError::Conflict {
            rule: String::from("room_referenced"),
            message: format!("Room {room_id} cannot be deleted: bookings reference it"),
        },
        PersistenceError::GuestReferenced { guest_id } => ApiError::Conflict {
            rule: String::from("guest_referenced"),
            message: format!("Guest {guest_id} cannot be deleted: bookings reference them"),
        },
        PersistenceError::NotFound(msg) => ApiError::NotFound {
            resource_type: String::from("Resource"),
            message: msg,
        },
        PersistenceError::SessionNotFound(msg) | PersistenceError::SessionExpired(msg) => {
            ApiError::AuthenticationFailed { reason: msg }
        }
        _ => ApiError::Internal {
            message: format!("Persistence error: {err}"),
        },
    }
}
