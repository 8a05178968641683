// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation for domain entities.

use crate::error::DomainError;
use crate::types::{Guest, Room};

/// Validates room field constraints.
///
/// # Errors
///
/// Returns an error if:
/// - The room number is empty or whitespace
/// - The floor is negative
/// - The price is not a positive, finite amount
/// - The capacity is not positive
pub fn validate_room_fields(room: &Room) -> Result<(), DomainError> {
    if room.number.trim().is_empty() {
        return Err(DomainError::InvalidRoomNumber(String::from(
            "Room number cannot be empty",
        )));
    }
    if room.floor < 0 {
        return Err(DomainError::InvalidFloor { floor: room.floor });
    }
    validate_price(room.price)?;
    if room.capacity <= 0 {
        return Err(DomainError::InvalidCapacity {
            capacity: room.capacity,
        });
    }
    Ok(())
}

/// Validates guest field constraints.
///
/// # Errors
///
/// Returns an error if the name, email, or phone is empty or malformed.
pub fn validate_guest_fields(guest: &Guest) -> Result<(), DomainError> {
    if guest.name.trim().is_empty() {
        return Err(DomainError::InvalidGuestName(String::from(
            "Guest name cannot be empty",
        )));
    }
    validate_email(&guest.email)?;
    if guest.phone.trim().is_empty() {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone number cannot be empty",
        )));
    }
    Ok(())
}

/// Validates staff registration fields.
///
/// # Errors
///
/// Returns an error if the name is empty or the email is malformed.
pub fn validate_staff_fields(name: &str, email: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidStaffName(String::from(
            "Staff name cannot be empty",
        )));
    }
    validate_email(email)
}

/// Validates an email address.
///
/// This is a structural check (non-empty local part, domain with a dot),
/// not a deliverability check.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let malformed = || DomainError::InvalidEmail(format!("'{email}' is not a valid email address"));

    let (local, domain) = email.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(malformed());
    }
    if email.contains(char::is_whitespace) {
        return Err(malformed());
    }
    Ok(())
}

/// Validates a per-night room price.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrice` if the price is not a positive,
/// finite amount.
pub fn validate_price(price: f64) -> Result<(), DomainError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::InvalidPrice { price });
    }
    Ok(())
}

/// Validates a payment amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the amount is not a positive,
/// finite amount.
pub fn validate_amount(amount: f64) -> Result<(), DomainError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DomainError::InvalidAmount { amount });
    }
    Ok(())
}
