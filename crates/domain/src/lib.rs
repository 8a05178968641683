// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_status;
mod error;
mod room_status;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_status::BookingStatus;
pub use room_status::RoomStatus;

// Re-export public types
pub use error::DomainError;
pub use stay::{format_iso_date, nights, parse_iso_date, total_price};
pub use types::{Booking, Guest, Payment, PaymentMethod, PaymentStatus, Room, RoomType};
pub use validation::{
    validate_amount, validate_email, validate_guest_fields, validate_price, validate_room_fields,
    validate_staff_fields,
};
