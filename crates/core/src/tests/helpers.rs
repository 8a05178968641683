// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use innkeep_domain::{
    Booking, BookingStatus, Payment, PaymentMethod, PaymentStatus, Room, RoomStatus, RoomType,
    parse_iso_date,
};
use time::Date;

pub fn create_test_room(status: RoomStatus) -> Room {
    Room::with_id(101, "101", RoomType::Standard, 1, 200.0, 2, status)
}

pub fn create_test_booking(status: BookingStatus) -> Booking {
    Booking::with_id(
        1,
        7,
        101,
        date("2025-06-01"),
        date("2025-06-04"),
        600.0,
        status,
        Some(String::from("2025-05-20 12:00:00")),
    )
}

pub fn create_test_payment() -> Payment {
    Payment::with_id(
        1,
        1,
        600.0,
        PaymentMethod::Card,
        PaymentStatus::Paid,
        Some(String::from("2025-05-20 12:05:00")),
    )
}

pub fn date(s: &str) -> Date {
    parse_iso_date(s).unwrap()
}
