// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::auth::{AuthenticatedStaff, Role};
use crate::handlers::{create_booking, create_guest, create_room};
use crate::request_response::{CreateBookingRequest, CreateGuestRequest, CreateRoomRequest};
use innkeep_persistence::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_staff() -> AuthenticatedStaff {
    AuthenticatedStaff::new(1, String::from("Front Desk"), Role::Reception)
}

pub fn create_test_room_request(number: &str) -> CreateRoomRequest {
    CreateRoomRequest {
        number: number.to_string(),
        room_type: String::from("standard"),
        floor: 1,
        price: 200.0,
        capacity: 2,
    }
}

pub fn create_test_guest_request(email: &str) -> CreateGuestRequest {
    CreateGuestRequest {
        name: String::from("Ada Lovelace"),
        email: email.to_string(),
        phone: String::from("555-0100"),
    }
}

/// Creates a room and a guest, then books the room for three nights.
/// Returns (`room_id`, `guest_id`, `booking_id`).
pub fn book_standard_room(persistence: &mut Persistence) -> (i64, i64, i64) {
    let staff: AuthenticatedStaff = create_test_staff();

    let room = create_room(persistence, &staff, create_test_room_request("101"))
        .expect("Failed to create room");
    let guest = create_guest(
        persistence,
        &staff,
        create_test_guest_request("ada@example.com"),
    )
    .expect("Failed to create guest");

    let booking = create_booking(
        persistence,
        &staff,
        &CreateBookingRequest {
            guest_id: guest.guest.id,
            room_id: room.room.id,
            check_in: String::from("2025-06-01"),
            check_out: String::from("2025-06-04"),
            total_price: None,
        },
    )
    .expect("Failed to create booking");

    (room.room.id, guest.guest.id, booking.booking.id)
}
