// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::Persistence;
use innkeep::{BookingPlan, plan_booking};
use innkeep_domain::{Guest, Room, RoomType, parse_iso_date};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Inserts a standard room and returns its ID.
pub fn insert_room(persistence: &mut Persistence, number: &str) -> i64 {
    let room: Room = Room::new(number, RoomType::Standard, 1, 200.0, 2);
    persistence.create_room(&room).expect("Failed to create room")
}

/// Inserts a guest and returns their ID.
pub fn insert_guest(persistence: &mut Persistence, email: &str) -> i64 {
    let guest: Guest = Guest::new("Test Guest", email, "555-0100");
    persistence
        .create_guest(&guest)
        .expect("Failed to create guest")
}

/// Reserves a room for a three-night stay and returns the booking ID.
pub fn reserve_three_nights(persistence: &mut Persistence, room_id: i64, guest_id: i64) -> i64 {
    let room: Room = persistence
        .get_room(room_id)
        .expect("Failed to load room")
        .expect("Room missing");
    let plan: BookingPlan = plan_booking(
        &room,
        guest_id,
        parse_iso_date("2025-06-01").unwrap(),
        parse_iso_date("2025-06-04").unwrap(),
    )
    .expect("Failed to plan booking");
    persistence
        .reserve_room(&plan)
        .expect("Failed to reserve room")
}
