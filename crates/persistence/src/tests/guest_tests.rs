// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_persistence, insert_guest, insert_room, reserve_three_nights};
use crate::{GuestWithBookings, Persistence, PersistenceError};
use innkeep_domain::Guest;

#[test]
fn test_create_and_get_guest() {
    let mut persistence: Persistence = create_test_persistence();

    let guest_id: i64 = insert_guest(&mut persistence, "ada@example.com");
    let guest: Guest = persistence.get_guest(guest_id).unwrap().unwrap();

    assert_eq!(guest.guest_id, Some(guest_id));
    assert_eq!(guest.email, "ada@example.com");
    assert!(guest.created_at.is_some());
}

#[test]
fn test_duplicate_guest_email_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    insert_guest(&mut persistence, "ada@example.com");

    let duplicate: Guest = Guest::new("Other Guest", "ada@example.com", "555-0199");
    let result: Result<i64, PersistenceError> = persistence.create_guest(&duplicate);

    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn test_guest_email_lookup_is_case_insensitive() {
    let mut persistence: Persistence = create_test_persistence();

    let guest_id: i64 = insert_guest(&mut persistence, "ada@example.com");

    let found: Option<Guest> = persistence.get_guest_by_email("ADA@Example.COM").unwrap();
    assert_eq!(found.unwrap().guest_id, Some(guest_id));
}

#[test]
fn test_list_guests_includes_their_bookings() {
    let mut persistence: Persistence = create_test_persistence();

    let room_id: i64 = insert_room(&mut persistence, "101");
    let booked_guest: i64 = insert_guest(&mut persistence, "ada@example.com");
    let idle_guest: i64 = insert_guest(&mut persistence, "grace@example.com");
    let booking_id: i64 = reserve_three_nights(&mut persistence, room_id, booked_guest);

    let guests: Vec<GuestWithBookings> = persistence.list_guests_with_bookings().unwrap();

    assert_eq!(guests.len(), 2);
    let with_booking = guests
        .iter()
        .find(|g| g.guest.guest_id == Some(booked_guest))
        .unwrap();
    assert_eq!(with_booking.bookings.len(), 1);
    assert_eq!(with_booking.bookings[0].booking_id, Some(booking_id));

    let without_booking = guests
        .iter()
        .find(|g| g.guest.guest_id == Some(idle_guest))
        .unwrap();
    assert!(without_booking.bookings.is_empty());
}

#[test]
fn test_update_guest() {
    let mut persistence: Persistence = create_test_persistence();

    let guest_id: i64 = insert_guest(&mut persistence, "ada@example.com");

    let mut guest: Guest = persistence.get_guest(guest_id).unwrap().unwrap();
    guest.phone = String::from("555-0200");
    persistence.update_guest(&guest).unwrap();

    let reloaded: Guest = persistence.get_guest(guest_id).unwrap().unwrap();
    assert_eq!(reloaded.phone, "555-0200");
}

#[test]
fn test_delete_guest_without_bookings() {
    let mut persistence: Persistence = create_test_persistence();

    let guest_id: i64 = insert_guest(&mut persistence, "ada@example.com");
    persistence.delete_guest(guest_id).unwrap();

    assert!(persistence.get_guest(guest_id).unwrap().is_none());
}

#[test]
fn test_delete_guest_with_bookings_is_blocked() {
    let mut persistence: Persistence = create_test_persistence();

    let room_id: i64 = insert_room(&mut persistence, "101");
    let guest_id: i64 = insert_guest(&mut persistence, "ada@example.com");
    reserve_three_nights(&mut persistence, room_id, guest_id);

    let result: Result<(), PersistenceError> = persistence.delete_guest(guest_id);

    assert_eq!(result, Err(PersistenceError::GuestReferenced { guest_id }));
    assert!(persistence.get_guest(guest_id).unwrap().is_some());
}
