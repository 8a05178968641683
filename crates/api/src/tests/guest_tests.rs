// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    book_standard_room, create_test_guest_request, create_test_persistence, create_test_staff,
};
use crate::error::ApiError;
use crate::handlers::{create_guest, delete_guest, get_guest, list_guests, update_guest};
use crate::request_response::{GuestResponse, GuestWithBookingsInfo, UpdateGuestRequest};
use innkeep_persistence::Persistence;

#[test]
fn test_create_guest_normalizes_email() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    let response: GuestResponse = create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("Ada@Example.COM"),
    )
    .unwrap();

    assert_eq!(response.guest.email, "ada@example.com");
    assert!(response.guest.created_at.is_some());
}

#[test]
fn test_duplicate_guest_email_conflicts() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("ada@example.com"),
    )
    .unwrap();

    // Same address with different casing still collides.
    let result: Result<GuestResponse, ApiError> = create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("ADA@EXAMPLE.COM"),
    );

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_create_guest_rejects_malformed_email() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    let result: Result<GuestResponse, ApiError> = create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("not-an-email"),
    );

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_get_guest_includes_bookings() {
    let mut persistence: Persistence = create_test_persistence();

    let (_room_id, guest_id, booking_id) = book_standard_room(&mut persistence);

    let guest: GuestWithBookingsInfo = get_guest(&mut persistence, guest_id).unwrap();

    assert_eq!(guest.id, guest_id);
    assert_eq!(guest.bookings.len(), 1);
    assert_eq!(guest.bookings[0].id, booking_id);
}

#[test]
fn test_get_missing_guest_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = get_guest(&mut persistence, 42);
    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[test]
fn test_list_guests_with_bookings() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    book_standard_room(&mut persistence);
    create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("grace@example.com"),
    )
    .unwrap();

    let guests: Vec<GuestWithBookingsInfo> = list_guests(&mut persistence).unwrap();

    assert_eq!(guests.len(), 2);
    let booked = guests.iter().find(|g| g.email == "ada@example.com").unwrap();
    assert_eq!(booked.bookings.len(), 1);
    let idle = guests
        .iter()
        .find(|g| g.email == "grace@example.com")
        .unwrap();
    assert!(idle.bookings.is_empty());
}

#[test]
fn test_update_guest_phone() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    let created: GuestResponse = create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("ada@example.com"),
    )
    .unwrap();

    let response: GuestResponse = update_guest(
        &mut persistence,
        &staff,
        created.guest.id,
        UpdateGuestRequest {
            phone: Some(String::from("555-0200")),
            ..UpdateGuestRequest::default()
        },
    )
    .unwrap();

    assert_eq!(response.guest.phone, "555-0200");
    assert_eq!(response.guest.email, "ada@example.com");
}

#[test]
fn test_delete_guest_with_bookings_is_blocked() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    let (_room_id, guest_id, _booking_id) = book_standard_room(&mut persistence);

    let result = delete_guest(&mut persistence, &staff, guest_id);
    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_delete_guest_without_bookings() {
    let mut persistence: Persistence = create_test_persistence();
    let staff = create_test_staff();

    let created: GuestResponse = create_guest(
        &mut persistence,
        &staff,
        create_test_guest_request("ada@example.com"),
    )
    .unwrap();

    delete_guest(&mut persistence, &staff, created.guest.id).unwrap();
    assert!(matches!(
        get_guest(&mut persistence, created.guest.id),
        Err(ApiError::NotFound { .. })
    ));
}
