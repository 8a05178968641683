// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingStatus, DomainError, Guest, PaymentMethod, PaymentStatus, Room, RoomStatus, RoomType,
};

#[test]
fn test_room_type_parse() {
    assert_eq!(RoomType::parse("standard").unwrap(), RoomType::Standard);
    assert_eq!(RoomType::parse("deluxe").unwrap(), RoomType::Deluxe);
    assert_eq!(RoomType::parse("suite").unwrap(), RoomType::Suite);
    assert_eq!(
        RoomType::parse("presidential").unwrap(),
        RoomType::Presidential
    );
}

#[test]
fn test_room_type_rejects_unknown() {
    let result: Result<RoomType, DomainError> = RoomType::parse("penthouse");
    assert!(matches!(result, Err(DomainError::InvalidRoomType(_))));
}

#[test]
fn test_room_type_round_trip() {
    for s in ["standard", "deluxe", "suite", "presidential"] {
        assert_eq!(RoomType::parse(s).unwrap().as_str(), s);
    }
}

#[test]
fn test_room_status_parse() {
    assert_eq!(
        "available".parse::<RoomStatus>().unwrap(),
        RoomStatus::Available
    );
    assert_eq!(
        "occupied".parse::<RoomStatus>().unwrap(),
        RoomStatus::Occupied
    );
    assert_eq!(
        "maintenance".parse::<RoomStatus>().unwrap(),
        RoomStatus::Maintenance
    );
    assert!("busy".parse::<RoomStatus>().is_err());
}

#[test]
fn test_only_available_rooms_are_bookable() {
    assert!(RoomStatus::Available.is_bookable());
    assert!(!RoomStatus::Occupied.is_bookable());
    assert!(!RoomStatus::Maintenance.is_bookable());
}

#[test]
fn test_room_status_override_pairs() {
    assert!(RoomStatus::Available.can_override_to(RoomStatus::Maintenance));
    assert!(RoomStatus::Maintenance.can_override_to(RoomStatus::Available));

    // Occupied can neither be entered nor left manually.
    assert!(!RoomStatus::Available.can_override_to(RoomStatus::Occupied));
    assert!(!RoomStatus::Maintenance.can_override_to(RoomStatus::Occupied));
    assert!(!RoomStatus::Occupied.can_override_to(RoomStatus::Available));
    assert!(!RoomStatus::Occupied.can_override_to(RoomStatus::Maintenance));
}

#[test]
fn test_booking_status_parse() {
    assert_eq!(
        "pending".parse::<BookingStatus>().unwrap(),
        BookingStatus::Pending
    );
    assert_eq!(
        "confirmed".parse::<BookingStatus>().unwrap(),
        BookingStatus::Confirmed
    );
    assert_eq!(
        "cancelled".parse::<BookingStatus>().unwrap(),
        BookingStatus::Cancelled
    );
    assert_eq!(
        "completed".parse::<BookingStatus>().unwrap(),
        BookingStatus::Completed
    );
    assert!("held".parse::<BookingStatus>().is_err());
}

#[test]
fn test_booking_transitions_from_pending() {
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
}

#[test]
fn test_booking_transitions_from_confirmed() {
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
}

#[test]
fn test_terminal_booking_statuses_allow_no_transitions() {
    for terminal in [BookingStatus::Cancelled, BookingStatus::Completed] {
        for target in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert!(!terminal.can_transition_to(target));
        }
    }
}

#[test]
fn test_active_statuses_hold_the_room() {
    assert!(BookingStatus::Pending.is_active());
    assert!(BookingStatus::Confirmed.is_active());
    assert!(!BookingStatus::Cancelled.is_active());
    assert!(!BookingStatus::Completed.is_active());
}

#[test]
fn test_terminal_statuses_release_the_room() {
    assert!(BookingStatus::Cancelled.releases_room());
    assert!(BookingStatus::Completed.releases_room());
    assert!(!BookingStatus::Pending.releases_room());
    assert!(!BookingStatus::Confirmed.releases_room());
}

#[test]
fn test_payment_method_parse() {
    assert_eq!(PaymentMethod::parse("cash").unwrap(), PaymentMethod::Cash);
    assert_eq!(PaymentMethod::parse("card").unwrap(), PaymentMethod::Card);
    assert_eq!(
        PaymentMethod::parse("bank_transfer").unwrap(),
        PaymentMethod::BankTransfer
    );
    assert_eq!(
        PaymentMethod::parse("stripe").unwrap(),
        PaymentMethod::Stripe
    );
    assert!(PaymentMethod::parse("cheque").is_err());
}

#[test]
fn test_payment_status_parse() {
    for s in ["pending", "paid", "failed", "refunded"] {
        assert_eq!(PaymentStatus::parse(s).unwrap().as_str(), s);
    }
    assert!(PaymentStatus::parse("settled").is_err());
}

#[test]
fn test_new_room_starts_available() {
    let room: Room = Room::new("101", RoomType::Standard, 1, 200.0, 2);
    assert!(room.room_id.is_none());
    assert_eq!(room.status, RoomStatus::Available);
}

#[test]
fn test_room_equality_ignores_id() {
    let unsaved: Room = Room::new("101", RoomType::Standard, 1, 200.0, 2);
    let saved: Room = Room::with_id(
        7,
        "101",
        RoomType::Deluxe,
        2,
        350.0,
        3,
        RoomStatus::Occupied,
    );
    assert_eq!(unsaved, saved);
}

#[test]
fn test_guest_email_normalized_to_lowercase() {
    let guest: Guest = Guest::new("Ada Lovelace", "Ada@Example.COM", "555-0100");
    assert_eq!(guest.email, "ada@example.com");
}

#[test]
fn test_guest_case_insensitive_equality() {
    let lower: Guest = Guest::new("Ada", "ada@example.com", "555-0100");
    let upper: Guest = Guest::new("Ada", "ADA@EXAMPLE.COM", "555-0199");
    assert_eq!(lower, upper);
}
