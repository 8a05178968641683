// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers follow one shape: fetch the entity snapshots, plan the
//! transition through the lifecycle manager, apply the plan atomically
//! through the persistence layer, translate errors into the API taxonomy.

use std::str::FromStr;
use tracing::info;

use innkeep::{
    BookingPlan, BookingTransition, PaymentPlan, RoomStatusChange, plan_booking,
    plan_booking_transition, plan_payment, plan_room_override,
};
use innkeep_domain::{
    Booking, BookingStatus, DomainError, Guest, Payment, PaymentMethod, Room, RoomStatus,
    RoomType, parse_iso_date, validate_guest_fields, validate_room_fields, validate_staff_fields,
};
use innkeep_persistence::{
    BookingDetails, GuestWithBookings, PaymentDetails, Persistence, PersistenceError,
};

use crate::auth::{AuthenticatedStaff, AuthenticationService, Role};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    BookingDetailsInfo, BookingInfo, BookingResponse, CreateBookingRequest, CreateGuestRequest,
    CreatePaymentRequest, CreateRoomRequest, GuestInfo, GuestResponse, GuestWithBookingsInfo,
    LoginRequest, LoginResponse, MessageResponse, PaymentDetailsInfo, PaymentInfo,
    PaymentResponse, RegisterStaffRequest, RegisterStaffResponse, RoomInfo, RoomResponse,
    StaffInfo, UpdateBookingStatusRequest, UpdateGuestRequest, UpdateRoomRequest,
};

/// Builds the standard not-found error for an entity lookup.
fn not_found(resource_type: &str, id: i64) -> ApiError {
    ApiError::NotFound {
        resource_type: resource_type.to_string(),
        message: format!("{resource_type} with ID {id} not found"),
    }
}

/// Maps a joined booking read model into its wire representation.
fn booking_details_info(details: &BookingDetails) -> BookingDetailsInfo {
    BookingDetailsInfo {
        booking: BookingInfo::from_booking(&details.booking),
        guest: GuestInfo::from_guest(&details.guest),
        room: RoomInfo::from_room(&details.room),
        payment: details.payment.as_ref().map(PaymentInfo::from_payment),
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Registers a new staff account.
///
/// Registration is open (the first account has to come from somewhere);
/// the password policy and email uniqueness still apply.
///
/// # Errors
///
/// Returns an error if:
/// - The name or email is malformed
/// - The role is not recognized
/// - The password violates the policy
/// - The email is already registered
pub fn register_staff(
    persistence: &mut Persistence,
    request: RegisterStaffRequest,
) -> Result<RegisterStaffResponse, ApiError> {
    validate_staff_fields(&request.name, &request.email).map_err(translate_domain_error)?;
    let role: Role = Role::from_str(&request.role).map_err(translate_domain_error)?;

    PasswordPolicy::default().validate(&request.password, &request.email, &request.name)?;

    // Explicit pre-check for a friendlier message; the unique index is the
    // real guard.
    if persistence
        .get_staff_by_email(&request.email)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(ApiError::Conflict {
            rule: String::from("unique_staff_email"),
            message: format!("Email '{}' already exists", request.email.to_lowercase()),
        });
    }

    let staff_id: i64 = persistence
        .create_staff(&request.name, &request.email, &request.password, role.as_str())
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => ApiError::Conflict {
                rule: String::from("unique_staff_email"),
                message: format!("Email '{}' already exists", request.email.to_lowercase()),
            },
            other => translate_persistence_error(other),
        })?;

    // Log the fresh account straight in so the response carries a usable
    // bearer token, matching the login contract.
    let (token, _actor, staff) =
        AuthenticationService::login(persistence, &request.email, &request.password)?;

    info!(staff_id, role = role.as_str(), "Staff account registered");

    Ok(RegisterStaffResponse {
        message: String::from("Staff created successfully"),
        token,
        staff: StaffInfo::from_staff(&staff),
    })
}

/// Logs a staff member in and mints a session token.
///
/// # Errors
///
/// Returns `NotFound` for an unknown email and `AuthenticationFailed` for a
/// wrong password, per the API contract.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (token, _actor, staff) =
        AuthenticationService::login(persistence, &request.email, &request.password)?;

    info!(staff_id = staff.staff_id, "Staff logged in");

    Ok(LoginResponse {
        token,
        staff: StaffInfo::from_staff(&staff),
    })
}

/// Logs a staff member out by deleting the session.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &mut Persistence, token: &str) -> Result<MessageResponse, ApiError> {
    AuthenticationService::logout(persistence, token)?;
    Ok(MessageResponse {
        message: String::from("Logged out"),
    })
}

// ============================================================================
// Rooms
// ============================================================================

/// Creates a new room.
///
/// # Errors
///
/// Returns an error if a field is invalid or the room number is taken.
pub fn create_room(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    request: CreateRoomRequest,
) -> Result<RoomResponse, ApiError> {
    let room_type: RoomType = RoomType::parse(&request.room_type).map_err(translate_domain_error)?;
    let room: Room = Room::new(
        &request.number,
        room_type,
        request.floor,
        request.price,
        request.capacity,
    );
    validate_room_fields(&room).map_err(translate_domain_error)?;

    let room_id: i64 = persistence.create_room(&room).map_err(|e| match e {
        PersistenceError::UniqueViolation(_) => {
            translate_domain_error(DomainError::DuplicateRoomNumber(request.number.clone()))
        }
        other => translate_persistence_error(other),
    })?;

    let created: Room = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Room {room_id} vanished after creation"),
        })?;

    info!(staff_id = staff.staff_id, room_id, "Room created");

    Ok(RoomResponse {
        message: String::from("Room created successfully"),
        room: RoomInfo::from_room(&created),
    })
}

/// Retrieves a room by ID.
///
/// # Errors
///
/// Returns `NotFound` if the room does not exist.
pub fn get_room(persistence: &mut Persistence, room_id: i64) -> Result<RoomInfo, ApiError> {
    let room: Room = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Room", room_id))?;

    Ok(RoomInfo::from_room(&room))
}

/// Lists all rooms.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_rooms(persistence: &mut Persistence) -> Result<Vec<RoomInfo>, ApiError> {
    let rooms: Vec<Room> = persistence.list_rooms().map_err(translate_persistence_error)?;
    Ok(rooms.iter().map(RoomInfo::from_room).collect())
}

/// Updates a room.
///
/// Field edits and the status override are distinct paths: the override is
/// planned by the lifecycle manager and restricted to the
/// available/maintenance pair, while field edits never touch status.
///
/// # Errors
///
/// Returns an error if:
/// - The room does not exist
/// - A field is invalid or the new number is taken
/// - The status override is not allowed from the current status
pub fn update_room(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    room_id: i64,
    request: UpdateRoomRequest,
) -> Result<RoomResponse, ApiError> {
    let mut room: Room = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Room", room_id))?;

    let has_field_edit: bool = request.number.is_some()
        || request.room_type.is_some()
        || request.floor.is_some()
        || request.price.is_some()
        || request.capacity.is_some();

    if has_field_edit {
        if let Some(number) = &request.number {
            room.number = number.clone();
        }
        if let Some(room_type) = &request.room_type {
            room.room_type = RoomType::parse(room_type).map_err(translate_domain_error)?;
        }
        if let Some(floor) = request.floor {
            room.floor = floor;
        }
        if let Some(price) = request.price {
            room.price = price;
        }
        if let Some(capacity) = request.capacity {
            room.capacity = capacity;
        }
        validate_room_fields(&room).map_err(translate_domain_error)?;

        persistence.update_room_fields(&room).map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => {
                translate_domain_error(DomainError::DuplicateRoomNumber(room.number.clone()))
            }
            other => translate_persistence_error(other),
        })?;
    }

    if let Some(status) = &request.status {
        let target: RoomStatus = RoomStatus::from_str(status).map_err(translate_domain_error)?;
        let change: RoomStatusChange =
            plan_room_override(&room, target).map_err(translate_core_error)?;
        persistence
            .apply_room_override(&change)
            .map_err(translate_persistence_error)?;
    }

    let updated: Room = persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Room", room_id))?;

    info!(staff_id = staff.staff_id, room_id, "Room updated");

    Ok(RoomResponse {
        message: String::from("Room updated"),
        room: RoomInfo::from_room(&updated),
    })
}

/// Deletes a room.
///
/// # Errors
///
/// Returns `NotFound` if the room does not exist, or `Conflict` if bookings
/// reference it.
pub fn delete_room(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    room_id: i64,
) -> Result<MessageResponse, ApiError> {
    persistence
        .get_room(room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Room", room_id))?;

    persistence
        .delete_room(room_id)
        .map_err(translate_persistence_error)?;

    info!(staff_id = staff.staff_id, room_id, "Room deleted");

    Ok(MessageResponse {
        message: String::from("Room deleted"),
    })
}

// ============================================================================
// Guests
// ============================================================================

/// Creates a new guest.
///
/// # Errors
///
/// Returns an error if a field is invalid or the email is already
/// registered.
pub fn create_guest(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    request: CreateGuestRequest,
) -> Result<GuestResponse, ApiError> {
    let guest: Guest = Guest::new(&request.name, &request.email, &request.phone);
    validate_guest_fields(&guest).map_err(translate_domain_error)?;

    // Explicit pre-check for a friendlier message; the unique index is the
    // real guard.
    if persistence
        .get_guest_by_email(&guest.email)
        .map_err(translate_persistence_error)?
        .is_some()
    {
        return Err(translate_domain_error(DomainError::DuplicateGuestEmail(
            guest.email.clone(),
        )));
    }

    let guest_id: i64 = persistence.create_guest(&guest).map_err(|e| match e {
        PersistenceError::UniqueViolation(_) => {
            translate_domain_error(DomainError::DuplicateGuestEmail(guest.email.clone()))
        }
        other => translate_persistence_error(other),
    })?;

    let created: Guest = persistence
        .get_guest(guest_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Guest {guest_id} vanished after creation"),
        })?;

    info!(staff_id = staff.staff_id, guest_id, "Guest created");

    Ok(GuestResponse {
        message: String::from("Guest created successfully"),
        guest: GuestInfo::from_guest(&created),
    })
}

/// Retrieves a guest with their bookings.
///
/// # Errors
///
/// Returns `NotFound` if the guest does not exist.
pub fn get_guest(
    persistence: &mut Persistence,
    guest_id: i64,
) -> Result<GuestWithBookingsInfo, ApiError> {
    let guest: Guest = persistence
        .get_guest(guest_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Guest", guest_id))?;

    let bookings: Vec<Booking> = persistence
        .get_guest_bookings(guest_id)
        .map_err(translate_persistence_error)?;

    Ok(GuestWithBookingsInfo {
        id: guest.guest_id.unwrap_or_default(),
        name: guest.name,
        email: guest.email,
        phone: guest.phone,
        created_at: guest.created_at,
        bookings: bookings.iter().map(BookingInfo::from_booking).collect(),
    })
}

/// Lists all guests with their bookings.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_guests(
    persistence: &mut Persistence,
) -> Result<Vec<GuestWithBookingsInfo>, ApiError> {
    let guests: Vec<GuestWithBookings> = persistence
        .list_guests_with_bookings()
        .map_err(translate_persistence_error)?;

    Ok(guests
        .into_iter()
        .map(|entry| GuestWithBookingsInfo {
            id: entry.guest.guest_id.unwrap_or_default(),
            name: entry.guest.name,
            email: entry.guest.email,
            phone: entry.guest.phone,
            created_at: entry.guest.created_at,
            bookings: entry.bookings.iter().map(BookingInfo::from_booking).collect(),
        })
        .collect())
}

/// Updates a guest.
///
/// # Errors
///
/// Returns an error if the guest does not exist, a field is invalid, or
/// the new email collides with another guest.
pub fn update_guest(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    guest_id: i64,
    request: UpdateGuestRequest,
) -> Result<GuestResponse, ApiError> {
    let mut guest: Guest = persistence
        .get_guest(guest_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Guest", guest_id))?;

    if let Some(name) = &request.name {
        guest.name = name.clone();
    }
    if let Some(email) = &request.email {
        guest.email = email.to_lowercase();
    }
    if let Some(phone) = &request.phone {
        guest.phone = phone.clone();
    }
    validate_guest_fields(&guest).map_err(translate_domain_error)?;

    persistence.update_guest(&guest).map_err(|e| match e {
        PersistenceError::UniqueViolation(_) => {
            translate_domain_error(DomainError::DuplicateGuestEmail(guest.email.clone()))
        }
        other => translate_persistence_error(other),
    })?;

    info!(staff_id = staff.staff_id, guest_id, "Guest updated");

    Ok(GuestResponse {
        message: String::from("Guest updated"),
        guest: GuestInfo::from_guest(&guest),
    })
}

/// Deletes a guest.
///
/// Deletion is blocked while bookings reference the guest; staff must
/// cancel or complete the stays first.
///
/// # Errors
///
/// Returns `NotFound` if the guest does not exist, or `Conflict` if
/// bookings reference them.
pub fn delete_guest(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    guest_id: i64,
) -> Result<MessageResponse, ApiError> {
    persistence
        .get_guest(guest_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Guest", guest_id))?;

    persistence
        .delete_guest(guest_id)
        .map_err(translate_persistence_error)?;

    info!(staff_id = staff.staff_id, guest_id, "Guest deleted");

    Ok(MessageResponse {
        message: String::from("Guest deleted"),
    })
}

// ============================================================================
// Bookings
// ============================================================================

/// Creates a booking: plans the reservation and applies it atomically.
///
/// The total price is always computed server-side as nights × room price;
/// any client-supplied total is ignored.
///
/// # Errors
///
/// Returns an error if:
/// - A date is malformed or the stay spans no nights
/// - The guest or room does not exist
/// - The room is not available (including losing the claim to a
///   concurrent reservation)
pub fn create_booking(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    request: &CreateBookingRequest,
) -> Result<BookingResponse, ApiError> {
    let check_in = parse_iso_date(&request.check_in).map_err(translate_domain_error)?;
    let check_out = parse_iso_date(&request.check_out).map_err(translate_domain_error)?;

    persistence
        .get_guest(request.guest_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Guest", request.guest_id))?;

    let room: Room = persistence
        .get_room(request.room_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Room", request.room_id))?;

    let plan: BookingPlan = plan_booking(&room, request.guest_id, check_in, check_out)
        .map_err(translate_core_error)?;

    let booking_id: i64 = persistence
        .reserve_room(&plan)
        .map_err(translate_persistence_error)?;

    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Booking {booking_id} vanished after creation"),
        })?;

    info!(
        staff_id = staff.staff_id,
        booking_id,
        room_id = request.room_id,
        guest_id = request.guest_id,
        "Booking created"
    );

    Ok(BookingResponse {
        message: String::from("Booking created successfully"),
        booking: BookingInfo::from_booking(&booking),
    })
}

/// Updates a booking's status through the lifecycle manager.
///
/// Terminal transitions release the room in the same transaction.
///
/// # Errors
///
/// Returns an error if:
/// - The status string is not recognized
/// - The booking does not exist
/// - The transition is not allowed from the current status
pub fn update_booking_status(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    booking_id: i64,
    request: &UpdateBookingStatusRequest,
) -> Result<BookingResponse, ApiError> {
    let target: BookingStatus =
        BookingStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let booking: Booking = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Booking", booking_id))?;

    let transition: BookingTransition =
        plan_booking_transition(&booking, target).map_err(translate_core_error)?;

    persistence
        .apply_booking_transition(&transition)
        .map_err(translate_persistence_error)?;

    let updated: Booking = persistence
        .get_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Booking", booking_id))?;

    info!(
        staff_id = staff.staff_id,
        booking_id,
        status = target.as_str(),
        "Booking status updated"
    );

    Ok(BookingResponse {
        message: String::from("Booking updated"),
        booking: BookingInfo::from_booking(&updated),
    })
}

/// Retrieves a booking with its guest, room, and payment.
///
/// # Errors
///
/// Returns `NotFound` if the booking does not exist.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<BookingDetailsInfo, ApiError> {
    let details: BookingDetails = persistence
        .get_booking_details(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Booking", booking_id))?;

    Ok(booking_details_info(&details))
}

/// Lists all bookings with guest, room, and payment joined.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_bookings(
    persistence: &mut Persistence,
) -> Result<Vec<BookingDetailsInfo>, ApiError> {
    let details: Vec<BookingDetails> = persistence
        .list_bookings()
        .map_err(translate_persistence_error)?;

    Ok(details.iter().map(booking_details_info).collect())
}

// ============================================================================
// Payments
// ============================================================================

/// Records a payment against a booking.
///
/// The payment insert and the booking confirmation are one transaction.
///
/// # Errors
///
/// Returns an error if:
/// - The method string is not recognized
/// - The booking does not exist
/// - A payment already exists for the booking
/// - The booking is cancelled or completed
pub fn create_payment(
    persistence: &mut Persistence,
    staff: &AuthenticatedStaff,
    request: &CreatePaymentRequest,
) -> Result<PaymentResponse, ApiError> {
    let method: PaymentMethod =
        PaymentMethod::parse(&request.method).map_err(translate_domain_error)?;

    let booking: Booking = persistence
        .get_booking(request.booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| not_found("Booking", request.booking_id))?;

    let existing: Option<Payment> = persistence
        .get_payment_by_booking(request.booking_id)
        .map_err(translate_persistence_error)?;

    let plan: PaymentPlan = plan_payment(&booking, existing.as_ref(), request.amount, method)
        .map_err(translate_core_error)?;

    let payment_id: i64 = persistence.record_payment(&plan).map_err(|e| match e {
        PersistenceError::UniqueViolation(_) => {
            translate_domain_error(DomainError::PaymentAlreadyExists {
                booking_id: request.booking_id,
            })
        }
        other => translate_persistence_error(other),
    })?;

    let payment: Payment = persistence
        .get_payment_by_booking(request.booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: format!("Payment {payment_id} vanished after creation"),
        })?;

    info!(
        staff_id = staff.staff_id,
        payment_id,
        booking_id = request.booking_id,
        "Payment recorded"
    );

    Ok(PaymentResponse {
        message: String::from("Payment created successfully"),
        payment: PaymentInfo::from_payment(&payment),
    })
}

/// Retrieves the payment for a booking.
///
/// # Errors
///
/// Returns `NotFound` if no payment exists for the booking.
pub fn get_payment_by_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<PaymentInfo, ApiError> {
    let payment: Payment = persistence
        .get_payment_by_booking(booking_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::NotFound {
            resource_type: String::from("Payment"),
            message: format!("No payment found for booking {booking_id}"),
        })?;

    Ok(PaymentInfo::from_payment(&payment))
}

/// Lists all payments with booking, guest, and room joined.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_payments(
    persistence: &mut Persistence,
) -> Result<Vec<PaymentDetailsInfo>, ApiError> {
    let details: Vec<PaymentDetails> = persistence
        .list_payments()
        .map_err(translate_persistence_error)?;

    Ok(details
        .iter()
        .map(|entry| PaymentDetailsInfo {
            payment: PaymentInfo::from_payment(&entry.payment),
            booking: BookingInfo::from_booking(&entry.booking),
            guest: GuestInfo::from_guest(&entry.guest),
            room: RoomInfo::from_room(&entry.room),
        })
        .collect())
}
