// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::plan::{BookingPlan, BookingTransition, PaymentPlan, RoomStatusChange};
use innkeep_domain::{
    Booking, BookingStatus, DomainError, Payment, PaymentMethod, PaymentStatus, Room, RoomStatus,
    nights, total_price, validate_amount,
};
use time::Date;

/// Extracts the persisted ID from an entity snapshot.
///
/// Planning functions operate on persisted snapshots only; an unsaved
/// entity reaching the lifecycle is a caller bug, not a domain error.
fn persisted_id(id: Option<i64>, entity: &str) -> Result<i64, CoreError> {
    id.ok_or_else(|| CoreError::Internal(format!("{entity} snapshot has no persisted ID")))
}

/// Plans a reservation: a pending booking plus the room claim.
///
/// The booking is priced at `nights(check_in, check_out) × room.price` and
/// the price never changes afterwards, even if the room rate is edited.
///
/// # Arguments
///
/// * `room` - The current room snapshot
/// * `guest_id` - The guest holding the reservation
/// * `check_in` - The check-in date
/// * `check_out` - The check-out date
///
/// # Returns
///
/// * `Ok(BookingPlan)` for the entity store to apply atomically
/// * `Err(CoreError)` if the room is not available or the dates are invalid
///
/// # Errors
///
/// Returns an error if:
/// - The room is occupied or under maintenance
/// - `check_out` is not strictly after `check_in`
pub fn plan_booking(
    room: &Room,
    guest_id: i64,
    check_in: Date,
    check_out: Date,
) -> Result<BookingPlan, CoreError> {
    let room_id: i64 = persisted_id(room.room_id, "Room")?;

    match room.status {
        RoomStatus::Available => {}
        RoomStatus::Occupied => {
            return Err(CoreError::DomainViolation(DomainError::RoomOccupied {
                room_id,
            }));
        }
        RoomStatus::Maintenance => {
            return Err(CoreError::DomainViolation(
                DomainError::RoomUnderMaintenance { room_id },
            ));
        }
    }

    let stay_nights: i64 = nights(check_in, check_out)?;
    let price: f64 = total_price(stay_nights, room.price);

    let booking: Booking = Booking::new(guest_id, room_id, check_in, check_out, price);
    let claim: RoomStatusChange = RoomStatusChange {
        room_id,
        from: RoomStatus::Available,
        to: RoomStatus::Occupied,
    };

    Ok(BookingPlan { booking, claim })
}

/// Plans a booking status update.
///
/// Transitions are guarded by the explicit table on `BookingStatus`;
/// terminal transitions carry the room release.
///
/// # Errors
///
/// Returns `DomainError::IllegalBookingTransition` if the requested status
/// is not reachable from the current one.
pub fn plan_booking_transition(
    booking: &Booking,
    target: BookingStatus,
) -> Result<BookingTransition, CoreError> {
    let booking_id: i64 = persisted_id(booking.booking_id, "Booking")?;

    if !booking.status.can_transition_to(target) {
        return Err(CoreError::DomainViolation(
            DomainError::IllegalBookingTransition {
                from: booking.status,
                to: target,
            },
        ));
    }

    let release: Option<RoomStatusChange> = target.releases_room().then_some(RoomStatusChange {
        room_id: booking.room_id,
        from: RoomStatus::Occupied,
        to: RoomStatus::Available,
    });

    Ok(BookingTransition {
        booking_id,
        from: booking.status,
        to: target,
        release,
    })
}

/// Plans a payment recording against a booking.
///
/// Payments are recorded as paid (there is no gateway) and confirm the
/// booking. A booking holds at most one payment.
///
/// # Arguments
///
/// * `booking` - The current booking snapshot
/// * `existing_payment` - The booking's payment, if one exists
/// * `amount` - The paid amount
/// * `method` - The payment method
///
/// # Errors
///
/// Returns an error if:
/// - A payment already exists for the booking
/// - The amount is not a positive, finite value
/// - The booking is cancelled or completed
pub fn plan_payment(
    booking: &Booking,
    existing_payment: Option<&Payment>,
    amount: f64,
    method: PaymentMethod,
) -> Result<PaymentPlan, CoreError> {
    let booking_id: i64 = persisted_id(booking.booking_id, "Booking")?;

    if existing_payment.is_some() {
        return Err(CoreError::DomainViolation(
            DomainError::PaymentAlreadyExists { booking_id },
        ));
    }

    validate_amount(amount)?;

    let confirm: Option<BookingTransition> = match booking.status {
        BookingStatus::Pending => Some(BookingTransition {
            booking_id,
            from: BookingStatus::Pending,
            to: BookingStatus::Confirmed,
            release: None,
        }),
        // Already confirmed: record the payment, no cascade.
        BookingStatus::Confirmed => None,
        BookingStatus::Cancelled | BookingStatus::Completed => {
            return Err(CoreError::DomainViolation(DomainError::BookingNotPayable {
                booking_id,
                status: booking.status,
            }));
        }
    };

    let payment: Payment = Payment::new(booking_id, amount, method, PaymentStatus::Paid);

    Ok(PaymentPlan { payment, confirm })
}

/// Plans a manual room status override.
///
/// The booking lifecycle is the only writer of `occupied`; staff overrides
/// move between `available` and `maintenance` only.
///
/// # Errors
///
/// Returns an error if:
/// - The room is currently occupied
/// - The requested status is `occupied` or equals the current status
pub fn plan_room_override(room: &Room, target: RoomStatus) -> Result<RoomStatusChange, CoreError> {
    let room_id: i64 = persisted_id(room.room_id, "Room")?;

    if !room.status.can_override_to(target) {
        if room.status == RoomStatus::Occupied {
            return Err(CoreError::DomainViolation(DomainError::RoomOccupied {
                room_id,
            }));
        }
        return Err(CoreError::DomainViolation(
            DomainError::RoomStatusNotOverridable {
                from: room.status,
                to: target,
            },
        ));
    }

    Ok(RoomStatusChange {
        room_id,
        from: room.status,
        to: target,
    })
}
