// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use innkeep_domain::{Booking, BookingStatus, Payment, RoomStatus};

/// A guarded room status transition.
///
/// `from` is the status the room must still hold when the change is applied.
/// The entity store applies the change as a conditional update so that two
/// handlers racing for the same room cannot both win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomStatusChange {
    /// The room to update.
    pub room_id: i64,
    /// The status the room is expected to be in.
    pub from: RoomStatus,
    /// The status to set.
    pub to: RoomStatus,
}

/// The planned outcome of a reservation request.
///
/// Applied atomically: the room claim and the booking insert either both
/// happen or neither does.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPlan {
    /// The pending booking to insert, priced at nights × room rate.
    pub booking: Booking,
    /// The room claim (`available` → `occupied`).
    pub claim: RoomStatusChange,
}

/// The planned outcome of a booking status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingTransition {
    /// The booking to update.
    pub booking_id: i64,
    /// The current status.
    pub from: BookingStatus,
    /// The status to set.
    pub to: BookingStatus,
    /// The room release (`occupied` → `available`) for terminal transitions.
    /// The release tolerates an already-released room.
    pub release: Option<RoomStatusChange>,
}

/// The planned outcome of recording a payment.
///
/// Applied atomically: the payment insert and the booking confirmation
/// either both happen or neither does.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentPlan {
    /// The payment to insert, recorded as paid.
    pub payment: Payment,
    /// The booking confirmation cascade, absent when the booking is already
    /// confirmed.
    pub confirm: Option<BookingTransition>,
}
