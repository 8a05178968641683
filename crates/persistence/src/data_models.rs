// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data models exposed by the persistence layer.
//!
//! Entity rows are mapped back into `innkeep-domain` types; staff and
//! session records, which have no domain counterpart, are exposed as plain
//! data structs. The `*Row` structs are the Diesel-facing row shapes shared
//! by the query modules.

use diesel::prelude::*;
use std::str::FromStr;

use crate::diesel_schema::{bookings, guests, payments, rooms, sessions, staff};
use crate::error::PersistenceError;
use innkeep_domain::{
    Booking, BookingStatus, Guest, Payment, PaymentMethod, PaymentStatus, Room, RoomStatus,
    RoomType, parse_iso_date,
};

/// A staff account as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffData {
    /// The canonical numeric identifier.
    pub staff_id: i64,
    /// The staff member's name.
    pub name: String,
    /// The login email (unique, normalized to lowercase).
    pub email: String,
    /// The bcrypt password hash.
    pub password_hash: String,
    /// The role string (`admin` or `reception`).
    pub role: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last successful login timestamp.
    pub last_login_at: Option<String>,
}

/// A session record as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// The canonical numeric identifier.
    pub session_id: i64,
    /// The opaque bearer token.
    pub session_token: String,
    /// The staff member this session belongs to.
    pub staff_id: i64,
    /// Creation timestamp.
    pub created_at: String,
    /// Last request timestamp.
    pub last_activity_at: String,
    /// Expiration timestamp (ISO 8601).
    pub expires_at: String,
}

/// A guest together with their bookings (eager join).
#[derive(Debug, Clone, PartialEq)]
pub struct GuestWithBookings {
    /// The guest.
    pub guest: Guest,
    /// All bookings held by the guest, oldest first.
    pub bookings: Vec<Booking>,
}

/// A booking with its guest, room, and payment joined.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    /// The booking.
    pub booking: Booking,
    /// The guest holding the booking.
    pub guest: Guest,
    /// The reserved room.
    pub room: Room,
    /// The payment, if one has been recorded.
    pub payment: Option<Payment>,
}

/// A payment with its booking, guest, and room joined.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    /// The payment.
    pub payment: Payment,
    /// The settled booking.
    pub booking: Booking,
    /// The guest holding the booking.
    pub guest: Guest,
    /// The reserved room.
    pub room: Room,
}

/// Diesel Queryable struct for room rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
pub(crate) struct RoomRow {
    pub(crate) room_id: i64,
    pub(crate) number: String,
    pub(crate) room_type: String,
    pub(crate) floor: i32,
    pub(crate) price: f64,
    pub(crate) capacity: i32,
    pub(crate) status: String,
}

impl RoomRow {
    /// Maps the row into a domain `Room`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a stored enum string is not
    /// recognized.
    pub(crate) fn into_room(self) -> Result<Room, PersistenceError> {
        let room_type: RoomType = RoomType::parse(&self.room_type)?;
        let status: RoomStatus = RoomStatus::from_str(&self.status)?;
        Ok(Room::with_id(
            self.room_id,
            &self.number,
            room_type,
            self.floor,
            self.price,
            self.capacity,
            status,
        ))
    }
}

/// Diesel Queryable struct for guest rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = guests)]
pub(crate) struct GuestRow {
    pub(crate) guest_id: i64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) created_at: String,
}

impl GuestRow {
    pub(crate) fn into_guest(self) -> Guest {
        Guest::with_id(
            self.guest_id,
            &self.name,
            &self.email,
            &self.phone,
            Some(self.created_at),
        )
    }
}

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
pub(crate) struct BookingRow {
    pub(crate) booking_id: i64,
    pub(crate) guest_id: i64,
    pub(crate) room_id: i64,
    pub(crate) check_in: String,
    pub(crate) check_out: String,
    pub(crate) total_price: f64,
    pub(crate) status: String,
    pub(crate) created_at: String,
}

impl BookingRow {
    /// Maps the row into a domain `Booking`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a stored date or status is not
    /// parseable.
    pub(crate) fn into_booking(self) -> Result<Booking, PersistenceError> {
        let check_in = parse_iso_date(&self.check_in)?;
        let check_out = parse_iso_date(&self.check_out)?;
        let status: BookingStatus = BookingStatus::from_str(&self.status)?;
        Ok(Booking::with_id(
            self.booking_id,
            self.guest_id,
            self.room_id,
            check_in,
            check_out,
            self.total_price,
            status,
            Some(self.created_at),
        ))
    }
}

/// Diesel Queryable struct for payment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = payments)]
pub(crate) struct PaymentRow {
    pub(crate) payment_id: i64,
    pub(crate) booking_id: i64,
    pub(crate) amount: f64,
    pub(crate) method: String,
    pub(crate) status: String,
    pub(crate) created_at: String,
}

impl PaymentRow {
    /// Maps the row into a domain `Payment`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if a stored enum string is not
    /// recognized.
    pub(crate) fn into_payment(self) -> Result<Payment, PersistenceError> {
        let method: PaymentMethod = PaymentMethod::parse(&self.method)?;
        let status: PaymentStatus = PaymentStatus::parse(&self.status)?;
        Ok(Payment::with_id(
            self.payment_id,
            self.booking_id,
            self.amount,
            method,
            status,
            Some(self.created_at),
        ))
    }
}

/// Diesel Queryable struct for staff rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = staff)]
pub(crate) struct StaffRow {
    pub(crate) staff_id: i64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
    pub(crate) role: String,
    pub(crate) created_at: String,
    pub(crate) last_login_at: Option<String>,
}

impl StaffRow {
    pub(crate) fn into_staff(self) -> StaffData {
        StaffData {
            staff_id: self.staff_id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
pub(crate) struct SessionRow {
    pub(crate) session_id: i64,
    pub(crate) session_token: String,
    pub(crate) staff_id: i64,
    pub(crate) created_at: String,
    pub(crate) last_activity_at: String,
    pub(crate) expires_at: String,
}

impl SessionRow {
    pub(crate) fn into_session(self) -> SessionData {
        SessionData {
            session_id: self.session_id,
            session_token: self.session_token,
            staff_id: self.staff_id,
            created_at: self.created_at,
            last_activity_at: self.last_activity_at,
            expires_at: self.expires_at,
        }
    }
}
