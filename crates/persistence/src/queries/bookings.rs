// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{BookingDetails, BookingRow, GuestRow, PaymentRow, RoomRow};
use crate::diesel_schema::{bookings, guests, payments, rooms};
use crate::error::PersistenceError;
use innkeep_domain::{Booking, Guest, Payment, Room};

/// Maps a joined row tuple into `BookingDetails`.
fn into_details(
    row: (BookingRow, GuestRow, RoomRow, Option<PaymentRow>),
) -> Result<BookingDetails, PersistenceError> {
    let (booking_row, guest_row, room_row, payment_row) = row;
    let booking: Booking = booking_row.into_booking()?;
    let guest: Guest = guest_row.into_guest();
    let room: Room = room_row.into_room()?;
    let payment: Option<Payment> = payment_row.map(PaymentRow::into_payment).transpose()?;
    Ok(BookingDetails {
        booking,
        guest,
        room,
        payment,
    })
}

backend_fn! {
/// Retrieves a booking by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking(conn: &mut _, booking_id: i64) -> Result<Option<Booking>, PersistenceError> {
    debug!("Looking up booking by ID: {}", booking_id);

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_booking()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a booking with its guest, room, and payment joined.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking_details(
    conn: &mut _,
    booking_id: i64,
) -> Result<Option<BookingDetails>, PersistenceError> {
    debug!("Looking up booking details by ID: {}", booking_id);

    let result: Result<(BookingRow, GuestRow, RoomRow, Option<PaymentRow>), diesel::result::Error> =
        bookings::table
            .inner_join(guests::table)
            .inner_join(rooms::table)
            .left_join(payments::table)
            .filter(bookings::booking_id.eq(booking_id))
            .select((
                BookingRow::as_select(),
                GuestRow::as_select(),
                RoomRow::as_select(),
                Option::<PaymentRow>::as_select(),
            ))
            .first(conn);

    match result {
        Ok(row) => Ok(Some(into_details(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all bookings with guest, room, and payment joined, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_bookings(conn: &mut _) -> Result<Vec<BookingDetails>, PersistenceError> {
    debug!("Listing all bookings");

    let rows: Vec<(BookingRow, GuestRow, RoomRow, Option<PaymentRow>)> = bookings::table
        .inner_join(guests::table)
        .inner_join(rooms::table)
        .left_join(payments::table)
        .select((
            BookingRow::as_select(),
            GuestRow::as_select(),
            RoomRow::as_select(),
            Option::<PaymentRow>::as_select(),
        ))
        .order_by(bookings::booking_id.asc())
        .load(conn)?;

    rows.into_iter().map(into_details).collect()
}
}
