// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{BookingRow, GuestRow, PaymentDetails, PaymentRow, RoomRow};
use crate::diesel_schema::{bookings, guests, payments, rooms};
use crate::error::PersistenceError;
use innkeep_domain::Payment;

backend_fn! {
/// Retrieves the payment for a booking, if one exists.
///
/// The one-to-one relationship makes the booking ID a unique key on
/// payments.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no payment exists for the booking.
pub fn get_payment_by_booking(
    conn: &mut _,
    booking_id: i64,
) -> Result<Option<Payment>, PersistenceError> {
    debug!("Looking up payment for booking ID: {}", booking_id);

    let result: Result<PaymentRow, diesel::result::Error> = payments::table
        .filter(payments::booking_id.eq(booking_id))
        .select(PaymentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_payment()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all payments with booking, guest, and room joined, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_payments(conn: &mut _) -> Result<Vec<PaymentDetails>, PersistenceError> {
    debug!("Listing all payments");

    let rows: Vec<(PaymentRow, (BookingRow, GuestRow, RoomRow))> = payments::table
        .inner_join(
            bookings::table
                .inner_join(guests::table)
                .inner_join(rooms::table),
        )
        .select((
            PaymentRow::as_select(),
            (
                BookingRow::as_select(),
                GuestRow::as_select(),
                RoomRow::as_select(),
            ),
        ))
        .order_by(payments::payment_id.asc())
        .load(conn)?;

    rows.into_iter()
        .map(|(payment_row, (booking_row, guest_row, room_row))| {
            Ok(PaymentDetails {
                payment: payment_row.into_payment()?,
                booking: booking_row.into_booking()?,
                guest: guest_row.into_guest(),
                room: room_row.into_room()?,
            })
        })
        .collect()
}
}
