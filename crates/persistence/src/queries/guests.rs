// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest queries.
//!
//! Guest reads return the guest together with their bookings (eager join),
//! matching the API contract.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{BookingRow, GuestRow, GuestWithBookings};
use crate::diesel_schema::{bookings, guests};
use crate::error::PersistenceError;
use innkeep_domain::{Booking, Guest};

backend_fn! {
/// Retrieves a guest by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the guest is not found.
pub fn get_guest(conn: &mut _, guest_id: i64) -> Result<Option<Guest>, PersistenceError> {
    debug!("Looking up guest by ID: {}", guest_id);

    let result: Result<GuestRow, diesel::result::Error> = guests::table
        .filter(guests::guest_id.eq(guest_id))
        .select(GuestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_guest())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a guest by email.
///
/// The email is normalized to lowercase for case-insensitive lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the guest is not found.
pub fn get_guest_by_email(conn: &mut _, email: &str) -> Result<Option<Guest>, PersistenceError> {
    let normalized_email: String = email.to_lowercase();

    debug!("Looking up guest by email: {}", normalized_email);

    let result: Result<GuestRow, diesel::result::Error> = guests::table
        .filter(guests::email.eq(&normalized_email))
        .select(GuestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_guest())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves all bookings held by a guest, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_guest_bookings(conn: &mut _, guest_id: i64) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::guest_id.eq(guest_id))
        .select(BookingRow::as_select())
        .order_by(bookings::booking_id.asc())
        .load(conn)?;

    rows.into_iter().map(BookingRow::into_booking).collect()
}
}

backend_fn! {
/// Lists all guests with their bookings, ordered by guest ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_guests_with_bookings(
    conn: &mut _,
) -> Result<Vec<GuestWithBookings>, PersistenceError> {
    debug!("Listing all guests with bookings");

    let guest_rows: Vec<GuestRow> = guests::table
        .select(GuestRow::as_select())
        .order_by(guests::guest_id.asc())
        .load(conn)?;

    let booking_rows: Vec<BookingRow> = bookings::table
        .select(BookingRow::as_select())
        .order_by(bookings::booking_id.asc())
        .load(conn)?;

    let mut all_bookings: Vec<Booking> = Vec::with_capacity(booking_rows.len());
    for row in booking_rows {
        all_bookings.push(row.into_booking()?);
    }

    let result: Vec<GuestWithBookings> = guest_rows
        .into_iter()
        .map(|row| {
            let guest: Guest = row.into_guest();
            let bookings: Vec<Booking> = all_bookings
                .iter()
                .filter(|b| Some(b.guest_id) == guest.guest_id)
                .cloned()
                .collect();
            GuestWithBookings { guest, bookings }
        })
        .collect();

    Ok(result)
}
}

backend_fn! {
/// Checks if any bookings reference a guest.
///
/// Used to block guest deletion.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn guest_has_bookings(conn: &mut _, guest_id: i64) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = bookings::table
        .filter(bookings::guest_id.eq(guest_id))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(count > 0)
}
}
