// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::guests;
use crate::error::PersistenceError;
use crate::queries::guests::{guest_has_bookings_mysql, guest_has_bookings_sqlite};
use innkeep_domain::Guest;

backend_fn! {
/// Creates a new guest.
///
/// The email is stored lowercase; the domain constructor already
/// normalizes it.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is already
/// registered.
pub fn create_guest(conn: &mut _, guest: &Guest) -> Result<i64, PersistenceError> {
    info!("Creating guest with email: {}", guest.email);

    diesel::insert_into(guests::table)
        .values((
            guests::name.eq(&guest.name),
            guests::email.eq(&guest.email),
            guests::phone.eq(&guest.phone),
        ))
        .execute(conn)?;

    let guest_id: i64 = conn.get_last_insert_rowid()?;

    info!(guest_id, "Guest created successfully");
    Ok(guest_id)
}
}

backend_fn! {
/// Updates a guest's name, email, and phone.
///
/// # Errors
///
/// Returns an error if the guest does not exist, the new email collides
/// with another guest, or the update fails.
pub fn update_guest(conn: &mut _, guest: &Guest) -> Result<(), PersistenceError> {
    let Some(guest_id) = guest.guest_id else {
        return Err(PersistenceError::Other(String::from(
            "Cannot update a guest without a persisted ID",
        )));
    };

    debug!("Updating guest ID: {}", guest_id);

    let rows_affected: usize = diesel::update(guests::table)
        .filter(guests::guest_id.eq(guest_id))
        .set((
            guests::name.eq(&guest.name),
            guests::email.eq(&guest.email),
            guests::phone.eq(&guest.phone),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Guest with ID {guest_id} not found"
        )));
    }

    Ok(())
}
}

/// Deletes a guest if no bookings reference them (`SQLite` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `guest_id` - The guest ID
///
/// # Errors
///
/// Returns an error if:
/// - Bookings reference the guest
/// - The guest does not exist
/// - The database operation fails
pub fn delete_guest_sqlite(
    conn: &mut SqliteConnection,
    guest_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete guest ID: {}", guest_id);

    if guest_has_bookings_sqlite(conn, guest_id)? {
        return Err(PersistenceError::GuestReferenced { guest_id });
    }

    let rows_affected: usize = diesel::delete(guests::table)
        .filter(guests::guest_id.eq(guest_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Guest with ID {guest_id} not found"
        )));
    }

    info!("Deleted guest ID: {}", guest_id);
    Ok(())
}

/// Deletes a guest if no bookings reference them (`MySQL` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `guest_id` - The guest ID
///
/// # Errors
///
/// Returns an error if:
/// - Bookings reference the guest
/// - The guest does not exist
/// - The database operation fails
pub fn delete_guest_mysql(
    conn: &mut MysqlConnection,
    guest_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete guest ID: {}", guest_id);

    if guest_has_bookings_mysql(conn, guest_id)? {
        return Err(PersistenceError::GuestReferenced { guest_id });
    }

    let rows_affected: usize = diesel::delete(guests::table)
        .filter(guests::guest_id.eq(guest_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Guest with ID {guest_id} not found"
        )));
    }

    info!("Deleted guest ID: {}", guest_id);
    Ok(())
}
