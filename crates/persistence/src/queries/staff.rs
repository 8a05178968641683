// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff and session queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{SessionData, SessionRow, StaffData, StaffRow};
use crate::diesel_schema::{sessions, staff};
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a staff member by email.
///
/// The email is normalized to lowercase for case-insensitive lookup.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the staff member is not found.
pub fn get_staff_by_email(conn: &mut _, email: &str) -> Result<Option<StaffData>, PersistenceError> {
    let normalized_email: String = email.to_lowercase();

    debug!("Looking up staff by email: {}", normalized_email);

    let result: Result<StaffRow, diesel::result::Error> = staff::table
        .filter(staff::email.eq(&normalized_email))
        .select(StaffRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_staff())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a staff member by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the staff member is not found.
pub fn get_staff_by_id(conn: &mut _, staff_id: i64) -> Result<Option<StaffData>, PersistenceError> {
    debug!("Looking up staff by ID: {}", staff_id);

    let result: Result<StaffRow, diesel::result::Error> = staff::table
        .filter(staff::staff_id.eq(staff_id))
        .select(StaffRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_staff())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut _,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let result: Result<SessionRow, diesel::result::Error> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_session())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

/// Verifies a password against a stored hash.
///
/// This is a backend-agnostic utility function that uses bcrypt.
///
/// # Arguments
///
/// * `password` - The plain text password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns an error if password verification fails.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
