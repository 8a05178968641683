// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff and session mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{sessions, staff};
use crate::error::PersistenceError;

backend_fn! {
/// Creates a new staff account.
///
/// The email is normalized to lowercase for case-insensitive uniqueness
/// and the password is hashed with bcrypt before it touches the database.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The staff member's name
/// * `email` - The login email (will be normalized)
/// * `password` - The plain-text password (will be hashed)
/// * `role` - The role (`admin` or `reception`)
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the email is already
/// registered.
pub fn create_staff(
    conn: &mut _,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    let normalized_email: String = email.to_lowercase();

    info!(
        "Creating staff account with email: {}, role: {}",
        normalized_email, role
    );

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(staff::table)
        .values((
            staff::name.eq(name),
            staff::email.eq(&normalized_email),
            staff::password_hash.eq(&password_hash),
            staff::role.eq(role),
        ))
        .execute(conn)?;

    let staff_id: i64 = conn.get_last_insert_rowid()?;

    info!(staff_id, "Staff account created successfully");
    Ok(staff_id)
}
}

backend_fn! {
/// Updates the last login timestamp for a staff member.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(conn: &mut _, staff_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for staff ID: {}", staff_id);

    diesel::update(staff::table)
        .filter(staff::staff_id.eq(staff_id))
        .set(staff::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Creates a new session for a staff member.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `staff_id` - The staff ID
/// * `expires_at` - The expiration timestamp
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut _,
    session_token: &str,
    staff_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(
        "Creating session for staff ID: {} with expiration: {}",
        staff_id, expires_at
    );

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::staff_id.eq(staff_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = conn.get_last_insert_rowid()?;

    debug!(session_id, staff_id, "Session created");
    Ok(session_id)
}
}

backend_fn! {
/// Updates the last activity timestamp for a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(conn: &mut _, session_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_activity_at for session ID: {}", session_id);

    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(
            sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a session by token.
///
/// This is used for logout operations.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(conn: &mut _, session_token: &str) -> Result<(), PersistenceError> {
    debug!("Deleting session by token");

    diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes all expired sessions.
///
/// This is a cleanup operation that should be run periodically.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(conn: &mut _) -> Result<usize, PersistenceError> {
    debug!("Deleting expired sessions");

    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(
            sessions::expires_at.lt(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;

    info!("Deleted {} expired sessions", rows_affected);
    Ok(rows_affected)
}
}
