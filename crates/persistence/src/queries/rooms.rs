// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::RoomRow;
use crate::diesel_schema::{bookings, rooms};
use crate::error::PersistenceError;
use innkeep_domain::Room;

backend_fn! {
/// Retrieves a room by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the room is not found.
pub fn get_room(conn: &mut _, room_id: i64) -> Result<Option<Room>, PersistenceError> {
    debug!("Looking up room by ID: {}", room_id);

    let result: Result<RoomRow, diesel::result::Error> = rooms::table
        .filter(rooms::room_id.eq(room_id))
        .select(RoomRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_room()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all rooms, ordered by room number.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(conn: &mut _) -> Result<Vec<Room>, PersistenceError> {
    debug!("Listing all rooms");

    let rows: Vec<RoomRow> = rooms::table
        .select(RoomRow::as_select())
        .order_by(rooms::number.asc())
        .load(conn)?;

    rows.into_iter().map(RoomRow::into_room).collect()
}
}

backend_fn! {
/// Checks if any bookings reference a room.
///
/// Used to block room deletion; cancelled and completed bookings still
/// count because they are the guest's stay history.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn room_has_bookings(conn: &mut _, room_id: i64) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = bookings::table
        .filter(bookings::room_id.eq(room_id))
        .select(count(bookings::booking_id))
        .first(conn)?;

    Ok(count > 0)
}
}
