// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room mutations.
//!
//! Field edits never touch `status`; status changes go through
//! `apply_room_override`, which is a conditional update guarded by the
//! expected prior status.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use crate::queries::rooms::{room_has_bookings_mysql, room_has_bookings_sqlite};
use innkeep::RoomStatusChange;
use innkeep_domain::Room;

backend_fn! {
/// Creates a new room.
///
/// New rooms start in the status carried by the domain value, which is
/// `available` for rooms built with `Room::new`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room` - The validated room to insert
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the room number is
/// already in use.
pub fn create_room(conn: &mut _, room: &Room) -> Result<i64, PersistenceError> {
    info!(
        "Creating room with number: {}, type: {}",
        room.number,
        room.room_type.as_str()
    );

    diesel::insert_into(rooms::table)
        .values((
            rooms::number.eq(&room.number),
            rooms::room_type.eq(room.room_type.as_str()),
            rooms::floor.eq(room.floor),
            rooms::price.eq(room.price),
            rooms::capacity.eq(room.capacity),
            rooms::status.eq(room.status.as_str()),
        ))
        .execute(conn)?;

    let room_id: i64 = conn.get_last_insert_rowid()?;

    info!(room_id, "Room created successfully");
    Ok(room_id)
}
}

backend_fn! {
/// Updates a room's editable fields: number, type, floor, price, capacity.
///
/// The status column is deliberately untouched; the booking lifecycle and
/// the override path own it. Existing bookings keep their original
/// `total_price` when the nightly rate changes.
///
/// # Errors
///
/// Returns an error if the room does not exist or the update fails.
pub fn update_room_fields(conn: &mut _, room: &Room) -> Result<(), PersistenceError> {
    let Some(room_id) = room.room_id else {
        return Err(PersistenceError::Other(String::from(
            "Cannot update a room without a persisted ID",
        )));
    };

    debug!("Updating fields for room ID: {}", room_id);

    let rows_affected: usize = diesel::update(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .set((
            rooms::number.eq(&room.number),
            rooms::room_type.eq(room.room_type.as_str()),
            rooms::floor.eq(room.floor),
            rooms::price.eq(room.price),
            rooms::capacity.eq(room.capacity),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Room with ID {room_id} not found"
        )));
    }

    Ok(())
}
}

backend_fn! {
/// Applies a guarded room status change.
///
/// The update only succeeds while the room still holds the expected prior
/// status; a concurrent writer that got there first surfaces as
/// `RoomStatusConflict`.
///
/// # Errors
///
/// Returns `PersistenceError::RoomStatusConflict` if the room is no longer
/// in the expected status.
pub fn apply_room_override(
    conn: &mut _,
    change: &RoomStatusChange,
) -> Result<(), PersistenceError> {
    info!(
        "Overriding room {} status: {} -> {}",
        change.room_id,
        change.from.as_str(),
        change.to.as_str()
    );

    let rows_affected: usize = diesel::update(rooms::table)
        .filter(rooms::room_id.eq(change.room_id))
        .filter(rooms::status.eq(change.from.as_str()))
        .set(rooms::status.eq(change.to.as_str()))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::RoomStatusConflict {
            room_id: change.room_id,
        });
    }

    Ok(())
}
}

/// Deletes a room if no bookings reference it (`SQLite` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if:
/// - Bookings reference the room
/// - The room does not exist
/// - The database operation fails
pub fn delete_room_sqlite(
    conn: &mut SqliteConnection,
    room_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete room ID: {}", room_id);

    if room_has_bookings_sqlite(conn, room_id)? {
        return Err(PersistenceError::RoomReferenced { room_id });
    }

    let rows_affected: usize = diesel::delete(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Room with ID {room_id} not found"
        )));
    }

    info!("Deleted room ID: {}", room_id);
    Ok(())
}

/// Deletes a room if no bookings reference it (`MySQL` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `room_id` - The room ID
///
/// # Errors
///
/// Returns an error if:
/// - Bookings reference the room
/// - The room does not exist
/// - The database operation fails
pub fn delete_room_mysql(
    conn: &mut MysqlConnection,
    room_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete room ID: {}", room_id);

    if room_has_bookings_mysql(conn, room_id)? {
        return Err(PersistenceError::RoomReferenced { room_id });
    }

    let rows_affected: usize = diesel::delete(rooms::table)
        .filter(rooms::room_id.eq(room_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Room with ID {room_id} not found"
        )));
    }

    info!("Deleted room ID: {}", room_id);
    Ok(())
}
