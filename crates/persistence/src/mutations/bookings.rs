// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.
//!
//! The reservation and the status transitions are the cross-entity writes
//! of the system. Each runs in a single transaction; the room claim is a
//! conditional update so that two handlers racing for the same room cannot
//! both win.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{bookings, rooms};
use crate::error::PersistenceError;
use innkeep::{BookingPlan, BookingTransition};
use innkeep_domain::format_iso_date;

backend_fn! {
/// Applies a reservation plan: claims the room and inserts the booking.
///
/// Both writes run in one transaction. The claim is a conditional update
/// (`SET status = 'occupied' WHERE status = 'available'`); zero affected
/// rows means another request reserved the room first and the whole
/// transaction rolls back.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `plan` - The reservation plan produced by the lifecycle manager
///
/// # Returns
///
/// The ID of the inserted booking.
///
/// # Errors
///
/// Returns `PersistenceError::RoomStatusConflict` if the room was no
/// longer available when the claim executed.
pub fn reserve_room(conn: &mut _, plan: &BookingPlan) -> Result<i64, PersistenceError> {
    info!(
        "Reserving room {} for guest {} ({} -> {})",
        plan.claim.room_id,
        plan.booking.guest_id,
        format_iso_date(plan.booking.check_in),
        format_iso_date(plan.booking.check_out)
    );

    conn.transaction(|conn| {
        let claimed: usize = diesel::update(rooms::table)
            .filter(rooms::room_id.eq(plan.claim.room_id))
            .filter(rooms::status.eq(plan.claim.from.as_str()))
            .set(rooms::status.eq(plan.claim.to.as_str()))
            .execute(conn)?;

        if claimed == 0 {
            return Err(PersistenceError::RoomStatusConflict {
                room_id: plan.claim.room_id,
            });
        }

        diesel::insert_into(bookings::table)
            .values((
                bookings::guest_id.eq(plan.booking.guest_id),
                bookings::room_id.eq(plan.booking.room_id),
                bookings::check_in.eq(format_iso_date(plan.booking.check_in)),
                bookings::check_out.eq(format_iso_date(plan.booking.check_out)),
                bookings::total_price.eq(plan.booking.total_price),
                bookings::status.eq(plan.booking.status.as_str()),
            ))
            .execute(conn)?;

        let booking_id: i64 = conn.get_last_insert_rowid()?;

        info!(booking_id, "Booking created successfully");
        Ok(booking_id)
    })
}
}

backend_fn! {
/// Applies a booking status transition and any room release.
///
/// The booking update is guarded by the expected prior status so a stale
/// snapshot cannot clobber a concurrent transition. The release tolerates
/// an already-released room.
///
/// # Errors
///
/// Returns `PersistenceError::BookingStatusConflict` if the booking moved
/// out of the expected status before the update executed.
pub fn apply_booking_transition(
    conn: &mut _,
    transition: &BookingTransition,
) -> Result<(), PersistenceError> {
    info!(
        "Transitioning booking {}: {} -> {}",
        transition.booking_id,
        transition.from.as_str(),
        transition.to.as_str()
    );

    conn.transaction(|conn| {
        let updated: usize = diesel::update(bookings::table)
            .filter(bookings::booking_id.eq(transition.booking_id))
            .filter(bookings::status.eq(transition.from.as_str()))
            .set(bookings::status.eq(transition.to.as_str()))
            .execute(conn)?;

        if updated == 0 {
            return Err(PersistenceError::BookingStatusConflict {
                booking_id: transition.booking_id,
            });
        }

        if let Some(release) = &transition.release {
            diesel::update(rooms::table)
                .filter(rooms::room_id.eq(release.room_id))
                .filter(rooms::status.eq(release.from.as_str()))
                .set(rooms::status.eq(release.to.as_str()))
                .execute(conn)?;
        }

        Ok(())
    })
}
}
