// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{bookings, payments};
use crate::error::PersistenceError;
use innkeep::PaymentPlan;

backend_fn! {
/// Applies a payment plan: inserts the payment and confirms the booking.
///
/// Both writes run in one transaction. The unique index on
/// `payments.booking_id` backstops the one-payment-per-booking rule even
/// if two recordings race past the lifecycle check; the loser fails with
/// a uniqueness violation and rolls back.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `plan` - The payment plan produced by the lifecycle manager
///
/// # Returns
///
/// The ID of the inserted payment.
///
/// # Errors
///
/// Returns an error if:
/// - A payment already exists for the booking (`UniqueViolation`)
/// - The booking moved out of the expected status (`BookingStatusConflict`)
pub fn record_payment(conn: &mut _, plan: &PaymentPlan) -> Result<i64, PersistenceError> {
    info!(
        "Recording {} payment of {} for booking {}",
        plan.payment.method.as_str(),
        plan.payment.amount,
        plan.payment.booking_id
    );

    conn.transaction(|conn| {
        diesel::insert_into(payments::table)
            .values((
                payments::booking_id.eq(plan.payment.booking_id),
                payments::amount.eq(plan.payment.amount),
                payments::method.eq(plan.payment.method.as_str()),
                payments::status.eq(plan.payment.status.as_str()),
            ))
            .execute(conn)?;

        let payment_id: i64 = conn.get_last_insert_rowid()?;

        if let Some(confirm) = &plan.confirm {
            let updated: usize = diesel::update(bookings::table)
                .filter(bookings::booking_id.eq(confirm.booking_id))
                .filter(bookings::status.eq(confirm.from.as_str()))
                .set(bookings::status.eq(confirm.to.as_str()))
                .execute(conn)?;

            if updated == 0 {
                return Err(PersistenceError::BookingStatusConflict {
                    booking_id: confirm.booking_id,
                });
            }
        }

        info!(payment_id, "Payment recorded successfully");
        Ok(payment_id)
    })
}
}
