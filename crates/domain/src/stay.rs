// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay date arithmetic: parsing, nights, and total price.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date format used on the wire and in the entity store.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_iso_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(date_string, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Formats a calendar date as `YYYY-MM-DD`.
///
/// Falls back to the `Display` rendering if formatting fails, which for a
/// valid `Date` it cannot.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Computes the number of nights between check-in and check-out.
///
/// A night is one whole calendar day; the stay must span at least one.
///
/// # Errors
///
/// Returns `DomainError::InvalidStayDates` if `check_out` is not strictly
/// after `check_in`.
pub fn nights(check_in: Date, check_out: Date) -> Result<i64, DomainError> {
    let span: i64 = (check_out - check_in).whole_days();
    if span <= 0 {
        return Err(DomainError::InvalidStayDates {
            check_in,
            check_out,
        });
    }
    Ok(span)
}

/// Computes the total price for a stay: nights × per-night rate.
///
/// The result is fixed on the booking at creation time and never re-derived.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn total_price(nights: i64, nightly_rate: f64) -> f64 {
    nightly_rate * nights as f64
}
