// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod error;
mod plan;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{plan_booking, plan_booking_transition, plan_payment, plan_room_override};
pub use error::CoreError;
pub use plan::{BookingPlan, BookingTransition, PaymentPlan, RoomStatusChange};
