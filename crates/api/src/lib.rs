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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedStaff, AuthenticationService, Role};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    create_booking, create_guest, create_payment, create_room, delete_guest, delete_room,
    get_booking, get_guest, get_payment_by_booking, get_room, list_bookings, list_guests,
    list_payments, list_rooms, login, logout, register_staff, update_booking_status, update_guest,
    update_room,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    BookingDetailsInfo, BookingInfo, BookingResponse, CreateBookingRequest, CreateGuestRequest,
    CreatePaymentRequest, CreateRoomRequest, GuestInfo, GuestResponse, GuestWithBookingsInfo,
    LoginRequest, LoginResponse, MessageResponse, PaymentDetailsInfo, PaymentInfo,
    PaymentResponse, RegisterStaffRequest, RegisterStaffResponse, RoomInfo, RoomResponse,
    StaffInfo, UpdateBookingStatusRequest, UpdateGuestRequest, UpdateRoomRequest,
};
