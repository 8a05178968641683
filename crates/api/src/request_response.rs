// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Wire field names are camelCase (`guestId`, `checkIn`, ...), preserving
//! the contract the booking frontend consumes. Dates travel as ISO 8601
//! strings and are parsed at the handler boundary.

use serde::{Deserialize, Serialize};

use innkeep_domain::{Booking, Guest, Payment, Room, format_iso_date};
use innkeep_persistence::StaffData;

/// API request to register a staff account.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStaffRequest {
    /// The staff member's name.
    pub name: String,
    /// The login email (unique).
    pub email: String,
    /// The plain-text password (validated against the password policy).
    pub password: String,
    /// The role (`admin` or `reception`).
    pub role: String,
}

/// Staff account information returned by auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInfo {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The staff member's name.
    pub name: String,
    /// The login email.
    pub email: String,
    /// The role string.
    pub role: String,
}

impl StaffInfo {
    /// Builds the wire representation of a staff record.
    #[must_use]
    pub fn from_staff(staff: &StaffData) -> Self {
        Self {
            id: staff.staff_id,
            name: staff.name.clone(),
            email: staff.email.clone(),
            role: staff.role.clone(),
        }
    }
}

/// API response for a successful staff registration.
///
/// Registration logs the new account straight in: the response carries a
/// session token alongside the created record.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStaffResponse {
    /// A success message.
    pub message: String,
    /// The bearer session token (7-day expiry).
    pub token: String,
    /// The created staff account.
    pub staff: StaffInfo,
}

/// API request to log in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The login email.
    pub email: String,
    /// The plain-text password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The bearer session token (7-day expiry).
    pub token: String,
    /// The authenticated staff account.
    pub staff: StaffInfo,
}

/// API request to create a room.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// The room number (unique).
    pub number: String,
    /// The room type (`standard | deluxe | suite | presidential`).
    #[serde(rename = "type")]
    pub room_type: String,
    /// The floor (zero or positive).
    pub floor: i32,
    /// The per-night rate.
    pub price: f64,
    /// The maximum number of guests.
    pub capacity: i32,
}

/// API request to update a room.
///
/// Absent fields are left unchanged. `status` is an override restricted to
/// the available/maintenance pair; the booking lifecycle owns `occupied`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    /// The room number.
    pub number: Option<String>,
    /// The room type.
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    /// The floor.
    pub floor: Option<i32>,
    /// The per-night rate. Existing bookings keep their original total.
    pub price: Option<f64>,
    /// The maximum number of guests.
    pub capacity: Option<i32>,
    /// The status override (`available` or `maintenance`).
    pub status: Option<String>,
}

/// Room information for API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The room number.
    pub number: String,
    /// The room type string.
    #[serde(rename = "type")]
    pub room_type: String,
    /// The floor.
    pub floor: i32,
    /// The per-night rate.
    pub price: f64,
    /// The maximum number of guests.
    pub capacity: i32,
    /// The status string.
    pub status: String,
}

impl RoomInfo {
    /// Builds the wire representation of a room.
    #[must_use]
    pub fn from_room(room: &Room) -> Self {
        Self {
            id: room.room_id.unwrap_or_default(),
            number: room.number.clone(),
            room_type: room.room_type.as_str().to_string(),
            floor: room.floor,
            price: room.price,
            capacity: room.capacity,
            status: room.status.as_str().to_string(),
        }
    }
}

/// API response for room create and update operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    /// A success message.
    pub message: String,
    /// The room after the operation.
    pub room: RoomInfo,
}

/// API request to create a guest.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestRequest {
    /// The guest's name.
    pub name: String,
    /// The guest's email (unique).
    pub email: String,
    /// The guest's phone number.
    pub phone: String,
}

/// API request to update a guest.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    /// The guest's name.
    pub name: Option<String>,
    /// The guest's email.
    pub email: Option<String>,
    /// The guest's phone number.
    pub phone: Option<String>,
}

/// Guest information for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The guest's name.
    pub name: String,
    /// The guest's email.
    pub email: String,
    /// The guest's phone number.
    pub phone: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

impl GuestInfo {
    /// Builds the wire representation of a guest.
    #[must_use]
    pub fn from_guest(guest: &Guest) -> Self {
        Self {
            id: guest.guest_id.unwrap_or_default(),
            name: guest.name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            created_at: guest.created_at.clone(),
        }
    }
}

/// A guest together with their bookings for API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestWithBookingsInfo {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The guest's name.
    pub name: String,
    /// The guest's email.
    pub email: String,
    /// The guest's phone number.
    pub phone: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// The guest's bookings, oldest first.
    pub bookings: Vec<BookingInfo>,
}

/// API response for guest create and update operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestResponse {
    /// A success message.
    pub message: String,
    /// The guest after the operation.
    pub guest: GuestInfo,
}

/// API request to create a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// The guest holding the reservation.
    pub guest_id: i64,
    /// The room to reserve.
    pub room_id: i64,
    /// The check-in date (`YYYY-MM-DD`).
    pub check_in: String,
    /// The check-out date (`YYYY-MM-DD`).
    pub check_out: String,
    /// Accepted for wire compatibility and ignored; the server computes
    /// nights × room price.
    pub total_price: Option<f64>,
}

/// API request to update a booking's status.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    /// The requested status (`pending | confirmed | cancelled | completed`).
    pub status: String,
}

/// Booking information for API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The guest holding the booking.
    pub guest_id: i64,
    /// The reserved room.
    pub room_id: i64,
    /// The check-in date (`YYYY-MM-DD`).
    pub check_in: String,
    /// The check-out date (`YYYY-MM-DD`).
    pub check_out: String,
    /// The total price fixed at creation.
    pub total_price: f64,
    /// The status string.
    pub status: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

impl BookingInfo {
    /// Builds the wire representation of a booking.
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.booking_id.unwrap_or_default(),
            guest_id: booking.guest_id,
            room_id: booking.room_id,
            check_in: format_iso_date(booking.check_in),
            check_out: format_iso_date(booking.check_out),
            total_price: booking.total_price,
            status: booking.status.as_str().to_string(),
            created_at: booking.created_at.clone(),
        }
    }
}

/// A booking with its guest, room, and payment for API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailsInfo {
    /// The booking.
    pub booking: BookingInfo,
    /// The guest holding the booking.
    pub guest: GuestInfo,
    /// The reserved room.
    pub room: RoomInfo,
    /// The payment, if one has been recorded.
    pub payment: Option<PaymentInfo>,
}

/// API response for booking create and update operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    /// A success message.
    pub message: String,
    /// The booking after the operation.
    pub booking: BookingInfo,
}

/// API request to record a payment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// The booking being settled.
    pub booking_id: i64,
    /// The paid amount.
    pub amount: f64,
    /// The payment method (`cash | card | bank_transfer | stripe`).
    pub method: String,
}

/// Payment information for API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    /// The canonical numeric identifier.
    pub id: i64,
    /// The settled booking.
    pub booking_id: i64,
    /// The paid amount.
    pub amount: f64,
    /// The method string.
    pub method: String,
    /// The settlement status string.
    pub status: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

impl PaymentInfo {
    /// Builds the wire representation of a payment.
    #[must_use]
    pub fn from_payment(payment: &Payment) -> Self {
        Self {
            id: payment.payment_id.unwrap_or_default(),
            booking_id: payment.booking_id,
            amount: payment.amount,
            method: payment.method.as_str().to_string(),
            status: payment.status.as_str().to_string(),
            created_at: payment.created_at.clone(),
        }
    }
}

/// A payment with its booking, guest, and room for API responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsInfo {
    /// The payment.
    pub payment: PaymentInfo,
    /// The settled booking.
    pub booking: BookingInfo,
    /// The guest holding the booking.
    pub guest: GuestInfo,
    /// The reserved room.
    pub room: RoomInfo,
}

/// API response for payment creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// A success message.
    pub message: String,
    /// The recorded payment.
    pub payment: PaymentInfo,
}

/// Generic success message for delete and logout operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// A success message.
    pub message: String,
}
