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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use innkeep_api::{
    ApiError, BookingDetailsInfo, BookingResponse, CreateBookingRequest, CreateGuestRequest,
    CreatePaymentRequest, CreateRoomRequest, GuestResponse, GuestWithBookingsInfo, LoginRequest,
    LoginResponse, MessageResponse, PaymentDetailsInfo, PaymentInfo, PaymentResponse,
    RegisterStaffRequest, RegisterStaffResponse, RoomInfo, RoomResponse,
    UpdateBookingStatusRequest, UpdateGuestRequest, UpdateRoomRequest,
};
use innkeep_persistence::{Persistence, PersistenceError};

mod session;

use session::SessionStaff;

/// innkeep server - HTTP API for the hotel management system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
pub struct AppState {
    /// The persistence layer for the hotel entity store.
    pub persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Validation { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handler for GET `/` endpoint.
///
/// Liveness line for anything poking the root.
async fn handle_health() -> &'static str {
    "Hotel API running"
}

/// Handler for POST `/api/auth/register` endpoint.
///
/// Registers a new staff account.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterStaffRequest>,
) -> Result<(StatusCode, Json<RegisterStaffResponse>), HttpError> {
    info!(email = %req.email, role = %req.role, "Handling register request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterStaffResponse = innkeep_api::register_staff(&mut persistence, req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/api/auth/login` endpoint.
///
/// Authenticates a staff member and returns a session token.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(email = %req.email, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = innkeep_api::login(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/auth/logout` endpoint.
///
/// Deletes the presented session.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, token): SessionStaff,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(staff_id = staff.staff_id, "Handling logout request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = innkeep_api::logout(&mut persistence, &token)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/rooms` endpoint.
///
/// Lists all rooms. Public: the booking site renders this without a
/// session.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<RoomInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let rooms: Vec<RoomInfo> = innkeep_api::list_rooms(&mut persistence)?;
    drop(persistence);

    Ok(Json(rooms))
}

/// Handler for GET `/api/rooms/{room_id}` endpoint.
///
/// Returns a single room. Public.
async fn handle_get_room(
    AxumState(app_state): AxumState<AppState>,
    Path(room_id): Path<i64>,
) -> Result<Json<RoomInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let room: RoomInfo = innkeep_api::get_room(&mut persistence, room_id)?;
    drop(persistence);

    Ok(Json(room))
}

/// Handler for POST `/api/rooms` endpoint.
///
/// Creates a new room.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Json(req): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), HttpError> {
    info!(number = %req.number, "Handling create_room request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RoomResponse = innkeep_api::create_room(&mut persistence, &staff, req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/api/rooms/{room_id}` endpoint.
///
/// Updates room fields and/or applies a status override.
async fn handle_update_room(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Path(room_id): Path<i64>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, HttpError> {
    info!(room_id, "Handling update_room request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RoomResponse = innkeep_api::update_room(&mut persistence, &staff, room_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/rooms/{room_id}` endpoint.
///
/// Deletes a room with no booking history.
async fn handle_delete_room(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Path(room_id): Path<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(room_id, "Handling delete_room request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = innkeep_api::delete_room(&mut persistence, &staff, room_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/guests` endpoint.
///
/// Lists all guests with their bookings.
async fn handle_list_guests(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff, _token): SessionStaff,
) -> Result<Json<Vec<GuestWithBookingsInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let guests: Vec<GuestWithBookingsInfo> = innkeep_api::list_guests(&mut persistence)?;
    drop(persistence);

    Ok(Json(guests))
}

/// Handler for GET `/api/guests/{guest_id}` endpoint.
///
/// Returns a guest with their bookings.
async fn handle_get_guest(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff, _token): SessionStaff,
    Path(guest_id): Path<i64>,
) -> Result<Json<GuestWithBookingsInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let guest: GuestWithBookingsInfo = innkeep_api::get_guest(&mut persistence, guest_id)?;
    drop(persistence);

    Ok(Json(guest))
}

/// Handler for POST `/api/guests` endpoint.
///
/// Registers a new guest.
async fn handle_create_guest(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Json(req): Json<CreateGuestRequest>,
) -> Result<(StatusCode, Json<GuestResponse>), HttpError> {
    info!(email = %req.email, "Handling create_guest request");

    let mut persistence = app_state.persistence.lock().await;
    let response: GuestResponse = innkeep_api::create_guest(&mut persistence, &staff, req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/api/guests/{guest_id}` endpoint.
///
/// Updates a guest.
async fn handle_update_guest(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Path(guest_id): Path<i64>,
    Json(req): Json<UpdateGuestRequest>,
) -> Result<Json<GuestResponse>, HttpError> {
    info!(guest_id, "Handling update_guest request");

    let mut persistence = app_state.persistence.lock().await;
    let response: GuestResponse =
        innkeep_api::update_guest(&mut persistence, &staff, guest_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/api/guests/{guest_id}` endpoint.
///
/// Deletes a guest with no booking history.
async fn handle_delete_guest(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Path(guest_id): Path<i64>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(guest_id, "Handling delete_guest request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = innkeep_api::delete_guest(&mut persistence, &staff, guest_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/bookings` endpoint.
///
/// Lists all bookings with guest, room, and payment joined.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff, _token): SessionStaff,
) -> Result<Json<Vec<BookingDetailsInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let bookings: Vec<BookingDetailsInfo> = innkeep_api::list_bookings(&mut persistence)?;
    drop(persistence);

    Ok(Json(bookings))
}

/// Handler for GET `/api/bookings/{booking_id}` endpoint.
///
/// Returns a booking with guest, room, and payment joined.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff, _token): SessionStaff,
    Path(booking_id): Path<i64>,
) -> Result<Json<BookingDetailsInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingDetailsInfo = innkeep_api::get_booking(&mut persistence, booking_id)?;
    drop(persistence);

    Ok(Json(booking))
}

/// Handler for POST `/api/bookings` endpoint.
///
/// Reserves a room: the availability check, the room claim, and the
/// booking insert are one atomic operation in the entity store.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), HttpError> {
    info!(
        guest_id = req.guest_id,
        room_id = req.room_id,
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse = innkeep_api::create_booking(&mut persistence, &staff, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for PUT `/api/bookings/{booking_id}` endpoint.
///
/// Updates a booking's status through the lifecycle manager; terminal
/// transitions release the room.
async fn handle_update_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Path(booking_id): Path<i64>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(booking_id, status = %req.status, "Handling update_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let response: BookingResponse =
        innkeep_api::update_booking_status(&mut persistence, &staff, booking_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/payments` endpoint.
///
/// Lists all payments with booking, guest, and room joined.
async fn handle_list_payments(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff, _token): SessionStaff,
) -> Result<Json<Vec<PaymentDetailsInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let payments: Vec<PaymentDetailsInfo> = innkeep_api::list_payments(&mut persistence)?;
    drop(persistence);

    Ok(Json(payments))
}

/// Handler for GET `/api/payments/{booking_id}` endpoint.
///
/// Returns the payment for a booking.
async fn handle_get_payment(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(_staff, _token): SessionStaff,
    Path(booking_id): Path<i64>,
) -> Result<Json<PaymentInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let payment: PaymentInfo = innkeep_api::get_payment_by_booking(&mut persistence, booking_id)?;
    drop(persistence);

    Ok(Json(payment))
}

/// Handler for POST `/api/payments` endpoint.
///
/// Records a payment; the booking is confirmed in the same transaction.
async fn handle_create_payment(
    AxumState(app_state): AxumState<AppState>,
    SessionStaff(staff, _token): SessionStaff,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<PaymentResponse>), HttpError> {
    info!(booking_id = req.booking_id, "Handling create_payment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: PaymentResponse = innkeep_api::create_payment(&mut persistence, &staff, &req)?;
    drop(persistence);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_health))
        .route("/api/auth/register", post(handle_register))
        .route("/api/auth/login", post(handle_login))
        .route("/api/auth/logout", post(handle_logout))
        .route("/api/rooms", get(handle_list_rooms))
        .route("/api/rooms", post(handle_create_room))
        .route("/api/rooms/{room_id}", get(handle_get_room))
        .route("/api/rooms/{room_id}", put(handle_update_room))
        .route("/api/rooms/{room_id}", delete(handle_delete_room))
        .route("/api/guests", get(handle_list_guests))
        .route("/api/guests", post(handle_create_guest))
        .route("/api/guests/{guest_id}", get(handle_get_guest))
        .route("/api/guests/{guest_id}", put(handle_update_guest))
        .route("/api/guests/{guest_id}", delete(handle_delete_guest))
        .route("/api/bookings", get(handle_list_bookings))
        .route("/api/bookings", post(handle_create_booking))
        .route("/api/bookings/{booking_id}", get(handle_get_booking))
        .route("/api/bookings/{booking_id}", put(handle_update_booking))
        .route("/api/payments", get(handle_list_payments))
        .route("/api/payments", post(handle_create_payment))
        .route("/api/payments/{booking_id}", get(handle_get_payment))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing innkeep server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Helper to build a JSON request.
    fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    /// Helper to read a response body as JSON.
    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Registers a staff account and logs in, returning the session token.
    async fn register_and_login(app: &Router) -> String {
        let register_body = serde_json::json!({
            "name": "Test Manager",
            "email": "manager@hotel.com",
            "password": "letmein123",
            "role": "admin",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/register",
                None,
                &register_body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let login_body = serde_json::json!({
            "email": "manager@hotel.com",
            "password": "letmein123",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/auth/login", None, &login_body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let login: LoginResponse = read_json(response).await;
        login.token
    }

    /// Creates a standard room and returns its ID.
    async fn create_room(app: &Router, token: &str, number: &str) -> i64 {
        let body = serde_json::json!({
            "number": number,
            "type": "standard",
            "floor": 1,
            "price": 200.0,
            "capacity": 2,
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/rooms", Some(token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let created: RoomResponse = read_json(response).await;
        created.room.id
    }

    /// Creates a guest and returns their ID.
    async fn create_guest(app: &Router, token: &str, email: &str) -> i64 {
        let body = serde_json::json!({
            "name": "Ada Lovelace",
            "email": email,
            "phone": "555-0100",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/guests", Some(token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let created: GuestResponse = read_json(response).await;
        created.guest.id
    }

    /// Books a room for three nights and returns the booking ID.
    async fn create_booking(app: &Router, token: &str, guest_id: i64, room_id: i64) -> i64 {
        let body = serde_json::json!({
            "guestId": guest_id,
            "roomId": room_id,
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-04",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", Some(token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CREATED);

        let created: BookingResponse = read_json(response).await;
        created.booking.id
    }

    /// Fetches a room's status string.
    async fn room_status(app: &Router, room_id: i64) -> String {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/rooms/{room_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let room: RoomInfo = read_json(response).await;
        room.status
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let app: Router = build_router(create_test_app_state());
        register_and_login(&app).await;

        let body = serde_json::json!({
            "name": "Someone Else",
            "email": "manager@hotel.com",
            "password": "password99",
            "role": "reception",
        })
        .to_string();
        let response = app
            .oneshot(json_request("POST", "/api/auth/register", None, &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        let error: ErrorResponse = read_json(response).await;
        assert!(error.error);
        assert!(error.message.contains("already exists"));
    }

    #[tokio::test]
    async fn test_login_unknown_email_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let body = serde_json::json!({
            "email": "nobody@hotel.com",
            "password": "letmein123",
        })
        .to_string();
        let response = app
            .oneshot(json_request("POST", "/api/auth/login", None, &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_wrong_password_returns_unauthorized() {
        let app: Router = build_router(create_test_app_state());
        register_and_login(&app).await;

        let body = serde_json::json!({
            "email": "manager@hotel.com",
            "password": "wrong-password",
        })
        .to_string();
        let response = app
            .oneshot(json_request("POST", "/api/auth/login", None, &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_rooms_are_public_but_room_creation_is_not() {
        let app: Router = build_router(create_test_app_state());

        // Listing works without a session.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/rooms")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        // Creation requires a session.
        let body = serde_json::json!({
            "number": "101",
            "type": "standard",
            "floor": 1,
            "price": 200.0,
            "capacity": 2,
        })
        .to_string();
        let response = app
            .oneshot(json_request("POST", "/api/rooms", None, &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/bookings")
                    .header("Authorization", "Bearer not-a-real-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/auth/logout", Some(&token), "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/bookings")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_booking_lifecycle_end_to_end() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;

        // Reserve 3 nights at 200: total 600, room flips to occupied.
        let booking_id: i64 = create_booking(&app, &token, guest_id, room_id).await;
        assert_eq!(room_status(&app, room_id).await, "occupied");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/bookings/{booking_id}"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let details: BookingDetailsInfo = read_json(response).await;
        assert_eq!(details.booking.status, "pending");
        assert!((details.booking.total_price - 600.0).abs() < f64::EPSILON);
        assert_eq!(details.room.number, "101");
        assert!(details.payment.is_none());

        // A second reservation against the occupied room conflicts.
        let body = serde_json::json!({
            "guestId": guest_id,
            "roomId": room_id,
            "checkIn": "2025-06-10",
            "checkOut": "2025-06-12",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        // Paying confirms the booking.
        let body = serde_json::json!({
            "bookingId": booking_id,
            "amount": 600.0,
            "method": "card",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/payments", Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let payment: PaymentResponse = read_json(response).await;
        assert_eq!(payment.payment.status, "paid");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/bookings/{booking_id}"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let details: BookingDetailsInfo = read_json(response).await;
        assert_eq!(details.booking.status, "confirmed");

        // A second payment for the same booking conflicts.
        let body = serde_json::json!({
            "bookingId": booking_id,
            "amount": 600.0,
            "method": "cash",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/payments", Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        // Cancelling releases the room.
        let body = serde_json::json!({ "status": "cancelled" }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/bookings/{booking_id}"),
                Some(&token),
                &body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(room_status(&app, room_id).await, "available");
    }

    #[tokio::test]
    async fn test_booking_with_invalid_dates_is_rejected() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;

        let body = serde_json::json!({
            "guestId": guest_id,
            "roomId": room_id,
            "checkIn": "2025-06-04",
            "checkOut": "2025-06-01",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", Some(&token), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
        assert_eq!(room_status(&app, room_id).await, "available");
    }

    #[tokio::test]
    async fn test_booking_missing_room_returns_not_found() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;

        let body = serde_json::json!({
            "guestId": guest_id,
            "roomId": 999,
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-04",
        })
        .to_string();
        let response = app
            .oneshot(json_request("POST", "/api/bookings", Some(&token), &body))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_illegal_booking_transition_conflicts() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;
        let booking_id: i64 = create_booking(&app, &token, guest_id, room_id).await;

        let body = serde_json::json!({ "status": "completed" }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/bookings/{booking_id}"),
                Some(&token),
                &body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body = serde_json::json!({ "status": "pending" }).to_string();
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/bookings/{booking_id}"),
                Some(&token),
                &body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_guest_listing_includes_bookings() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;
        let booking_id: i64 = create_booking(&app, &token, guest_id, room_id).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/guests")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let guests: Vec<GuestWithBookingsInfo> = read_json(response).await;
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].bookings.len(), 1);
        assert_eq!(guests[0].bookings[0].id, booking_id);
    }

    #[tokio::test]
    async fn test_payment_lookup_by_booking() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;
        let booking_id: i64 = create_booking(&app, &token, guest_id, room_id).await;

        // No payment yet.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/payments/{booking_id}"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);

        let body = serde_json::json!({
            "bookingId": booking_id,
            "amount": 600.0,
            "method": "bank_transfer",
        })
        .to_string();
        app.clone()
            .oneshot(json_request("POST", "/api/payments", Some(&token), &body))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/payments/{booking_id}"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let payment: PaymentInfo = read_json(response).await;
        assert_eq!(payment.booking_id, booking_id);
        assert_eq!(payment.method, "bank_transfer");
    }

    #[tokio::test]
    async fn test_room_delete_with_bookings_conflicts() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;
        create_booking(&app, &token, guest_id, room_id).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/rooms/{room_id}"))
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_room_maintenance_override_round_trip() {
        let app: Router = build_router(create_test_app_state());
        let token: String = register_and_login(&app).await;

        let room_id: i64 = create_room(&app, &token, "101").await;

        let body = serde_json::json!({ "status": "maintenance" }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/rooms/{room_id}"),
                Some(&token),
                &body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(room_status(&app, room_id).await, "maintenance");

        // A maintenance room cannot be booked.
        let guest_id: i64 = create_guest(&app, &token, "ada@example.com").await;
        let body = serde_json::json!({
            "guestId": guest_id,
            "roomId": room_id,
            "checkIn": "2025-06-01",
            "checkOut": "2025-06-04",
        })
        .to_string();
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/bookings", Some(&token), &body))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::CONFLICT);

        let body = serde_json::json!({ "status": "available" }).to_string();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/rooms/{room_id}"),
                Some(&token),
                &body,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        assert_eq!(room_status(&app, room_id).await, "available");
    }
}
