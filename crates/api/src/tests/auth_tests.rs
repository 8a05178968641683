// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_persistence;
use crate::auth::AuthenticationService;
use crate::error::ApiError;
use crate::handlers::{login, register_staff};
use crate::request_response::{LoginRequest, RegisterStaffRequest, RegisterStaffResponse};
use innkeep_persistence::Persistence;

fn register_request() -> RegisterStaffRequest {
    RegisterStaffRequest {
        name: String::from("Front Desk"),
        email: String::from("Desk@Hotel.com"),
        password: String::from("letmein123"),
        role: String::from("reception"),
    }
}

#[test]
fn test_register_staff_succeeds() {
    let mut persistence: Persistence = create_test_persistence();

    let response: RegisterStaffResponse =
        register_staff(&mut persistence, register_request()).unwrap();

    assert_eq!(response.staff.email, "desk@hotel.com");
    assert_eq!(response.staff.role, "reception");
    assert!(response.staff.id > 0);
    assert!(!response.token.is_empty());
}

#[test]
fn test_registration_token_is_a_live_session() {
    let mut persistence: Persistence = create_test_persistence();

    let response: RegisterStaffResponse =
        register_staff(&mut persistence, register_request()).unwrap();

    let (actor, _staff) =
        AuthenticationService::validate_session(&mut persistence, &response.token).unwrap();
    assert_eq!(actor.staff_id, response.staff.id);
}

#[test]
fn test_register_duplicate_email_conflicts() {
    let mut persistence: Persistence = create_test_persistence();

    register_staff(&mut persistence, register_request()).unwrap();
    let result: Result<RegisterStaffResponse, ApiError> =
        register_staff(&mut persistence, register_request());

    assert!(matches!(result, Err(ApiError::Conflict { .. })));
}

#[test]
fn test_register_rejects_unknown_role() {
    let mut persistence: Persistence = create_test_persistence();

    let mut request: RegisterStaffRequest = register_request();
    request.role = String::from("manager");

    let result: Result<RegisterStaffResponse, ApiError> =
        register_staff(&mut persistence, request);

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[test]
fn test_register_rejects_weak_password() {
    let mut persistence: Persistence = create_test_persistence();

    let mut request: RegisterStaffRequest = register_request();
    request.password = String::from("short");

    let result: Result<RegisterStaffResponse, ApiError> =
        register_staff(&mut persistence, request);

    assert!(matches!(
        result,
        Err(ApiError::PasswordPolicyViolation { .. })
    ));
}

#[test]
fn test_login_returns_token_and_staff() {
    let mut persistence: Persistence = create_test_persistence();
    register_staff(&mut persistence, register_request()).unwrap();

    let response = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("desk@hotel.com"),
            password: String::from("letmein123"),
        },
    )
    .unwrap();

    assert!(!response.token.is_empty());
    assert_eq!(response.staff.email, "desk@hotel.com");
}

#[test]
fn test_login_unknown_email_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("nobody@hotel.com"),
            password: String::from("letmein123"),
        },
    );

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[test]
fn test_login_wrong_password_fails_authentication() {
    let mut persistence: Persistence = create_test_persistence();
    register_staff(&mut persistence, register_request()).unwrap();

    let result = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("desk@hotel.com"),
            password: String::from("wrong-password"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_session_validates_after_login_and_dies_after_logout() {
    let mut persistence: Persistence = create_test_persistence();
    register_staff(&mut persistence, register_request()).unwrap();

    let response = login(
        &mut persistence,
        &LoginRequest {
            email: String::from("desk@hotel.com"),
            password: String::from("letmein123"),
        },
    )
    .unwrap();

    let (actor, staff) =
        AuthenticationService::validate_session(&mut persistence, &response.token).unwrap();
    assert_eq!(actor.staff_id, staff.staff_id);
    assert_eq!(staff.email, "desk@hotel.com");

    AuthenticationService::logout(&mut persistence, &response.token).unwrap();
    assert!(AuthenticationService::validate_session(&mut persistence, &response.token).is_err());
}

#[test]
fn test_validate_session_rejects_garbage_token() {
    let mut persistence: Persistence = create_test_persistence();

    let result = AuthenticationService::validate_session(&mut persistence, "not-a-token");
    assert!(result.is_err());
}

#[test]
fn test_login_records_last_login() {
    let mut persistence: Persistence = create_test_persistence();
    let registered: RegisterStaffResponse =
        register_staff(&mut persistence, register_request()).unwrap();

    login(
        &mut persistence,
        &LoginRequest {
            email: String::from("desk@hotel.com"),
            password: String::from("letmein123"),
        },
    )
    .unwrap();

    let staff = persistence
        .get_staff_by_id(registered.staff.id)
        .unwrap()
        .unwrap();
    assert!(staff.last_login_at.is_some());
}
