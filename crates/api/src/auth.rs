// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication types and services.
//!
//! Staff authenticate with email and password; successful logins mint an
//! opaque session token stored server-side with a seven-day expiry. The
//! token is presented as a bearer credential on every staff request.

use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};

use innkeep_domain::DomainError;
use innkeep_persistence::{Persistence, PersistenceError, StaffData, verify_password};

use crate::error::AuthError;

/// Timestamp format for session expiries.
///
/// Matches the `CURRENT_TIMESTAMP` rendering of the entity store so that
/// lexicographic comparison in the expired-session sweep is sound.
const TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Staff roles.
///
/// Roles identify staff accounts and ride along in the session payload.
/// Every staff endpoint accepts any authenticated role; the distinction is
/// presentational (the admin dashboard) rather than an authorization
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Hotel administrator.
    Admin,
    /// Front-desk reception staff.
    Reception,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "reception" => Ok(Self::Reception),
            _ => Err(DomainError::InvalidRole(format!(
                "Unknown role: {s}. Must be 'admin' or 'reception'"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Reception => "reception",
        }
    }
}

/// An authenticated staff member.
///
/// This is the caller identity handlers receive once the Access Gateway
/// has validated the bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedStaff {
    /// The staff member's canonical identifier.
    pub staff_id: i64,
    /// The staff member's name.
    pub name: String,
    /// The role assigned to this staff member.
    pub role: Role,
}

impl AuthenticatedStaff {
    /// Creates a new authenticated staff identity.
    #[must_use]
    pub const fn new(staff_id: i64, name: String, role: Role) -> Self {
        Self {
            staff_id,
            name,
            role,
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session expiration duration (7 days).
    const SESSION_EXPIRATION: Duration = Duration::days(7);

    /// Authenticates a staff member and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The staff login email
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_staff`, `staff_data`)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnknownStaff` if no account exists for the email,
    /// or `AuthError::AuthenticationFailed` if the password does not match.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedStaff, StaffData), AuthError> {
        // Retrieve the staff account by email
        let staff: StaffData = persistence
            .get_staff_by_email(email)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::UnknownStaff {
                email: email.to_string(),
            })?;

        // Verify the password against the stored hash
        let matches: bool = verify_password(password, &staff.password_hash).map_err(|e| {
            AuthError::AuthenticationFailed {
                reason: format!("Password verification failed: {e}"),
            }
        })?;
        if !matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid credentials"),
            });
        }

        // Parse role
        let role: Role = staff
            .role
            .parse()
            .map_err(|e: DomainError| AuthError::AuthenticationFailed {
                reason: e.to_string(),
            })?;

        // Generate session token and expiry
        let session_token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + Self::SESSION_EXPIRATION;
        let expires_at_str: String =
            expires_at
                .format(TIMESTAMP)
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Failed to format expiration time: {e}"),
                })?;

        // Create session
        persistence
            .create_session(&session_token, staff.staff_id, &expires_at_str)
            .map_err(Self::map_persistence_error)?;

        // Update last login timestamp
        persistence
            .update_last_login(staff.staff_id)
            .map_err(Self::map_persistence_error)?;

        let authenticated_staff: AuthenticatedStaff =
            AuthenticatedStaff::new(staff.staff_id, staff.name.clone(), role);

        Ok((session_token, authenticated_staff, staff))
    }

    /// Validates a session token and returns the authenticated staff.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_staff`, `staff_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<(AuthenticatedStaff, StaffData), AuthError> {
        // Retrieve session
        let session = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        // Check if session is expired
        let expires_at: PrimitiveDateTime = PrimitiveDateTime::parse(&session.expires_at, TIMESTAMP)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            })?;

        if OffsetDateTime::now_utc() > expires_at.assume_utc() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        // Retrieve the staff account
        let staff: StaffData = persistence
            .get_staff_by_id(session.staff_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Staff account not found"),
            })?;

        // Parse role
        let role: Role = staff
            .role
            .parse()
            .map_err(|e: DomainError| AuthError::AuthenticationFailed {
                reason: e.to_string(),
            })?;

        // Update session activity
        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        let authenticated_staff: AuthenticatedStaff =
            AuthenticatedStaff::new(staff.staff_id, staff.name.clone(), role);

        Ok((authenticated_staff, staff))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates an opaque session token.
    ///
    /// 256 bits of randomness rendered as hex.
    fn generate_session_token() -> String {
        format!(
            "{:032x}{:032x}",
            rand::random::<u128>(),
            rand::random::<u128>()
        )
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: PersistenceError) -> AuthError {
        match err {
            PersistenceError::SessionExpired(msg) | PersistenceError::SessionNotFound(msg) => {
                AuthError::AuthenticationFailed { reason: msg }
            }
            _ => AuthError::AuthenticationFailed {
                reason: format!("Database error: {err}"),
            },
        }
    }
}
