// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A row could not be mapped back into a domain value.
    SerializationError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A uniqueness constraint was violated.
    UniqueViolation(String),
    /// A foreign key constraint was violated.
    ForeignKeyViolation(String),
    /// A guarded room status update found the room in a different status.
    /// This is how a lost reservation race surfaces.
    RoomStatusConflict {
        /// The room whose status moved underneath the update.
        room_id: i64,
    },
    /// A guarded booking status update found the booking in a different
    /// status.
    BookingStatusConflict {
        /// The booking whose status moved underneath the update.
        booking_id: i64,
    },
    /// The room cannot be deleted because bookings reference it.
    RoomReferenced {
        /// The room identifier.
        room_id: i64,
    },
    /// The guest cannot be deleted because bookings reference them.
    GuestReferenced {
        /// The guest identifier.
        guest_id: i64,
    },
    /// The requested session was not found.
    SessionNotFound(String),
    /// Session has expired.
    SessionExpired(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::UniqueViolation(msg) => write!(f, "Uniqueness violation: {msg}"),
            Self::ForeignKeyViolation(msg) => write!(f, "Foreign key violation: {msg}"),
            Self::RoomStatusConflict { room_id } => {
                write!(f, "Room {room_id} is no longer in the expected status")
            }
            Self::BookingStatusConflict { booking_id } => {
                write!(f, "Booking {booking_id} is no longer in the expected status")
            }
            Self::RoomReferenced { room_id } => {
                write!(f, "Room {room_id} cannot be deleted: bookings reference it")
            }
            Self::GuestReferenced { guest_id } => {
                write!(
                    f,
                    "Guest {guest_id} cannot be deleted: bookings reference them"
                )
            }
            Self::SessionNotFound(msg) => write!(f, "Session not found: {msg}"),
            Self::SessionExpired(msg) => write!(f, "Session expired: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::DatabaseErrorKind;
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::ForeignKeyViolation(info.message().to_string())
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<innkeep_domain::DomainError> for PersistenceError {
    fn from(err: innkeep_domain::DomainError) -> Self {
        Self::SerializationError(err.to_string())
    }
}
