//! Database error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Classification of database failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DbErrorKind {
    /// Zero rows matched where exactly one was expected.
    #[display("not found")]
    NotFound,
    /// A storage-level constraint was violated (e.g. duplicate room name).
    #[display("constraint violation")]
    Constraint,
    /// The database could not be reached or opened.
    #[display("connection failure")]
    Connection,
    /// Any other statement or mapping failure.
    #[display("query failure")]
    Query,
}

/// Database error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Database error ({}): {} at {}:{}", kind, message, file, line)]
pub struct DbError {
    /// Failure classification.
    pub kind: DbErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DbError {
    /// Creates a new database error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: DbErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates a `NotFound` error.
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(DbErrorKind::NotFound, message)
    }

    /// Returns the failure classification.
    pub fn kind(&self) -> DbErrorKind {
        self.kind
    }

    /// True if zero rows matched where exactly one was expected.
    pub fn is_not_found(&self) -> bool {
        self.kind == DbErrorKind::NotFound
    }
}

// From impls don't need #[instrument] (conversion traits)
impl From<diesel::result::Error> for DbError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};
        match err {
            Error::NotFound => Self::new(DbErrorKind::NotFound, "record not found"),
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::new(DbErrorKind::Constraint, info.message().to_string())
            }
            other => Self::new(DbErrorKind::Query, format!("Diesel error: {}", other)),
        }
    }
}

impl From<diesel::ConnectionError> for DbError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(DbErrorKind::Connection, format!("Connection error: {}", err))
    }
}
