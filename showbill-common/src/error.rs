//! Common error types for showbill

use thiserror::Error;

/// Common result type for showbill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the showbill crates
#[derive(Error, Debug)]
pub enum Error {
    /// One or more submitted fields failed validation
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write rejected by a database constraint or a referential rule
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database operation error (connection, I/O, protocol)
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Single-message validation error
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::Validation(vec![message.into()])
    }

    /// Messages to show next to a re-rendered form
    pub fn messages(&self) -> Vec<String> {
        match self {
            Error::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Constraint violations are conflicts with existing data, everything else
/// is treated as a storage failure.
impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            use sqlx::error::ErrorKind;
            match db_err.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Error::Conflict(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Error::Database(err)
    }
}
