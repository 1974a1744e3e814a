//! Database error types
//!
//! This module defines the error types that can occur during database operations,
//! providing meaningful error messages and proper error chaining.

use thiserror::Error;

/// Errors that can occur during database operations
///
/// This enum captures all possible database-related errors, including
/// connection issues, query failures, and constraint violations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check or not-null constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Transaction could not be started or committed
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A stored value could not be converted to its domain type
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Creates a serialization error for a column that holds an unreadable value
    pub fn corrupt(column: &str, value: impl std::fmt::Display, reason: impl std::fmt::Display) -> Self {
        DatabaseError::SerializationError(format!("column {} holds '{}': {}", column, value, reason))
    }
}

/// Classifies SQLx errors into DatabaseError variants
///
/// Constraint violations are recognised through the driver's error kind, which
/// SQLite derives from its extended result codes (2067 unique, 1555 primary
/// key, 787 foreign key, 275 check, 1299 not null).
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                DatabaseError::ConnectionFailed(error.to_string())
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DatabaseError::SerializationError(error.to_string())
            }
            sqlx::Error::Database(ref db_err) => {
                let message = db_err.message().to_string();
                match db_err.kind() {
                    ErrorKind::UniqueViolation => DatabaseError::DuplicateEntry(message),
                    ErrorKind::ForeignKeyViolation => DatabaseError::ForeignKeyViolation(message),
                    ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                        DatabaseError::ConstraintViolation(message)
                    }
                    _ => DatabaseError::QueryFailed(message),
                }
            }
            sqlx::Error::Migrate(e) => DatabaseError::MigrationFailed(e.to_string()),
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error: DatabaseError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, DatabaseError::NotFound(_)));
    }

    #[test]
    fn test_pool_timeout_is_pool_exhausted() {
        let error: DatabaseError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, DatabaseError::PoolExhausted));
    }
}
