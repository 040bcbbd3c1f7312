//! Database error types
//!
//! Classifies SQLx failures into the handful of cases the adapters care
//! about. Unique-constraint violations keep the violated constraint's name
//! so an adapter can tell which domain invariant tripped.

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {message}")]
    DuplicateEntry {
        /// Name of the violated unique index, when the driver reports it
        constraint: Option<String>,
        message: String,
    },

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl DatabaseError {
    /// Returns the violated constraint name for a duplicate entry
    pub fn violated_constraint(&self) -> Option<&str> {
        match self {
            DatabaseError::DuplicateEntry { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}

/// Classifies SQLx errors by PostgreSQL error code
///
/// Error code 23505 (unique_violation) is the one the domain invariants are
/// built on; everything else collapses into the generic cases.
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                if db_err.code().as_deref() == Some("23505") {
                    DatabaseError::DuplicateEntry {
                        constraint: db_err.constraint().map(str::to_owned),
                        message: db_err.message().to_owned(),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_owned())
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}
