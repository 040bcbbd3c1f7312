//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL backing for the warranty core system
//! using SQLx.
//!
//! # Architecture
//!
//! The crate implements the store ports defined by the domain crates
//! (`ClaimStore`, `AccountStore`), hiding connection management and SQL from
//! the domain layer.
//!
//! # Constraint-backed invariants
//!
//! The schema, not application code, enforces the system's uniqueness rules:
//! order numbers and idempotency keys carry unique indexes, and a first-row
//! guard on the accounts table makes the admin bootstrap race-free. Adapters
//! translate constraint violations into the domain store errors by
//! constraint name.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/warranty")).await?;
//! infra_db::run_migrations(&pool).await?;
//! let store = PgClaimStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{PgAccountStore, PgClaimStore};

/// Applies the embedded migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    tracing::info!("Database schema up to date");
    Ok(())
}
