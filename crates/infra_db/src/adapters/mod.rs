//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the SQLite database layer.
//!
//! # Architecture
//!
//! Each domain has a corresponding adapter that:
//! - Implements the domain's port trait
//! - Translates between domain models and database row types
//! - Uses the repository layer for database operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::SqlCustomerAdapter;
//! use domain_customer::CustomerPort;
//!
//! let adapter = SqlCustomerAdapter::new(pool);
//! let customers = adapter.list().await?;
//! ```

pub mod customer;
pub mod simulation;

pub use customer::SqlCustomerAdapter;
pub use simulation::SqlSimulationAdapter;

use std::time::Instant;

use sqlx::SqlitePool;

use core_kernel::{HealthCheckResult, PortError};

use crate::error::DatabaseError;

/// Converts a database error to a port error
///
/// - `DuplicateEntry` -> `PortError::Conflict`
/// - `NotFound` -> `PortError::NotFound`
/// - Other constraint violations -> `PortError::Validation`
/// - Connection problems -> `PortError::Connection`
/// - Unreadable stored values -> `PortError::Transformation`
/// - Everything else -> `PortError::Internal`
pub(crate) fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::DuplicateEntry(msg) => PortError::conflict(msg),
        DatabaseError::NotFound(msg) => PortError::not_found("Record", msg),
        DatabaseError::ForeignKeyViolation(msg) | DatabaseError::ConstraintViolation(msg) => {
            PortError::validation(msg)
        }
        DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted => PortError::Connection {
            message: e.to_string(),
            source: Some(Box::new(e)),
        },
        DatabaseError::SerializationError(msg) => PortError::transformation(msg),
        other => PortError::Internal {
            message: other.to_string(),
            source: Some(Box::new(other)),
        },
    }
}

/// Runs `SELECT 1` against the pool and reports the outcome
pub(crate) async fn ping(pool: &SqlitePool, adapter_id: &str) -> HealthCheckResult {
    let start = Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthCheckResult::healthy(adapter_id, latency_ms),
        Err(e) => HealthCheckResult::unhealthy(adapter_id, latency_ms, format!("Database error: {}", e)),
    }
}
