//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the mortgage system,
//! persisting customers and simulations in SQLite through SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access abstractions
//! that hide the database implementation details from the domain layer.
//! Adapters wrap the repositories and implement the domain port traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, SqlCustomerAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://mortgage.db")).await?;
//! run_migrations(&pool).await?;
//! let customers = SqlCustomerAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool, MIGRATOR};
pub use error::DatabaseError;
pub use adapters::{SqlCustomerAdapter, SqlSimulationAdapter};
