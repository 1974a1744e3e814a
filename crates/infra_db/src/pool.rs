//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for SQLite
//! using SQLx, plus the embedded schema migrations.

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the SQLite connection pool
pub type DatabasePool = SqlitePool;

/// Schema migrations embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// URL of a private in-memory database
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use infra_db::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("sqlite://mortgage.db")
///     .max_connections(20)
///     .min_connections(5)
///     .connect_timeout(Duration::from_secs(10));
/// assert_eq!(config.max_connections, 20);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Maximum lifetime of a connection, `None` to keep forever
    pub max_lifetime: Option<Duration>,
    /// Idle timeout before closing a connection, `None` to keep forever
    pub idle_timeout: Option<Duration>,
    /// Create the database file if it does not exist
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection string (e.g., "sqlite://mortgage.db")
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            max_lifetime: Some(Duration::from_secs(30 * 60)), // 30 minutes
            idle_timeout: Some(Duration::from_secs(10 * 60)), // 10 minutes
            create_if_missing: true,
        }
    }

    /// Configuration for a private in-memory database
    ///
    /// Every SQLite connection to `:memory:` opens its own empty database, so
    /// the pool holds exactly one connection that is never recycled.
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            min_connections: 1,
            max_lifetime: None,
            idle_timeout: None,
            ..Self::new(IN_MEMORY_URL)
        }
    }

    /// Sets the maximum number of connections in the pool
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections to maintain
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout duration
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the maximum lifetime of a connection
    pub fn max_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// Sets the idle timeout before closing a connection
    pub fn idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Sets whether a missing database file is created
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://mortgage.db")
    }
}

/// Creates a database connection pool with the given configuration
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the URL is malformed or the
/// pool cannot open its first connection
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::{DatabaseConfig, create_pool};
///
/// let pool = create_pool(DatabaseConfig::new("sqlite://mortgage.db")).await?;
/// ```
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        "Creating database pool with max_connections={}, min_connections={}",
        config.max_connections, config.min_connections
    );

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
        .create_if_missing(config.create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Database pool created successfully");
    Ok(pool)
}

/// Applies every pending schema migration
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    info!("Running database migrations");
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    info!("Database schema up to date");
    Ok(())
}
