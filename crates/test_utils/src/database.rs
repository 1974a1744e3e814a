//! Database Test Utilities
//!
//! Every test gets its own private in-memory SQLite database with the
//! migrations applied, so tests never share state and need no external
//! service.

use infra_db::{create_pool, run_migrations, DatabaseConfig, DatabaseError, DatabasePool};

/// A migrated, private in-memory database
///
/// The pool holds a single connection. Do not acquire from the pool while a
/// transaction obtained from it is still open.
pub struct TestDatabase {
    pub pool: DatabasePool,
}

impl TestDatabase {
    /// Opens a fresh in-memory database and applies the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created or migrations fail
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = create_pool(DatabaseConfig::in_memory()).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Counts the rows of a table
    pub async fn row_count(&self, table: &str) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_database_is_empty() {
        let db = TestDatabase::new().await.unwrap();
        assert_eq!(db.row_count("customers").await.unwrap(), 0);
        assert_eq!(db.row_count("simulations").await.unwrap(), 0);
    }
}
