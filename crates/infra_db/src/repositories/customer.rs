//! Customer repository implementation
//!
//! This module provides database access for the `customers` table. Capital is
//! stored as decimal text; conversion to domain types happens in the adapter.

use sqlx::SqlitePool;

use crate::error::DatabaseError;

const CUSTOMER_COLUMNS: &str = "id, name, national_id, email, capital";

/// Repository for managing customer rows
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a customer and returns the stored row
    ///
    /// # Errors
    ///
    /// `DatabaseError::DuplicateEntry` if the national ID or email is taken
    pub async fn insert(&self, customer: NewCustomerRow) -> Result<CustomerRow, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "INSERT INTO customers (name, national_id, email, capital) \
             VALUES (?, ?, ?, ?) \
             RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(&customer.name)
        .bind(&customer.national_id)
        .bind(&customer.email)
        .bind(&customer.capital)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a customer by national ID
    pub async fn find_by_national_id(&self, national_id: &str) -> Result<Option<CustomerRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE national_id = ?"
        ))
        .bind(national_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Retrieves a customer by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<CustomerRow>, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Overwrites the customer holding `current` and re-reads it by its new
    /// national ID, in one transaction
    ///
    /// # Returns
    ///
    /// `None` if no row holds `current`; nothing is written in that case
    pub async fn update_by_national_id(
        &self,
        current: &str,
        customer: NewCustomerRow,
    ) -> Result<Option<CustomerRow>, DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        let result = sqlx::query(
            "UPDATE customers SET name = ?, national_id = ?, email = ?, capital = ? \
             WHERE national_id = ?",
        )
        .bind(&customer.name)
        .bind(&customer.national_id)
        .bind(&customer.email)
        .bind(&customer.capital)
        .bind(current)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE national_id = ?"
        ))
        .bind(&customer.national_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;
        Ok(Some(row))
    }

    /// Deletes the customer holding `national_id` and returns the row as it
    /// was before deletion, in one transaction
    pub async fn delete_by_national_id(&self, national_id: &str) -> Result<Option<CustomerRow>, DatabaseError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        let Some(row) = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE national_id = ?"
        ))
        .bind(national_id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;
        Ok(Some(row))
    }

    /// Lists every customer ordered by id
    pub async fn list(&self) -> Result<Vec<CustomerRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// ============================================================================
// Row types
// ============================================================================

/// Database row representation of a customer
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    /// Exact decimal text
    pub capital: String,
}

/// Data for inserting or overwriting a customer row
#[derive(Debug, Clone)]
pub struct NewCustomerRow {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub capital: String,
}
