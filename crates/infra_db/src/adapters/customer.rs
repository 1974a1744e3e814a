//! SQL Customer Adapter
//!
//! This module provides the database adapter for the customer domain,
//! implementing the `CustomerPort` trait via the `CustomerRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::SqlCustomerAdapter;
//! use domain_customer::{CustomerPort, CustomerRegistry};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CustomerPort> = Arc::new(SqlCustomerAdapter::new(pool));
//! let registry = CustomerRegistry::new(port);
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, instrument};

use core_kernel::{CustomerId, DomainPort, HealthCheckResult, HealthCheckable, Money, PortError};
use domain_customer::{Customer, CustomerPort, NationalId, NewCustomer};

use crate::adapters::{db_to_port_error, ping};
use crate::error::DatabaseError;
use crate::repositories::customer::{CustomerRepository, CustomerRow, NewCustomerRow};

const ADAPTER_ID: &str = "sqlite-customer-adapter";

/// SQLite-backed implementation of the CustomerPort trait
///
/// Uniqueness of national ID and email is enforced by the schema; a violation
/// surfaces as `PortError::Conflict`.
#[derive(Debug, Clone)]
pub struct SqlCustomerAdapter {
    repository: CustomerRepository,
    pool: SqlitePool,
}

impl SqlCustomerAdapter {
    /// Creates a new adapter over a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CustomerRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for SqlCustomerAdapter {}

#[async_trait]
impl HealthCheckable for SqlCustomerAdapter {
    /// Checks database connectivity with `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, ADAPTER_ID).await
    }
}

#[async_trait]
impl CustomerPort for SqlCustomerAdapter {
    #[instrument(skip(self, record), fields(national_id = %record.national_id))]
    async fn insert(&self, record: NewCustomer) -> Result<Customer, PortError> {
        debug!("Inserting customer");

        let row = self
            .repository
            .insert(domain_to_row(&record))
            .await
            .map_err(db_to_port_error)?;

        row_to_customer(row)
    }

    #[instrument(skip(self), fields(national_id = %national_id))]
    async fn find_by_national_id(&self, national_id: &NationalId) -> Result<Option<Customer>, PortError> {
        debug!("Fetching customer by national ID");

        self.repository
            .find_by_national_id(national_id.as_str())
            .await
            .map_err(db_to_port_error)?
            .map(row_to_customer)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, PortError> {
        debug!("Fetching customer by email");

        self.repository
            .find_by_email(email)
            .await
            .map_err(db_to_port_error)?
            .map(row_to_customer)
            .transpose()
    }

    #[instrument(skip(self, record), fields(current = %current, national_id = %record.national_id))]
    async fn update_by_national_id(
        &self,
        current: &NationalId,
        record: NewCustomer,
    ) -> Result<Option<Customer>, PortError> {
        debug!("Updating customer");

        self.repository
            .update_by_national_id(current.as_str(), domain_to_row(&record))
            .await
            .map_err(db_to_port_error)?
            .map(row_to_customer)
            .transpose()
    }

    #[instrument(skip(self), fields(national_id = %national_id))]
    async fn delete_by_national_id(&self, national_id: &NationalId) -> Result<Option<Customer>, PortError> {
        debug!("Deleting customer");

        self.repository
            .delete_by_national_id(national_id.as_str())
            .await
            .map_err(db_to_port_error)?
            .map(row_to_customer)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Customer>, PortError> {
        self.repository
            .list()
            .await
            .map_err(db_to_port_error)?
            .into_iter()
            .map(row_to_customer)
            .collect()
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

fn domain_to_row(record: &NewCustomer) -> NewCustomerRow {
    NewCustomerRow {
        name: record.name.clone(),
        national_id: record.national_id.to_string(),
        email: record.email.clone(),
        capital: record.capital.amount().to_string(),
    }
}

/// Converts a customer row to the domain type
fn row_to_customer(row: CustomerRow) -> Result<Customer, PortError> {
    let national_id = NationalId::parse(&row.national_id)
        .map_err(|e| db_to_port_error(DatabaseError::corrupt("national_id", &row.national_id, e)))?;
    let capital = Money::from_str(&row.capital)
        .map_err(|e| db_to_port_error(DatabaseError::corrupt("capital", &row.capital, e)))?;

    Ok(Customer {
        id: CustomerId::new(row.id),
        name: row.name,
        national_id,
        email: row.email,
        capital,
    })
}
