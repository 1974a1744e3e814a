//! Customer Domain Ports
//!
//! This module defines the storage port for the customer registry, enabling
//! swappable implementations (SQL database, in-memory mock).
//!
//! # Architecture
//!
//! The `CustomerPort` trait defines every operation the registry needs from
//! its data source:
//!
//! - **SQL Adapter**: Uses the SQLite pool (infra_db)
//! - **Mock Adapter**: For testing without a database
//!
//! Adapters must enforce national ID and email uniqueness themselves and report
//! violations as `PortError::Conflict`. The registry pre-checks uniqueness, but
//! the adapter's answer is final.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_customer::ports::CustomerPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CustomerPort> = Arc::new(SqlCustomerAdapter::new(pool));
//! let registry = CustomerRegistry::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::customer::{Customer, NewCustomer};
use crate::national_id::NationalId;

/// Storage port for customer records
///
/// Lookups report absence as `Ok(None)`. Every mutating method runs as a
/// single atomic unit of work.
#[async_trait]
pub trait CustomerPort: DomainPort + HealthCheckable {
    /// Inserts a new customer and returns it with its assigned id
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the national ID or email is already stored
    async fn insert(&self, record: NewCustomer) -> Result<Customer, PortError>;

    /// Finds a customer by national ID
    async fn find_by_national_id(&self, national_id: &NationalId) -> Result<Option<Customer>, PortError>;

    /// Finds a customer by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, PortError>;

    /// Overwrites the customer currently holding `current`
    ///
    /// # Returns
    ///
    /// The record re-read by its new national ID, or `None` if no customer
    /// holds `current`
    ///
    /// # Errors
    ///
    /// `PortError::Conflict` if the new national ID or email belongs to a
    /// different customer
    async fn update_by_national_id(
        &self,
        current: &NationalId,
        record: NewCustomer,
    ) -> Result<Option<Customer>, PortError>;

    /// Deletes a customer and returns the record as it was before deletion
    async fn delete_by_national_id(&self, national_id: &NationalId) -> Result<Option<Customer>, PortError>;

    /// Lists every customer in storage order
    async fn list(&self) -> Result<Vec<Customer>, PortError>;
}

/// Mock implementation of CustomerPort for testing
///
/// This adapter stores customers in memory and enforces the same uniqueness
/// rules as the database schema.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
    use tokio::sync::RwLock;

    use core_kernel::{CustomerId, HealthCheckResult};

    /// In-memory mock implementation of CustomerPort
    #[derive(Debug, Default)]
    pub struct MockCustomerPort {
        customers: RwLock<BTreeMap<CustomerId, Customer>>,
        next_id: AtomicI64,
        conflict_on_next_write: AtomicBool,
    }

    impl MockCustomerPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes the next insert or update fail with a uniqueness conflict
        ///
        /// Simulates a concurrent writer claiming the same national ID or email
        /// between the registry's pre-check and the write.
        pub fn inject_conflict(&self) {
            self.conflict_on_next_write.store(true, Ordering::SeqCst);
        }

        /// Number of stored customers
        pub async fn len(&self) -> usize {
            self.customers.read().await.len()
        }

        /// Returns true when nothing is stored
        pub async fn is_empty(&self) -> bool {
            self.customers.read().await.is_empty()
        }

        fn take_injected_conflict(&self) -> Result<(), PortError> {
            if self.conflict_on_next_write.swap(false, Ordering::SeqCst) {
                return Err(PortError::conflict("UNIQUE constraint failed (injected)"));
            }
            Ok(())
        }

        fn check_unique(
            customers: &BTreeMap<CustomerId, Customer>,
            record: &NewCustomer,
            except: Option<CustomerId>,
        ) -> Result<(), PortError> {
            for customer in customers.values() {
                if Some(customer.id) == except {
                    continue;
                }
                if customer.national_id == record.national_id {
                    return Err(PortError::conflict(format!(
                        "national ID {} already registered",
                        record.national_id
                    )));
                }
                if customer.email == record.email {
                    return Err(PortError::conflict(format!(
                        "email {} already registered",
                        record.email
                    )));
                }
            }
            Ok(())
        }
    }

    impl DomainPort for MockCustomerPort {}

    #[async_trait]
    impl HealthCheckable for MockCustomerPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-customer-port", 0)
        }
    }

    #[async_trait]
    impl CustomerPort for MockCustomerPort {
        async fn insert(&self, record: NewCustomer) -> Result<Customer, PortError> {
            self.take_injected_conflict()?;

            let mut customers = self.customers.write().await;
            Self::check_unique(&customers, &record, None)?;

            let id = CustomerId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
            let customer = Customer::from_record(id, record);
            customers.insert(id, customer.clone());
            Ok(customer)
        }

        async fn find_by_national_id(&self, national_id: &NationalId) -> Result<Option<Customer>, PortError> {
            Ok(self
                .customers
                .read()
                .await
                .values()
                .find(|c| &c.national_id == national_id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, PortError> {
            Ok(self
                .customers
                .read()
                .await
                .values()
                .find(|c| c.email == email)
                .cloned())
        }

        async fn update_by_national_id(
            &self,
            current: &NationalId,
            record: NewCustomer,
        ) -> Result<Option<Customer>, PortError> {
            let mut customers = self.customers.write().await;
            let Some(id) = customers
                .values()
                .find(|c| &c.national_id == current)
                .map(|c| c.id)
            else {
                return Ok(None);
            };

            self.take_injected_conflict()?;
            Self::check_unique(&customers, &record, Some(id))?;

            let customer = customers
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Customer", current))?;
            customer.apply(record);
            Ok(Some(customer.clone()))
        }

        async fn delete_by_national_id(&self, national_id: &NationalId) -> Result<Option<Customer>, PortError> {
            let mut customers = self.customers.write().await;
            let id = customers
                .values()
                .find(|c| &c.national_id == national_id)
                .map(|c| c.id);
            Ok(id.and_then(|id| customers.remove(&id)))
        }

        async fn list(&self) -> Result<Vec<Customer>, PortError> {
            Ok(self.customers.read().await.values().cloned().collect())
        }
    }
}
