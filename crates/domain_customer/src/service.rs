//! Customer registry service
//!
//! The registry is a stateless service over an injected [`CustomerPort`]. It
//! validates drafts, pre-checks uniqueness so callers get a precise conflict
//! message, and delegates every write to the port as one atomic operation.
//!
//! Lookups by national ID return `None` when no customer matches. A string that
//! is not a valid national ID cannot match any stored customer, so it is also
//! reported as `None` rather than as a validation failure.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::CustomerId;

use crate::customer::{Customer, CustomerDraft, NewCustomer};
use crate::error::CustomerError;
use crate::national_id::NationalId;
use crate::ports::CustomerPort;

/// Service for registering and maintaining mortgage customers
#[derive(Clone)]
pub struct CustomerRegistry {
    port: Arc<dyn CustomerPort>,
}

impl CustomerRegistry {
    /// Creates a registry over a storage port
    pub fn new(port: Arc<dyn CustomerPort>) -> Self {
        Self { port }
    }

    /// Registers a new customer
    ///
    /// # Errors
    ///
    /// - `CustomerError::Validation` if any field is invalid
    /// - `CustomerError::Conflict` if the national ID or email is taken
    #[instrument(skip(self, draft), fields(national_id = %draft.national_id))]
    pub async fn create(&self, draft: CustomerDraft) -> Result<Customer, CustomerError> {
        let record = draft.into_record()?;
        self.ensure_available(&record, None).await?;

        let customer = self.port.insert(record).await.map_err(|e| {
            if e.is_conflict() {
                warn!(error = %e, "storage rejected duplicate customer");
            }
            CustomerError::from(e)
        })?;

        info!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }

    /// Looks up a customer by national ID
    #[instrument(skip(self))]
    pub async fn get_by_national_id(&self, national_id: &str) -> Result<Option<Customer>, CustomerError> {
        let Ok(national_id) = NationalId::parse(national_id) else {
            debug!("lookup with malformed national ID");
            return Ok(None);
        };
        Ok(self.port.find_by_national_id(&national_id).await?)
    }

    /// Overwrites every field of the customer currently holding `current`
    ///
    /// The draft may carry a different national ID; the returned record is the
    /// one stored under the new ID.
    ///
    /// # Returns
    ///
    /// `None` if no customer holds `current`
    ///
    /// # Errors
    ///
    /// - `CustomerError::Validation` if any new field is invalid
    /// - `CustomerError::Conflict` if the new national ID or email belongs to a
    ///   different customer
    #[instrument(skip(self, draft), fields(new_national_id = %draft.national_id))]
    pub async fn update_by_national_id(
        &self,
        current: &str,
        draft: CustomerDraft,
    ) -> Result<Option<Customer>, CustomerError> {
        let Ok(current) = NationalId::parse(current) else {
            return Ok(None);
        };
        let Some(existing) = self.port.find_by_national_id(&current).await? else {
            return Ok(None);
        };

        let record = draft.into_record()?;
        self.ensure_available(&record, Some(existing.id)).await?;

        let updated = self.port.update_by_national_id(&current, record).await?;
        if let Some(customer) = &updated {
            info!(customer_id = %customer.id, "customer updated");
        }
        Ok(updated)
    }

    /// Deletes a customer and returns the record as it was before deletion
    ///
    /// Simulations recorded for the customer are kept.
    #[instrument(skip(self))]
    pub async fn delete_by_national_id(&self, national_id: &str) -> Result<Option<Customer>, CustomerError> {
        let Ok(national_id) = NationalId::parse(national_id) else {
            return Ok(None);
        };

        let deleted = self.port.delete_by_national_id(&national_id).await?;
        if let Some(customer) = &deleted {
            info!(customer_id = %customer.id, "customer deleted");
        }
        Ok(deleted)
    }

    /// Lists every customer in storage order
    pub async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.port.list().await?)
    }

    /// Fails with `Conflict` if the record's national ID or email is held by a
    /// customer other than `owner`
    async fn ensure_available(&self, record: &NewCustomer, owner: Option<CustomerId>) -> Result<(), CustomerError> {
        if let Some(other) = self.port.find_by_national_id(&record.national_id).await? {
            if Some(other.id) != owner {
                return Err(CustomerError::conflict(format!(
                    "national ID {} is already registered",
                    record.national_id
                )));
            }
        }

        if let Some(other) = self.port.find_by_email(&record.email).await? {
            if Some(other.id) != owner {
                return Err(CustomerError::conflict(format!(
                    "email {} is already registered",
                    record.email
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockCustomerPort;
    use rust_decimal_macros::dec;

    fn registry() -> (CustomerRegistry, Arc<MockCustomerPort>) {
        let port = Arc::new(MockCustomerPort::new());
        (CustomerRegistry::new(port.clone()), port)
    }

    fn draft(national_id: &str, email: &str) -> CustomerDraft {
        CustomerDraft::new("Ana Ruiz", national_id, email, dec!(100000))
    }

    #[tokio::test]
    async fn test_create_with_computed_ids() {
        let (registry, _) = registry();

        for (i, number) in [12345678u32, 0, 99999999, 44556677].into_iter().enumerate() {
            let id = NationalId::from_number(number).unwrap();
            let customer = registry
                .create(draft(id.as_str(), &format!("c{i}@example.com")))
                .await
                .unwrap();
            assert_eq!(customer.national_id, id);
        }
    }

    #[tokio::test]
    async fn test_create_with_mutated_letter_fails() {
        let (registry, port) = registry();
        let err = registry.create(draft("12345678A", "a@example.com")).await.unwrap_err();
        assert!(err.is_validation());
        assert!(port.is_empty().await);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let (registry, port) = registry();
        registry.create(draft("12345678Z", "same@example.com")).await.unwrap();

        let err = registry.create(draft("00000000T", "same@example.com")).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(port.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_national_id_conflicts() {
        let (registry, _) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();

        let err = registry.create(draft("12345678Z", "b@example.com")).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_storage_conflict_is_authoritative() {
        let (registry, port) = registry();
        port.inject_conflict();

        let err = registry.create(draft("12345678Z", "a@example.com")).await.unwrap_err();
        assert!(err.is_conflict());
        assert!(port.is_empty().await);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let (registry, _) = registry();
        assert!(registry.get_by_national_id("12345678Z").await.unwrap().is_none());
        assert!(registry.get_by_national_id("garbage").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_capital_only_does_not_conflict_with_itself() {
        let (registry, _) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();

        let mut changes = draft("12345678Z", "a@example.com");
        changes.capital = dec!(250000);
        let updated = registry
            .update_by_national_id("12345678Z", changes)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.capital.amount(), dec!(250000));
    }

    #[tokio::test]
    async fn test_update_can_change_national_id() {
        let (registry, _) = registry();
        let created = registry.create(draft("12345678Z", "a@example.com")).await.unwrap();

        let updated = registry
            .update_by_national_id("12345678Z", draft("87654321X", "a@example.com"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.national_id.as_str(), "87654321X");
        assert!(registry.get_by_national_id("12345678Z").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let (registry, _) = registry();
        let result = registry
            .update_by_national_id("12345678Z", draft("12345678Z", "a@example.com"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_wins_over_invalid_draft() {
        let (registry, _) = registry();
        let result = registry
            .update_by_national_id("12345678Z", draft("12345678A", "a@example.com"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_with_invalid_new_id_fails() {
        let (registry, _) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();

        let err = registry
            .update_by_national_id("12345678Z", draft("12345678A", "a@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_update_onto_another_customers_email_conflicts() {
        let (registry, _) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();
        registry.create(draft("00000000T", "b@example.com")).await.unwrap();

        let err = registry
            .update_by_national_id("12345678Z", draft("12345678Z", "b@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let unchanged = registry.get_by_national_id("12345678Z").await.unwrap().unwrap();
        assert_eq!(unchanged.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_update_onto_another_customers_national_id_conflicts() {
        let (registry, port) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();
        registry.create(draft("00000000T", "b@example.com")).await.unwrap();

        let err = registry
            .update_by_national_id("00000000T", draft("12345678Z", "b@example.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let first = registry.get_by_national_id("12345678Z").await.unwrap().unwrap();
        assert_eq!(first.email, "a@example.com");
        assert!(registry.get_by_national_id("00000000T").await.unwrap().is_some());
        assert_eq!(port.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_storage_conflict_is_authoritative() {
        let (registry, port) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();
        port.inject_conflict();

        let mut changes = draft("12345678Z", "a@example.com");
        changes.capital = dec!(250000);
        let err = registry
            .update_by_national_id("12345678Z", changes.clone())
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let unchanged = registry.get_by_national_id("12345678Z").await.unwrap().unwrap();
        assert_eq!(unchanged.capital.amount(), dec!(100000));

        let updated = registry
            .update_by_national_id("12345678Z", changes)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.capital.amount(), dec!(250000));
    }

    #[tokio::test]
    async fn test_capital_is_stored_exactly() {
        let (registry, _) = registry();
        let mut exact = draft("12345678Z", "a@example.com");
        exact.capital = dec!(100000.123456);

        let created = registry.create(exact).await.unwrap();
        assert_eq!(created.capital.amount(), dec!(100000.123456));

        let fetched = registry.get_by_national_id("12345678Z").await.unwrap().unwrap();
        assert_eq!(fetched.capital.amount(), dec!(100000.123456));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let (registry, _) = registry();
        let created = registry.create(draft("12345678Z", "a@example.com")).await.unwrap();

        let deleted = registry.delete_by_national_id("12345678Z").await.unwrap().unwrap();
        assert_eq!(deleted, created);
        assert!(registry.get_by_national_id("12345678Z").await.unwrap().is_none());
        assert!(registry.delete_by_national_id("12345678Z").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_in_storage_order() {
        let (registry, _) = registry();
        registry.create(draft("12345678Z", "a@example.com")).await.unwrap();
        registry.create(draft("00000000T", "b@example.com")).await.unwrap();

        let ids: Vec<_> = registry
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.national_id.to_string())
            .collect();
        assert_eq!(ids, vec!["12345678Z", "00000000T"]);
    }
}
