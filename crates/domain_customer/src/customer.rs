//! Customer entity
//!
//! A customer is identified by a storage-assigned id and, for every external
//! purpose, by their national ID. Each customer carries the capital amount that
//! mortgage simulations are computed against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{CustomerId, Money};

use crate::error::CustomerError;
use crate::national_id::NationalId;
use crate::validation::CustomerValidator;

/// A registered mortgage customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Storage-assigned identifier
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Unique national ID
    pub national_id: NationalId,
    /// Unique contact email
    pub email: String,
    /// Capital the customer wants to borrow
    pub capital: Money,
}

impl Customer {
    /// Builds a customer from a stored record and its assigned id
    pub fn from_record(id: CustomerId, record: NewCustomer) -> Self {
        Self {
            id,
            name: record.name,
            national_id: record.national_id,
            email: record.email,
            capital: record.capital,
        }
    }

    /// Overwrites every mutable field with the values from `record`
    pub fn apply(&mut self, record: NewCustomer) {
        self.name = record.name;
        self.national_id = record.national_id;
        self.email = record.email;
        self.capital = record.capital;
    }
}

/// Unvalidated customer data as submitted for create or update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub capital: Decimal,
}

impl CustomerDraft {
    /// Creates a new draft
    pub fn new(
        name: impl Into<String>,
        national_id: impl Into<String>,
        email: impl Into<String>,
        capital: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            email: email.into(),
            capital,
        }
    }

    /// Validates the draft and converts it into a storable record
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::Validation` listing every rule the draft breaks
    pub fn into_record(self) -> Result<NewCustomer, CustomerError> {
        let result = CustomerValidator::validate(&self);
        if !result.is_valid {
            return Err(CustomerError::validation_failed(result.errors));
        }
        for warning in &result.warnings {
            warn!(national_id = %self.national_id, "{}", warning);
        }

        let national_id = NationalId::parse(&self.national_id)?;
        let capital = Money::new(self.capital);

        Ok(NewCustomer {
            name: self.name.trim().to_string(),
            national_id,
            email: self.email.trim().to_string(),
            capital,
        })
    }
}

/// Validated customer data ready to be written to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub national_id: NationalId,
    pub email: String,
    pub capital: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_into_record_trims_text() {
        let draft = CustomerDraft::new("  Ana Ruiz ", "12345678Z", " ana@example.com ", dec!(150000));
        let record = draft.into_record().unwrap();

        assert_eq!(record.name, "Ana Ruiz");
        assert_eq!(record.email, "ana@example.com");
        assert_eq!(record.national_id.as_str(), "12345678Z");
        assert_eq!(record.capital.amount(), dec!(150000));
    }

    #[test]
    fn test_into_record_rejects_bad_checksum() {
        let draft = CustomerDraft::new("Ana Ruiz", "12345678A", "ana@example.com", dec!(150000));
        let err = draft.into_record().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_into_record_rejects_negative_capital() {
        let draft = CustomerDraft::new("Ana Ruiz", "12345678Z", "ana@example.com", dec!(-0.01));
        let err = draft.into_record().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_into_record_accepts_zero_capital() {
        let draft = CustomerDraft::new("Ana Ruiz", "12345678Z", "ana@example.com", dec!(0));
        assert!(draft.into_record().unwrap().capital.is_zero());
    }

    #[test]
    fn test_apply_overwrites_all_fields() {
        let original = CustomerDraft::new("Ana", "12345678Z", "ana@example.com", dec!(1000))
            .into_record()
            .unwrap();
        let mut customer = Customer::from_record(CustomerId::new(1), original);

        let changes = CustomerDraft::new("Ana Ruiz", "00000000T", "ruiz@example.com", dec!(2000))
            .into_record()
            .unwrap();
        customer.apply(changes);

        assert_eq!(customer.id, CustomerId::new(1));
        assert_eq!(customer.name, "Ana Ruiz");
        assert_eq!(customer.national_id.as_str(), "00000000T");
        assert_eq!(customer.email, "ruiz@example.com");
        assert_eq!(customer.capital.amount(), dec!(2000));
    }
}
