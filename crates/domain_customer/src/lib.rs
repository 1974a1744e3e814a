//! Customer Registry Domain
//!
//! This crate manages mortgage customers: their national ID, contact email and
//! the capital they want to borrow.
//!
//! # Invariants
//!
//! - National ID and email are unique across all customers
//! - National IDs carry a valid check letter (see [`national_id`])
//! - Capital is never negative
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::{CustomerDraft, NationalId};
//! use rust_decimal_macros::dec;
//!
//! let national_id = NationalId::from_number(12345678).unwrap();
//! let record = CustomerDraft::new("Ana Ruiz", national_id.as_str(), "ana@example.com", dec!(150000))
//!     .into_record()
//!     .unwrap();
//!
//! assert_eq!(record.national_id.as_str(), "12345678Z");
//! ```

pub mod customer;
pub mod national_id;
pub mod error;
pub mod validation;
pub mod ports;
pub mod service;

pub use customer::{Customer, CustomerDraft, NewCustomer};
pub use national_id::{NationalId, NationalIdError};
pub use error::CustomerError;
pub use validation::{CustomerValidator, ValidationResult};
pub use ports::CustomerPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCustomerPort;
pub use service::CustomerRegistry;
