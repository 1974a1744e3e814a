//! Customer domain errors
//!
//! This module defines all error types that can occur in the customer domain.
//! Callers distinguish three kinds: invalid input, uniqueness conflicts and
//! storage failures. A missing customer is normally reported as `None` rather
//! than as an error.

use thiserror::Error;

use core_kernel::PortError;

use crate::national_id::NationalIdError;

/// Errors that can occur in the customer domain
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Submitted customer data breaks a validation rule
    #[error("Invalid customer data: {0}")]
    Validation(String),

    /// National ID or email is already registered to another customer
    #[error("Duplicate customer: {0}")]
    Conflict(String),

    /// Customer with the given national ID was not found
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// The storage layer failed
    #[error("Storage error: {0}")]
    Storage(#[source] PortError),
}

impl CustomerError {
    /// Creates a Conflict error with a message
    pub fn conflict(message: impl Into<String>) -> Self {
        CustomerError::Conflict(message.into())
    }

    /// Creates a Validation error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        CustomerError::Validation(errors.join("; "))
    }

    /// Returns true for invalid-input errors
    pub fn is_validation(&self) -> bool {
        matches!(self, CustomerError::Validation(_))
    }

    /// Returns true for uniqueness conflicts
    pub fn is_conflict(&self) -> bool {
        matches!(self, CustomerError::Conflict(_))
    }
}

impl From<NationalIdError> for CustomerError {
    fn from(error: NationalIdError) -> Self {
        CustomerError::Validation(error.to_string())
    }
}

impl From<PortError> for CustomerError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Conflict { message } => CustomerError::Conflict(message),
            PortError::Validation { message, .. } => CustomerError::Validation(message),
            PortError::NotFound { id, .. } => CustomerError::NotFound(id),
            other => CustomerError::Storage(other),
        }
    }
}
