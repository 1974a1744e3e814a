//! Mortgage domain errors
//!
//! This module defines all error types that can occur while simulating a
//! mortgage. Unlike registry lookups, a simulation cannot proceed without its
//! customer, so a missing customer is an error here.

use thiserror::Error;

use core_kernel::PortError;
use domain_customer::CustomerError;

use crate::amortization::AmortizationError;

/// Errors that can occur in the mortgage domain
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Rate, term or derived amounts are out of range
    #[error("Invalid simulation: {0}")]
    Validation(String),

    /// No customer holds the requested national ID
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// The storage layer failed
    #[error("Storage error: {0}")]
    Storage(#[source] PortError),
}

impl SimulationError {
    /// Returns true for invalid-input errors
    pub fn is_validation(&self) -> bool {
        matches!(self, SimulationError::Validation(_))
    }

    /// Returns true when the customer does not exist
    pub fn is_customer_not_found(&self) -> bool {
        matches!(self, SimulationError::CustomerNotFound(_))
    }
}

impl From<AmortizationError> for SimulationError {
    fn from(error: AmortizationError) -> Self {
        SimulationError::Validation(error.to_string())
    }
}

impl From<PortError> for SimulationError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::Validation { message, .. } => SimulationError::Validation(message),
            other => SimulationError::Storage(other),
        }
    }
}

impl From<CustomerError> for SimulationError {
    fn from(error: CustomerError) -> Self {
        match error {
            CustomerError::Validation(message) => SimulationError::Validation(message),
            CustomerError::NotFound(id) => SimulationError::CustomerNotFound(id),
            CustomerError::Conflict(message) => SimulationError::Storage(PortError::conflict(message)),
            CustomerError::Storage(e) => SimulationError::Storage(e),
        }
    }
}
