//! Simulation records
//!
//! A simulation is an immutable, append-only record of one payment
//! calculation. It references its customer by national ID value only, so it
//! outlives the customer if they are deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate, SimulationId};
use domain_customer::NationalId;

use crate::amortization::{LoanTerms, PaymentSummary};

/// A recorded mortgage simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    pub id: SimulationId,
    pub national_id: NationalId,
    /// Nominal annual rate
    pub annual_rate: Rate,
    pub term_years: u32,
    pub monthly_payment: Money,
    pub total_amount: Money,
    pub created_at: DateTime<Utc>,
}

impl Simulation {
    /// Builds a simulation from a stored record
    pub fn from_record(id: SimulationId, record: NewSimulation, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            national_id: record.national_id,
            annual_rate: record.annual_rate,
            term_years: record.term_years,
            monthly_payment: record.monthly_payment,
            total_amount: record.total_amount,
            created_at,
        }
    }
}

/// A computed simulation ready to be recorded
///
/// Payment and total can only come from a [`PaymentSummary`], never set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSimulation {
    pub national_id: NationalId,
    pub annual_rate: Rate,
    pub term_years: u32,
    pub monthly_payment: Money,
    pub total_amount: Money,
}

impl NewSimulation {
    /// Pairs validated terms with their computed payment
    pub fn new(national_id: NationalId, terms: &LoanTerms, summary: PaymentSummary) -> Self {
        Self {
            national_id,
            annual_rate: terms.annual_rate(),
            term_years: terms.term_years(),
            monthly_payment: summary.monthly_payment,
            total_amount: summary.total_amount,
        }
    }
}
