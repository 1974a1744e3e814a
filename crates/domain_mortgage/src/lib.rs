//! Mortgage Simulation Domain
//!
//! This crate computes fixed-rate mortgage payments for registered customers
//! and keeps an append-only history of every simulation.
//!
//! # Examples
//!
//! ```rust
//! use domain_mortgage::amortization::{monthly_payment, LoanTerms};
//! use core_kernel::Money;
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms::new(dec!(3.5), 30).unwrap();
//! let summary = monthly_payment(Money::new(dec!(100000)), &terms).unwrap();
//!
//! assert_eq!(summary.monthly_payment.amount(), dec!(449.04));
//! assert_eq!(summary.total_amount.amount(), dec!(161656.09));
//! ```

pub mod amortization;
pub mod simulation;
pub mod error;
pub mod ports;
pub mod service;

pub use amortization::{AmortizationError, LoanTerms, PaymentSummary};
pub use simulation::{NewSimulation, Simulation};
pub use error::SimulationError;
pub use ports::SimulationPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockSimulationPort;
pub use service::MortgageSimulator;
