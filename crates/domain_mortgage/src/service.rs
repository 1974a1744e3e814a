//! Mortgage simulation service

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use domain_customer::{CustomerRegistry, NationalId};

use crate::amortization::{self, LoanTerms};
use crate::error::SimulationError;
use crate::ports::SimulationPort;
use crate::simulation::{NewSimulation, Simulation};

/// Runs payment simulations against registered customers
///
/// The customer's stored capital is the loan amount. Each successful
/// simulation is recorded; a failed one leaves nothing behind.
#[derive(Clone)]
pub struct MortgageSimulator {
    registry: Arc<CustomerRegistry>,
    simulations: Arc<dyn SimulationPort>,
}

impl MortgageSimulator {
    /// Creates a simulator over the customer registry and a simulation store
    pub fn new(registry: Arc<CustomerRegistry>, simulations: Arc<dyn SimulationPort>) -> Self {
        Self { registry, simulations }
    }

    /// Computes and records a simulation for the customer holding `national_id`
    ///
    /// # Arguments
    ///
    /// * `annual_rate_pct` - Nominal annual rate as a percentage (3.5 for 3.5%)
    /// * `term_years` - Loan term in whole years
    ///
    /// # Errors
    ///
    /// - `SimulationError::Validation` if the rate or term is not positive, or
    ///   the payment cannot be represented; checked before any storage access
    /// - `SimulationError::CustomerNotFound` if no customer holds the ID
    #[instrument(skip(self))]
    pub async fn simulate(
        &self,
        national_id: &str,
        annual_rate_pct: Decimal,
        term_years: i64,
    ) -> Result<Simulation, SimulationError> {
        let terms = LoanTerms::new(annual_rate_pct, term_years)?;

        let customer = self
            .registry
            .get_by_national_id(national_id)
            .await?
            .ok_or_else(|| SimulationError::CustomerNotFound(national_id.to_string()))?;

        let summary = amortization::monthly_payment(customer.capital, &terms)?;
        let simulation = self
            .simulations
            .record(NewSimulation::new(customer.national_id, &terms, summary))
            .await?;

        info!(
            simulation_id = %simulation.id,
            monthly_payment = %simulation.monthly_payment,
            "mortgage simulated"
        );
        Ok(simulation)
    }

    /// Lists the simulations recorded for a national ID, oldest first
    ///
    /// Works for deleted customers too. A malformed ID has no history.
    pub async fn history(&self, national_id: &str) -> Result<Vec<Simulation>, SimulationError> {
        let Ok(national_id) = NationalId::parse(national_id) else {
            return Ok(Vec::new());
        };
        Ok(self.simulations.list_for_national_id(&national_id).await?)
    }
}
