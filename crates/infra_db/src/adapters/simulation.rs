//! SQL Simulation Adapter
//!
//! Implements the append-only `SimulationPort` over the `simulations` table.
//! The annual rate is stored as the percentage the caller supplied (3.5 for
//! 3.5%), and money amounts as exact decimal text.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, Money, PortError, Rate, SimulationId};
use domain_customer::NationalId;
use domain_mortgage::{NewSimulation, Simulation, SimulationPort};

use crate::adapters::{db_to_port_error, ping};
use crate::error::DatabaseError;
use crate::repositories::simulation::{NewSimulationRow, SimulationRepository, SimulationRow};

const ADAPTER_ID: &str = "sqlite-simulation-adapter";

/// SQLite-backed implementation of the SimulationPort trait
#[derive(Debug, Clone)]
pub struct SqlSimulationAdapter {
    repository: SimulationRepository,
    pool: SqlitePool,
}

impl SqlSimulationAdapter {
    /// Creates a new adapter over a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: SimulationRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for SqlSimulationAdapter {}

#[async_trait]
impl HealthCheckable for SqlSimulationAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        ping(&self.pool, ADAPTER_ID).await
    }
}

#[async_trait]
impl SimulationPort for SqlSimulationAdapter {
    #[instrument(skip(self, simulation), fields(national_id = %simulation.national_id))]
    async fn record(&self, simulation: NewSimulation) -> Result<Simulation, PortError> {
        debug!("Recording simulation");

        let row = NewSimulationRow {
            national_id: simulation.national_id.to_string(),
            annual_rate: simulation.annual_rate.as_percentage().to_string(),
            term_years: i64::from(simulation.term_years),
            monthly_payment: simulation.monthly_payment.amount().to_string(),
            total_amount: simulation.total_amount.amount().to_string(),
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(row).await.map_err(db_to_port_error)?;
        row_to_simulation(stored)
    }

    #[instrument(skip(self), fields(national_id = %national_id))]
    async fn list_for_national_id(&self, national_id: &NationalId) -> Result<Vec<Simulation>, PortError> {
        self.repository
            .list_for_national_id(national_id.as_str())
            .await
            .map_err(db_to_port_error)?
            .into_iter()
            .map(row_to_simulation)
            .collect()
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

fn corrupt(column: &str, value: &str, reason: impl std::fmt::Display) -> PortError {
    db_to_port_error(DatabaseError::corrupt(column, value, reason))
}

/// Converts a simulation row to the domain type
fn row_to_simulation(row: SimulationRow) -> Result<Simulation, PortError> {
    let national_id =
        NationalId::parse(&row.national_id).map_err(|e| corrupt("national_id", &row.national_id, e))?;
    let annual_rate = Decimal::from_str(&row.annual_rate)
        .map(Rate::from_percentage)
        .map_err(|e| corrupt("annual_rate", &row.annual_rate, e))?;
    let term_years = u32::try_from(row.term_years)
        .map_err(|e| corrupt("term_years", &row.term_years.to_string(), e))?;
    let monthly_payment = Money::from_str(&row.monthly_payment)
        .map_err(|e| corrupt("monthly_payment", &row.monthly_payment, e))?;
    let total_amount = Money::from_str(&row.total_amount)
        .map_err(|e| corrupt("total_amount", &row.total_amount, e))?;

    Ok(Simulation {
        id: SimulationId::new(row.id),
        national_id,
        annual_rate,
        term_years,
        monthly_payment,
        total_amount,
        created_at: row.created_at,
    })
}
