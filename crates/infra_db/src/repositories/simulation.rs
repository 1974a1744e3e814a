//! Simulation repository implementation
//!
//! The `simulations` table is append-only: rows are inserted and read, never
//! updated or deleted.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::DatabaseError;

const SIMULATION_COLUMNS: &str =
    "id, national_id, annual_rate, term_years, monthly_payment, total_amount, created_at";

/// Repository for the simulation history
#[derive(Debug, Clone)]
pub struct SimulationRepository {
    pool: SqlitePool,
}

impl SimulationRepository {
    /// Creates a new SimulationRepository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Appends a simulation and returns the stored row
    pub async fn insert(&self, simulation: NewSimulationRow) -> Result<SimulationRow, DatabaseError> {
        let row = sqlx::query_as::<_, SimulationRow>(&format!(
            "INSERT INTO simulations \
             (national_id, annual_rate, term_years, monthly_payment, total_amount, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {SIMULATION_COLUMNS}"
        ))
        .bind(&simulation.national_id)
        .bind(&simulation.annual_rate)
        .bind(simulation.term_years)
        .bind(&simulation.monthly_payment)
        .bind(&simulation.total_amount)
        .bind(simulation.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists simulations for a national ID ordered by id
    pub async fn list_for_national_id(&self, national_id: &str) -> Result<Vec<SimulationRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, SimulationRow>(&format!(
            "SELECT {SIMULATION_COLUMNS} FROM simulations WHERE national_id = ? ORDER BY id"
        ))
        .bind(national_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

// ============================================================================
// Row types
// ============================================================================

/// Database row representation of a simulation
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SimulationRow {
    pub id: i64,
    pub national_id: String,
    /// Annual percentage as decimal text
    pub annual_rate: String,
    pub term_years: i64,
    pub monthly_payment: String,
    pub total_amount: String,
    pub created_at: DateTime<Utc>,
}

/// Data for appending a simulation row
#[derive(Debug, Clone)]
pub struct NewSimulationRow {
    pub national_id: String,
    pub annual_rate: String,
    pub term_years: i64,
    pub monthly_payment: String,
    pub total_amount: String,
    pub created_at: DateTime<Utc>,
}
