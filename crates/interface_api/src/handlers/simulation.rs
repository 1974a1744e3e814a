//! Simulation handlers

use axum::{extract::{Path, State}, Json};
use validator::Validate;

use crate::{AppState, error::ApiError, extract::JsonBody};
use crate::dto::simulation::*;

/// Simulates a mortgage over the customer's capital and records the result
pub async fn simulate_mortgage(
    State(state): State<AppState>,
    Path(dni): Path<String>,
    JsonBody(request): JsonBody<SimulationRequest>,
) -> Result<Json<SimulationResponse>, ApiError> {
    request.validate()?;
    let simulation = state
        .simulator
        .simulate(&dni, request.tae, request.years)
        .await?;
    Ok(Json(simulation.into()))
}

/// Lists the simulations recorded for a national ID
pub async fn list_simulations(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<Vec<SimulationRecord>>, ApiError> {
    let history = state.simulator.history(&dni).await?;
    Ok(Json(history.into_iter().map(Into::into).collect()))
}
