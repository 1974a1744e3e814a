//! Customer handlers

use axum::{extract::{Path, State}, Json};
use validator::Validate;

use crate::{AppState, error::ApiError, extract::JsonBody};
use crate::dto::customer::*;

fn customer_not_found(dni: &str) -> ApiError {
    ApiError::NotFound(format!("Customer with national ID {} not found", dni))
}

/// Registers a new customer
pub async fn create_customer(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    request.validate()?;
    let customer = state.registry.create(request.into()).await?;
    Ok(Json(customer.into()))
}

/// Lists every customer
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.registry.list_all().await?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// Gets a customer by national ID
pub async fn get_customer(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    state
        .registry
        .get_by_national_id(&dni)
        .await?
        .map(|customer| Json(customer.into()))
        .ok_or_else(|| customer_not_found(&dni))
}

/// Replaces a customer's data
///
/// The registry checks that the customer exists before validating the body,
/// so an unknown national ID is reported as not found even when the body is
/// also invalid.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(dni): Path<String>,
    JsonBody(request): JsonBody<CustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    state
        .registry
        .update_by_national_id(&dni, request.into())
        .await?
        .map(|customer| Json(customer.into()))
        .ok_or_else(|| customer_not_found(&dni))
}

/// Deletes a customer and returns the removed record
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(dni): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    state
        .registry
        .delete_by_national_id(&dni)
        .await?
        .map(|customer| Json(customer.into()))
        .ok_or_else(|| customer_not_found(&dni))
}
