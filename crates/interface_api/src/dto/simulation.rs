//! Simulation DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_mortgage::Simulation;

use super::positive;

/// Body of a simulation request
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SimulationRequest {
    /// Nominal annual rate as a percentage
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "positive"))]
    pub tae: Decimal,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub years: i64,
}

/// Result of a simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_payment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub dni: String,
}

impl From<Simulation> for SimulationResponse {
    fn from(simulation: Simulation) -> Self {
        Self {
            monthly_payment: simulation.monthly_payment.amount(),
            total_amount: simulation.total_amount.amount(),
            dni: simulation.national_id.to_string(),
        }
    }
}

/// A stored simulation in a history listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationRecord {
    pub id: i64,
    pub dni: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub tae: Decimal,
    pub years: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_payment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Simulation> for SimulationRecord {
    fn from(simulation: Simulation) -> Self {
        Self {
            id: simulation.id.value(),
            dni: simulation.national_id.to_string(),
            tae: simulation.annual_rate.as_percentage(),
            years: simulation.term_years,
            monthly_payment: simulation.monthly_payment.amount(),
            total_amount: simulation.total_amount.amount(),
            created_at: simulation.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_rate_and_years_are_invalid() {
        let request = SimulationRequest { tae: dec!(0), years: 0 };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tae"));
        assert!(errors.field_errors().contains_key("years"));
    }

    #[test]
    fn test_response_serializes_numbers() {
        let response = SimulationResponse {
            monthly_payment: dec!(449.04),
            total_amount: dec!(161656.09),
            dni: "12345678Z".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["monthly_payment"], serde_json::json!(449.04));
        assert_eq!(json["total_amount"], serde_json::json!(161656.09));
        assert_eq!(json["dni"], "12345678Z");
    }
}
