//! Customer DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_customer::{Customer, CustomerDraft};

/// Body of create and update requests
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CustomerRequest {
    pub name: String,
    pub dni: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub capital: Decimal,
}

impl From<CustomerRequest> for CustomerDraft {
    fn from(request: CustomerRequest) -> Self {
        CustomerDraft::new(request.name, request.dni, request.email, request.capital)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub dni: String,
    pub email: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub capital: Decimal,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.value(),
            name: customer.name,
            dni: customer.national_id.to_string(),
            email: customer.email,
            capital: customer.capital.amount(),
        }
    }
}
