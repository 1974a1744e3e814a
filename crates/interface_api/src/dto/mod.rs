//! Request and response data transfer objects
//!
//! Field names follow the public API (`dni`, `tae`, `years`). Money amounts
//! and rates travel as JSON numbers.

pub mod customer;
pub mod simulation;

use rust_decimal::Decimal;
use validator::ValidationError;

pub(crate) fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        let mut err = ValidationError::new("positive");
        err.message = Some("must be greater than zero".into());
        return Err(err);
    }
    Ok(())
}
