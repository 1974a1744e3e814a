//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! The system operates in a single currency, so `Money` carries no currency code.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Decimal places used when presenting or persisting settled amounts
pub const CENTS_DP: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A monetary amount
///
/// Money uses rust_decimal for precise arithmetic without floating-point errors.
/// The amount is kept exactly as given; settled amounts are rounded to cents
/// with banker's rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates Money from an integer amount in cents
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, CENTS_DP))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds to cents using banker's rounding (round half to even)
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointNearestEven),
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.dp$}", self.amount, dp = CENTS_DP as usize)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self::new)
            .map_err(|e| MoneyError::InvalidAmount(format!("{s}: {e}")))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

/// Represents a percentage rate (e.g., a nominal annual interest rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a fraction (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        (self.value * dec!(100)).normalize()
    }

    /// Returns the equivalent monthly rate of a nominal annual rate
    pub fn monthly(&self) -> Decimal {
        self.value / dec!(12)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_keeps_exact_amount() {
        let m = Money::new(dec!(100000.123456));
        assert_eq!(m.amount(), dec!(100000.123456));
    }

    #[test]
    fn test_money_from_cents() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_rate_monthly() {
        let rate = Rate::from_percentage(dec!(12));
        assert_eq!(rate.monthly(), dec!(0.01));
    }
}
