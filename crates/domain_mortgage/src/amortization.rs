//! Fixed-rate amortization
//!
//! A loan of capital `C` at monthly rate `i` over `n` months is repaid with a
//! constant monthly payment
//!
//! ```text
//! M = C * i / (1 - (1 + i)^-n)  =  C * i * f / (f - 1),   f = (1 + i)^n
//! ```
//!
//! The second form is what gets evaluated, as `C * i * (f / (f - 1))` so the
//! large factor `f` never multiplies the capital. When `f` exceeds the decimal
//! range, `(1 + i)^-n` is below the smallest representable step and the
//! payment is the interest-only amount `C * i`. A rate too small to move `f`
//! away from one is reported as an error instead of dividing by zero.
//!
//! The total repaid is `M * n`, computed from the unrounded payment. Both
//! results are rounded to cents with banker's rounding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{Money, Rate};

/// Months in a year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Reasons a payment cannot be computed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmortizationError {
    #[error("annual rate must be greater than zero, found {0}")]
    NonPositiveRate(Decimal),

    #[error("term must be at least one year, found {0}")]
    NonPositiveTerm(i64),

    #[error("term of {0} years is too long")]
    TermTooLong(i64),

    #[error("capital cannot be negative, found {0}")]
    NegativeCapital(Decimal),

    #[error("annual rate {0} is too small to compute a payment")]
    RateTooSmall(Decimal),

    #[error("payment calculation overflowed")]
    Overflow,
}

/// Validated inputs of a payment calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanTerms {
    annual_rate: Rate,
    term_years: u32,
}

impl LoanTerms {
    /// Validates a percentage rate (3.5 for 3.5%) and a term in years
    pub fn new(annual_rate_pct: Decimal, term_years: i64) -> Result<Self, AmortizationError> {
        if annual_rate_pct <= Decimal::ZERO {
            return Err(AmortizationError::NonPositiveRate(annual_rate_pct));
        }
        if term_years <= 0 {
            return Err(AmortizationError::NonPositiveTerm(term_years));
        }
        let years = u32::try_from(term_years).map_err(|_| AmortizationError::TermTooLong(term_years))?;
        years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or(AmortizationError::TermTooLong(term_years))?;

        Ok(Self {
            annual_rate: Rate::from_percentage(annual_rate_pct),
            term_years: years,
        })
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// Number of monthly payments
    pub fn months(&self) -> u32 {
        // Bounded in new()
        self.term_years * MONTHS_PER_YEAR
    }
}

/// Monthly payment and total repaid, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub monthly_payment: Money,
    pub total_amount: Money,
}

/// Computes the fixed monthly payment for a loan
pub fn monthly_payment(capital: Money, terms: &LoanTerms) -> Result<PaymentSummary, AmortizationError> {
    if capital.is_negative() {
        return Err(AmortizationError::NegativeCapital(capital.amount()));
    }

    let monthly_rate = terms.annual_rate.monthly();
    let months = terms.months();

    let interest = capital
        .amount()
        .checked_mul(monthly_rate)
        .ok_or(AmortizationError::Overflow)?;

    let payment = match checked_pow(Decimal::ONE + monthly_rate, months) {
        Some(growth) => {
            let denominator = growth - Decimal::ONE;
            if denominator.is_zero() {
                return Err(AmortizationError::RateTooSmall(terms.annual_rate.as_percentage()));
            }
            growth
                .checked_div(denominator)
                .and_then(|factor| interest.checked_mul(factor))
                .ok_or(AmortizationError::Overflow)?
        }
        None => interest,
    };
    let total = payment
        .checked_mul(Decimal::from(months))
        .ok_or(AmortizationError::Overflow)?;

    Ok(PaymentSummary {
        monthly_payment: Money::new(payment).round_to_cents(),
        total_amount: Money::new(total).round_to_cents(),
    })
}

/// Raises `base` to a non-negative integer power by repeated squaring
fn checked_pow(base: Decimal, exponent: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut base = base;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.checked_mul(base)?;
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_checked_pow() {
        assert_eq!(checked_pow(dec!(2), 10), Some(dec!(1024)));
        assert_eq!(checked_pow(dec!(1.5), 0), Some(Decimal::ONE));
        assert_eq!(checked_pow(dec!(1.1), 2), Some(dec!(1.21)));
        assert_eq!(checked_pow(dec!(10), 40), None);
    }

    #[test]
    fn test_terms_reject_non_positive() {
        assert_eq!(LoanTerms::new(dec!(0), 30), Err(AmortizationError::NonPositiveRate(dec!(0))));
        assert_eq!(LoanTerms::new(dec!(-1), 30), Err(AmortizationError::NonPositiveRate(dec!(-1))));
        assert_eq!(LoanTerms::new(dec!(3.5), 0), Err(AmortizationError::NonPositiveTerm(0)));
        assert_eq!(LoanTerms::new(dec!(3.5), -2), Err(AmortizationError::NonPositiveTerm(-2)));
    }

    #[test]
    fn test_terms_reject_huge_term() {
        assert!(matches!(
            LoanTerms::new(dec!(3.5), i64::from(u32::MAX)),
            Err(AmortizationError::TermTooLong(_))
        ));
    }

    #[test]
    fn test_reference_payment() {
        let terms = LoanTerms::new(dec!(3.5), 30).unwrap();
        let summary = monthly_payment(Money::new(dec!(100000)), &terms).unwrap();
        assert_eq!(summary.monthly_payment.amount(), dec!(449.04));
        assert_eq!(summary.total_amount.amount(), dec!(161656.09));
    }

    #[test]
    fn test_zero_capital() {
        let terms = LoanTerms::new(dec!(3.5), 30).unwrap();
        let summary = monthly_payment(Money::zero(), &terms).unwrap();
        assert!(summary.monthly_payment.is_zero());
        assert!(summary.total_amount.is_zero());
    }

    #[test]
    fn test_high_rate_long_term_pays_interest_only() {
        let terms = LoanTerms::new(dec!(60), 100).unwrap();
        let summary = monthly_payment(Money::new(dec!(100000)), &terms).unwrap();
        assert_eq!(summary.monthly_payment.amount(), dec!(5000.00));
        assert_eq!(summary.total_amount.amount(), dec!(6000000.00));
    }

    #[test]
    fn test_growth_beyond_decimal_range_still_pays() {
        assert_eq!(checked_pow(Decimal::ONE + dec!(100) / dec!(1200), 1200), None);

        let terms = LoanTerms::new(dec!(100), 100).unwrap();
        let summary = monthly_payment(Money::new(dec!(120000)), &terms).unwrap();
        assert_eq!(summary.monthly_payment.amount(), dec!(10000.00));
        assert_eq!(summary.total_amount.amount(), dec!(12000000.00));
    }
}
