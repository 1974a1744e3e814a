//! Custom Test Assertions
//!
//! Assertion helpers for decimal and money values.

use core_kernel::Money;
use rust_decimal::Decimal;

/// Asserts that a decimal value is approximately equal to another
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Decimal {} is not approximately equal to {} (diff: {}, tolerance: {})",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a money amount equals an expected decimal exactly
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money {} does not equal {}",
        actual,
        expected
    );
}

/// Asserts that a money amount has at most two decimal places
pub fn assert_whole_cents(money: &Money) {
    assert!(
        money.amount().scale() <= 2 || money.amount() == money.amount().round_dp(2),
        "Money {} is not rounded to cents",
        money
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_approx_eq() {
        assert_decimal_approx_eq(dec!(449.04), dec!(449.0388), dec!(0.01));
    }

    #[test]
    #[should_panic]
    fn test_decimal_approx_eq_fails() {
        assert_decimal_approx_eq(dec!(449.04), dec!(450), dec!(0.01));
    }

    #[test]
    fn test_whole_cents() {
        assert_whole_cents(&Money::new(dec!(12.30)));
    }
}
