//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Money;
use domain_customer::{CustomerDraft, NationalId};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for eight-digit numbers backing a national ID
pub fn national_id_number_strategy() -> impl Strategy<Value = u32> {
    0u32..=99_999_999u32
}

/// Strategy for national IDs with a correct check letter
pub fn national_id_strategy() -> impl Strategy<Value = String> {
    national_id_number_strategy().prop_map(|n| {
        format!("{:08}{}", n, NationalId::check_letter(n))
    })
}

/// Strategy for national IDs whose check letter is wrong
pub fn wrong_letter_national_id_strategy() -> impl Strategy<Value = String> {
    (national_id_number_strategy(), 1usize..23).prop_map(|(n, offset)| {
        let letters: Vec<char> = "TRWAGMYFPDXBNJZSQVHLCKE".chars().collect();
        let index = (n as usize % 23 + offset) % 23;
        format!("{:08}{}", n, letters[index])
    })
}

/// Strategy for non-negative capital amounts with two decimal places
pub fn capital_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for loan capital between 1000.00 and 2000000.00
pub fn loan_capital_strategy() -> impl Strategy<Value = Money> {
    (1_000_00i64..2_000_000_00i64).prop_map(Money::from_cents)
}

/// Strategy for annual rate percentages between 0.01 and 25.00
pub fn annual_rate_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=2500i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for loan terms in years
pub fn term_years_strategy() -> impl Strategy<Value = i64> {
    1i64..=40i64
}

/// Strategy for valid customer drafts
pub fn customer_draft_strategy() -> impl Strategy<Value = CustomerDraft> {
    (national_id_strategy(), "[A-Z][a-z]{2,12}", capital_strategy()).prop_map(
        |(national_id, name, capital)| {
            let email = format!("{}@example.com", national_id.to_lowercase());
            CustomerDraft::new(name, national_id, email, capital)
        },
    )
}
