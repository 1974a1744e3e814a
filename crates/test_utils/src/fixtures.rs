//! Test Fixtures
//!
//! Pre-built test data for common testing scenarios. The national IDs here
//! all carry the correct check letter.

use core_kernel::Money;
use domain_customer::{CustomerDraft, NationalId, NewCustomer};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// National IDs with a correct check letter
pub const VALID_NATIONAL_IDS: [&str; 5] = ["12345678Z", "00000000T", "99999999R", "44556677L", "87654321X"];

/// National IDs that fail validation for various reasons
pub const INVALID_NATIONAL_IDS: [&str; 6] = [
    "12345678A",  // wrong letter
    "1234567Z",   // too short
    "123456789Z", // too long
    "12345678",   // missing letter
    "ABCDEFGHZ",  // non-numeric prefix
    "",
];

/// Customer test fixtures
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// A valid draft for Ana with capital 100000
    pub fn ana() -> CustomerDraft {
        CustomerDraft::new("Ana Garcia", "12345678Z", "ana@example.com", dec!(100000))
    }

    /// A valid draft for Luis with capital 200000
    pub fn luis() -> CustomerDraft {
        CustomerDraft::new("Luis Perez", "87654321X", "luis@example.com", dec!(200000))
    }

    /// A valid draft for Marta with capital 150000
    pub fn marta() -> CustomerDraft {
        CustomerDraft::new("Marta Ruiz", "44556677L", "marta@example.com", dec!(150000))
    }

    /// A valid draft with the given national ID and a derived email
    pub fn with_national_id(national_id: &str) -> CustomerDraft {
        CustomerDraft::new(
            format!("Customer {}", national_id),
            national_id,
            format!("{}@example.com", national_id.to_lowercase()),
            dec!(50000),
        )
    }

    /// A draft with the given capital
    pub fn with_capital(capital: Decimal) -> CustomerDraft {
        CustomerDraft {
            capital,
            ..Self::ana()
        }
    }

    /// A draft that breaks every rule
    pub fn invalid() -> CustomerDraft {
        CustomerDraft::new("  ", "12345678A", "not-an-email", dec!(-1))
    }

    /// A validated record ready for a port
    pub fn record(national_id: &str) -> NewCustomer {
        NewCustomer {
            name: format!("Customer {}", national_id),
            national_id: national_id_or_panic(national_id),
            email: format!("{}@example.com", national_id.to_lowercase()),
            capital: Money::new(dec!(50000)),
        }
    }
}

/// Simulation input fixtures as `(capital, annual rate percentage, years, monthly, total)`
pub struct SimulationFixtures;

impl SimulationFixtures {
    /// Reference inputs with their expected rounded payment and total
    pub fn reference_cases() -> Vec<(Decimal, Decimal, i64, Decimal, Decimal)> {
        vec![
            (dec!(100000), dec!(3.5), 30, dec!(449.04), dec!(161656.09)),
            (dec!(200000), dec!(2), 20, dec!(1011.77), dec!(242824.00)),
            (dec!(150000), dec!(5), 15, dec!(1186.19), dec!(213514.28)),
            (dec!(12000), dec!(12), 1, dec!(1066.19), dec!(12794.23)),
        ]
    }
}

fn national_id_or_panic(value: &str) -> NationalId {
    NationalId::parse(value).unwrap_or_else(|e| panic!("fixture national id {} is invalid: {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids_parse() {
        for id in VALID_NATIONAL_IDS {
            assert!(NationalId::is_valid(id), "{} should be valid", id);
        }
    }

    #[test]
    fn test_invalid_ids_fail() {
        for id in INVALID_NATIONAL_IDS {
            assert!(!NationalId::is_valid(id), "{:?} should be invalid", id);
        }
    }

    #[test]
    fn test_named_drafts_are_valid() {
        for draft in [CustomerFixtures::ana(), CustomerFixtures::luis(), CustomerFixtures::marta()] {
            assert!(draft.into_record().is_ok());
        }
        assert!(CustomerFixtures::invalid().into_record().is_err());
    }
}
