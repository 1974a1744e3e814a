//! National identity document numbers
//!
//! A national ID is nine characters: an eight-digit number followed by a
//! check letter. The letter is looked up in a fixed 23-letter table using the
//! number modulo 23, so a single mistyped digit or letter is always caught.
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::national_id::NationalId;
//!
//! assert!(NationalId::is_valid("12345678Z"));
//! assert!(!NationalId::is_valid("12345678A"));
//!
//! let id = NationalId::from_number(0).unwrap();
//! assert_eq!(id.as_str(), "00000000T");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Check letters indexed by `number % 23`
pub const CHECK_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

/// Total length of a national ID
pub const NATIONAL_ID_LEN: usize = 9;

/// Number of leading digits
const DIGITS_LEN: usize = NATIONAL_ID_LEN - 1;

/// Largest number that fits in the eight-digit prefix
const MAX_NUMBER: u32 = 99_999_999;

/// Reasons a national ID can be rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NationalIdError {
    #[error("national ID must have 9 characters, found {0}")]
    WrongLength(usize),

    #[error("national ID must start with 8 digits, found '{0}'")]
    NonNumericPrefix(String),

    #[error("national ID check letter should be '{expected}', found '{found}'")]
    ChecksumMismatch { expected: char, found: char },

    #[error("national ID number {0} does not fit in 8 digits")]
    OutOfRange(u32),
}

/// A national ID whose check letter has been verified
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId(String);

impl NationalId {
    /// Parses and verifies a national ID
    pub fn parse(value: &str) -> Result<Self, NationalIdError> {
        let length = value.chars().count();
        if length != NATIONAL_ID_LEN {
            return Err(NationalIdError::WrongLength(length));
        }

        let prefix: String = value.chars().take(DIGITS_LEN).collect();
        if !prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(NationalIdError::NonNumericPrefix(prefix));
        }
        let number: u32 = prefix
            .parse()
            .map_err(|_| NationalIdError::NonNumericPrefix(prefix.clone()))?;

        let found = value.chars().last().unwrap_or_default();
        let expected = Self::check_letter(number);
        if found != expected {
            return Err(NationalIdError::ChecksumMismatch { expected, found });
        }

        Ok(Self(value.to_string()))
    }

    /// Returns true if the value is a well-formed national ID
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Builds the national ID for an eight-digit number
    pub fn from_number(number: u32) -> Result<Self, NationalIdError> {
        if number > MAX_NUMBER {
            return Err(NationalIdError::OutOfRange(number));
        }
        Ok(Self(format!(
            "{:0width$}{}",
            number,
            Self::check_letter(number),
            width = DIGITS_LEN
        )))
    }

    /// Returns the check letter for a number
    pub fn check_letter(number: u32) -> char {
        let index = (number % 23) as usize;
        CHECK_LETTERS.as_bytes()[index] as char
    }

    /// Returns the eight-digit number
    pub fn number(&self) -> u32 {
        // Only constructed from validated input, so the first 8 bytes are ASCII digits.
        self.0[..DIGITS_LEN].parse().unwrap_or_default()
    }

    /// Returns the check letter
    pub fn letter(&self) -> char {
        self.0.chars().last().unwrap_or_default()
    }

    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NationalId {
    type Err = NationalIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NationalId {
    type Error = NationalIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> String {
        id.0
    }
}

impl AsRef<str> for NationalId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
