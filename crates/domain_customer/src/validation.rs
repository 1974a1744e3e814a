//! Customer validation rules
//!
//! This module validates customer data before it reaches storage.
//!
//! # Validation Rules
//!
//! - Name must not be blank
//! - Email must be syntactically valid
//! - National ID must be 9 characters with a matching check letter
//! - Capital must not be negative
//!
//! Uniqueness of national ID and email is not checked here; it depends on
//! stored data and is enforced by the registry and the database.

use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::customer::CustomerDraft;
use crate::national_id::NationalId;

/// Longest accepted display name
pub const MAX_NAME_LEN: usize = 200;

/// Result of customer validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the customer data is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for customer data
///
/// # Examples
///
/// ```rust
/// use domain_customer::{CustomerDraft, CustomerValidator};
/// use rust_decimal::Decimal;
///
/// let draft = CustomerDraft::new("Ana Ruiz", "12345678Z", "ana@example.com", Decimal::new(150_000, 0));
/// let result = CustomerValidator::validate(&draft);
/// assert!(result.is_valid, "{:?}", result.errors);
/// ```
pub struct CustomerValidator;

impl CustomerValidator {
    /// Validates every field of a draft and collects all failures
    pub fn validate(draft: &CustomerDraft) -> ValidationResult {
        let mut result = ValidationResult::ok();

        result.merge(Self::validate_name(&draft.name));
        result.merge(Self::validate_national_id(&draft.national_id));
        result.merge(Self::validate_email(&draft.email));
        result.merge(Self::validate_capital(draft.capital));

        result
    }

    /// Validates the display name
    pub fn validate_name(name: &str) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            result.add_error("Customer name is required");
        } else if trimmed.chars().count() > MAX_NAME_LEN {
            result.add_error(format!("Customer name cannot exceed {} characters", MAX_NAME_LEN));
        }

        result
    }

    /// Validates the national ID format and check letter
    pub fn validate_national_id(national_id: &str) -> ValidationResult {
        match NationalId::parse(national_id) {
            Ok(_) => ValidationResult::ok(),
            Err(e) => ValidationResult::fail(vec![format!("Invalid national ID '{}': {}", national_id, e)]),
        }
    }

    /// Validates email syntax
    pub fn validate_email(email: &str) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let trimmed = email.trim();

        if trimmed.is_empty() {
            result.add_error("Customer email is required");
        } else if !trimmed.validate_email() {
            result.add_error(format!("Invalid email format: {}", trimmed));
        }

        result
    }

    /// Validates the capital amount
    pub fn validate_capital(capital: Decimal) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if capital.is_sign_negative() && !capital.is_zero() {
            result.add_error(format!("Capital cannot be negative, found {}", capital));
        } else if capital.is_zero() {
            result.add_warning("Capital is zero; simulations will yield no monthly payment");
        }

        result
    }
}
