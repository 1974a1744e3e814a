//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! mortgage system test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for customers and simulations
//! - `database`: In-memory SQLite database with the schema applied
//! - `assertions`: Custom assertion helpers for decimal and money values
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
