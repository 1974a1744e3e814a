//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain aggregate. Repositories encapsulate
//! SQL queries and map rows onto named row structs.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Columns are read by name through `sqlx::FromRow`, never by position
//! - Multi-statement writes run in a single transaction
//! - Decimal values are stored as text so they round-trip exactly

pub mod customer;
pub mod simulation;

pub use customer::{CustomerRepository, CustomerRow, NewCustomerRow};
pub use simulation::{NewSimulationRow, SimulationRepository, SimulationRow};
