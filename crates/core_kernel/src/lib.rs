//! Core Kernel - Foundational types and utilities for the mortgage system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money and rate types with precise decimal arithmetic
//! - Strongly-typed integer identifiers
//! - Port error and health-check abstractions shared by adapters

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Rate, MoneyError};
pub use identifiers::{CustomerId, SimulationId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth};
