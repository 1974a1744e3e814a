//! Request handlers

pub mod customer;
pub mod simulation;
pub mod health;
