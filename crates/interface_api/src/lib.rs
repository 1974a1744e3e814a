//! HTTP API Layer
//!
//! This crate provides the REST API for customer management and mortgage
//! simulation using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for customers, simulations and health
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{app_state_from_pool, create_router};
//!
//! let app = create_router(app_state_from_pool(pool));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::HealthCheckable;
use domain_customer::CustomerRegistry;
use domain_mortgage::MortgageSimulator;
use infra_db::{DatabasePool, SqlCustomerAdapter, SqlSimulationAdapter};

use crate::middleware::audit_middleware;
use crate::handlers::{customer, simulation, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CustomerRegistry>,
    pub simulator: Arc<MortgageSimulator>,
    /// Adapters checked by the readiness endpoint
    pub health: Vec<Arc<dyn HealthCheckable>>,
}

/// Wires the services to SQLite adapters sharing one pool
pub fn app_state_from_pool(pool: DatabasePool) -> AppState {
    let customers = Arc::new(SqlCustomerAdapter::new(pool.clone()));
    let simulations = Arc::new(SqlSimulationAdapter::new(pool));

    let registry = Arc::new(CustomerRegistry::new(customers.clone()));
    let simulator = Arc::new(MortgageSimulator::new(registry.clone(), simulations.clone()));
    let health: Vec<Arc<dyn HealthCheckable>> = vec![
        customers as Arc<dyn HealthCheckable>,
        simulations as Arc<dyn HealthCheckable>,
    ];

    AppState {
        registry,
        simulator,
        health,
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Services and health checks shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Customer and simulation routes
    let api_routes = Router::new()
        .route(
            "/clientes/",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/clientes/:dni",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .route(
            "/clientes/:dni/simulacion/",
            get(simulation::list_simulations).post(simulation::simulate_mortgage),
        )
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
