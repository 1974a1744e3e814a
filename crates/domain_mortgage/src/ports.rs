//! Mortgage Domain Ports
//!
//! `SimulationPort` is the append-only store of simulation records. There is
//! no update or delete: simulations are immutable once recorded.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};
use domain_customer::NationalId;

use crate::simulation::{NewSimulation, Simulation};

/// Storage port for simulation records
#[async_trait]
pub trait SimulationPort: DomainPort + HealthCheckable {
    /// Appends a simulation and returns it with its assigned id and timestamp
    async fn record(&self, simulation: NewSimulation) -> Result<Simulation, PortError>;

    /// Lists simulations recorded for a national ID, oldest first
    ///
    /// The national ID does not need to belong to an existing customer.
    async fn list_for_national_id(&self, national_id: &NationalId) -> Result<Vec<Simulation>, PortError>;
}

/// Mock implementation of SimulationPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use tokio::sync::RwLock;

    use core_kernel::{HealthCheckResult, SimulationId};

    /// In-memory mock implementation of SimulationPort
    #[derive(Debug, Default)]
    pub struct MockSimulationPort {
        simulations: RwLock<Vec<Simulation>>,
    }

    impl MockSimulationPort {
        /// Creates a new mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of recorded simulations
        pub async fn len(&self) -> usize {
            self.simulations.read().await.len()
        }

        /// Returns true when nothing has been recorded
        pub async fn is_empty(&self) -> bool {
            self.simulations.read().await.is_empty()
        }
    }

    impl DomainPort for MockSimulationPort {}

    #[async_trait]
    impl HealthCheckable for MockSimulationPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-simulation-port", 0)
        }
    }

    #[async_trait]
    impl SimulationPort for MockSimulationPort {
        async fn record(&self, simulation: NewSimulation) -> Result<Simulation, PortError> {
            let mut simulations = self.simulations.write().await;
            let id = SimulationId::new(simulations.len() as i64 + 1);
            let recorded = Simulation::from_record(id, simulation, Utc::now());
            simulations.push(recorded.clone());
            Ok(recorded)
        }

        async fn list_for_national_id(&self, national_id: &NationalId) -> Result<Vec<Simulation>, PortError> {
            Ok(self
                .simulations
                .read()
                .await
                .iter()
                .filter(|s| &s.national_id == national_id)
                .cloned()
                .collect())
        }
    }
}
