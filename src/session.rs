//! Dashboard activation lifecycle
//!
//! Activation generates the initial chart series and starts the simulation;
//! deactivation, explicit or by drop, stops it exactly once.

use tracing::info;

use crate::simulation::{SimulationHandle, SimulationTimer};
use crate::state::SharedDashboard;

/// An active dashboard: shared state plus the simulation it owns
pub struct DashboardSession {
    state: SharedDashboard,
    simulation: SimulationHandle,
}

impl DashboardSession {
    pub async fn activate(state: SharedDashboard, timer: &SimulationTimer) -> Self {
        state.write().await.initialize_series();
        let simulation = timer.start(state.clone());

        info!("Dashboard activated");
        Self { state, simulation }
    }

    pub fn state(&self) -> &SharedDashboard {
        &self.state
    }

    pub fn deactivate(mut self) {
        self.simulation.cancel();
        info!("Dashboard deactivated");
    }
}
