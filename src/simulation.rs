//! Simulated telemetry timer
//!
//! Stands in for a live wearable feed: once per period it refreshes the
//! vitals and drains the battery on the shared dashboard state. The task is
//! owned by a [`SimulationHandle`] and stops when the handle is cancelled or
//! dropped.

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::SharedDashboard;

/// Period between simulated telemetry updates
pub const DEFAULT_INTERVAL_MS: u64 = 10_000;

/// Repeating vitals simulation
#[derive(Debug, Clone)]
pub struct SimulationTimer {
    /// Interval between ticks in milliseconds
    interval_ms: u64,
}

impl SimulationTimer {
    pub fn new(interval_ms: u64) -> Self {
        info!(interval_ms = interval_ms, "Initializing simulation timer");
        Self { interval_ms }
    }

    /// Spawn the tick loop; the first tick fires one period after start
    pub fn start(&self, state: SharedDashboard) -> SimulationHandle {
        let period = Duration::from_millis(self.interval_ms);

        let task = tokio::spawn(async move {
            info!("Starting vitals simulation loop");

            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let mut dashboard = state.write().await;
                dashboard.apply_tick();
            }
        });

        SimulationHandle { task: Some(task) }
    }
}

impl Default for SimulationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

/// Ownership of a running simulation loop
#[derive(Debug)]
pub struct SimulationHandle {
    task: Option<JoinHandle<()>>,
}

impl SimulationHandle {
    /// Stop the loop; returns `false` if it was already cancelled
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                info!("Vitals simulation cancelled");
                true
            }
            None => {
                debug!("Vitals simulation already cancelled");
                false
            }
        }
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
