//! Dashboard state management
//!
//! Central state container for the dashboard: patient profile, live vitals,
//! alert history, the charted metric series and the view's selections.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{
    Alert, HealthMetric, Metric, Patient, TimeRange, VitalSigns, LAST_UPDATE_LABEL,
};
use crate::navigation::{Navigator, LOGIN_ROUTE};
use crate::random::{uniform_int, uniform_tenths, RandomSource};
use crate::series::MetricSeriesGenerator;

/// Battery percentage drained per simulation tick
pub const BATTERY_DRAIN_PER_TICK: f64 = 0.01;

/// Tab shown when the dashboard opens
pub const DEFAULT_TAB: &str = "Home";

/// State shared between the simulation task and the view adapters
pub type SharedDashboard = Arc<RwLock<DashboardState>>;

/// Central dashboard state
pub struct DashboardState {
    patient: Patient,
    vitals: VitalSigns,
    alerts: Vec<Alert>,
    series: Vec<HealthMetric>,
    selected_metric: Metric,
    selected_time_range: TimeRange,
    active_tab: String,
    generator: MetricSeriesGenerator,
    rng: Box<dyn RandomSource>,
    navigator: Arc<dyn Navigator>,
    /// Simulation ticks applied so far
    tick_count: u64,
    /// Bumped on every mutation so views can detect change
    revision: u64,
}

impl DashboardState {
    /// Create dashboard state with the built-in mock patient and an empty series
    pub fn new(rng: Box<dyn RandomSource>, navigator: Arc<dyn Navigator>) -> Self {
        info!("Initializing dashboard state");
        Self {
            patient: Patient::default(),
            vitals: VitalSigns::default(),
            alerts: Alert::initial_history(),
            series: Vec::new(),
            selected_metric: Metric::HeartRate,
            selected_time_range: TimeRange::Last24Hours,
            active_tab: DEFAULT_TAB.to_string(),
            generator: MetricSeriesGenerator::new(),
            rng,
            navigator,
            tick_count: 0,
            revision: 0,
        }
    }

    pub fn into_shared(self) -> SharedDashboard {
        Arc::new(RwLock::new(self))
    }

    /// Discard the current series and generate a new one for the selected metric
    pub fn initialize_series(&mut self) {
        self.series = self
            .generator
            .generate(self.selected_metric, Utc::now(), self.rng.as_mut());
        self.revision += 1;
    }

    /// Switch the charted metric and regenerate the series
    pub fn select_metric(&mut self, metric: Metric) {
        info!(metric = %metric, "Metric selected");
        self.selected_metric = metric;
        self.initialize_series();
    }

    /// Switch the chart time range and regenerate the series
    ///
    /// The generated series is the same 24 hourly points for every range.
    pub fn select_time_range(&mut self, range: TimeRange) {
        info!(time_range = %range, "Time range selected");
        self.selected_time_range = range;
        self.initialize_series();
    }

    pub fn select_tab(&mut self, tab: &str) {
        debug!(tab = %tab, "Tab selected");
        self.active_tab = tab.to_string();
        self.revision += 1;
    }

    /// Ask the navigator for the login view; returns the requested route
    pub fn logout(&self) -> &'static str {
        info!("Logout requested");
        self.navigator.navigate(LOGIN_ROUTE);
        LOGIN_ROUTE
    }

    /// Apply one simulation tick: fresh vitals, battery drain, freshness label
    pub fn apply_tick(&mut self) {
        self.tick_count += 1;

        self.patient.last_update = LAST_UPDATE_LABEL.to_string();

        let rng = self.rng.as_mut();
        self.vitals.heart_rate = uniform_int(rng, 60, 40);
        self.vitals.temperature = uniform_tenths(rng, 350, 40);
        self.vitals.spo2 = uniform_int(rng, 90, 10);

        if self.patient.battery > 0.0 {
            self.patient.battery = (self.patient.battery - BATTERY_DRAIN_PER_TICK).max(0.0);
        }

        self.revision += 1;

        debug!(
            tick = self.tick_count,
            heart_rate = self.vitals.heart_rate,
            temperature = self.vitals.temperature,
            spo2 = self.vitals.spo2,
            battery = self.patient.battery,
            "Applied simulation tick"
        );
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn vitals(&self) -> &VitalSigns {
        &self.vitals
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn series(&self) -> &[HealthMetric] {
        &self.series
    }

    pub fn selected_metric(&self) -> Metric {
        self.selected_metric
    }

    pub fn selected_time_range(&self) -> TimeRange {
        self.selected_time_range
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
