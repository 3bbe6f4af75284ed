//! Synthetic metric series for the dashboard chart
//!
//! The chart always shows 24 hourly samples ending at the current instant,
//! whichever time range is selected.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::{HealthMetric, Metric};
use crate::random::{uniform_int, uniform_tenths, RandomSource};

/// Number of points in a generated series
pub const SERIES_LEN: usize = 24;

/// Draw one value within the range associated with `metric`
///
/// - Heart Rate: integer in `[60, 100)`
/// - SpO2: integer in `[90, 100)`
/// - Temperature: one decimal in `[35, 39)`
pub fn sample_value(metric: Metric, rng: &mut dyn RandomSource) -> f64 {
    match metric {
        Metric::HeartRate => f64::from(uniform_int(rng, 60, 40)),
        Metric::SpO2 => f64::from(uniform_int(rng, 90, 10)),
        Metric::Temperature => uniform_tenths(rng, 350, 40),
    }
}

/// Produces hourly samples going backward from a reference instant
#[derive(Debug, Clone)]
pub struct MetricSeriesGenerator {
    points: usize,
    step: Duration,
}

impl MetricSeriesGenerator {
    pub fn new() -> Self {
        Self {
            points: SERIES_LEN,
            step: Duration::hours(1),
        }
    }

    /// Generate a fresh series for `metric`, oldest point first, last point at `now`
    // TODO: derive point count and step from the selected TimeRange once the
    // product owner signs off on range-aware buckets.
    pub fn generate(
        &self,
        metric: Metric,
        now: DateTime<Utc>,
        rng: &mut dyn RandomSource,
    ) -> Vec<HealthMetric> {
        let series: Vec<HealthMetric> = (0..self.points)
            .rev()
            .map(|offset| HealthMetric {
                value: sample_value(metric, rng),
                timestamp: now - self.step * offset as i32,
            })
            .collect();

        debug!(
            metric = %metric,
            points = series.len(),
            "Generated metric series"
        );

        series
    }
}

impl Default for MetricSeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}
