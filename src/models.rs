//! Data models for the patient dashboard
//!
//! Defines the patient profile, vital signs, alert records, metric samples and
//! the enumerated selections the view can make.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display string written to `Patient::last_update` on every tick
pub const LAST_UPDATE_LABEL: &str = "10s ago";

/// Monitoring status of the patient device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Inactive,
}

/// Patient profile shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub status: PatientStatus,
    /// Location label (not real coordinates)
    pub location: String,
    /// Cosmetic freshness label, reset to [`LAST_UPDATE_LABEL`] every tick
    pub last_update: String,
    pub emergency_alerts: u32,
    /// Wearable battery level in percent, never below 0
    pub battery: f64,
}

impl Default for Patient {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            status: PatientStatus::Active,
            location: "GPS Pin".to_string(),
            last_update: LAST_UPDATE_LABEL.to_string(),
            emergency_alerts: 0,
            battery: 88.0,
        }
    }
}

/// Current vital sign readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Beats per minute
    pub heart_rate: u32,
    /// Body temperature (Celsius, one decimal)
    pub temperature: f64,
    /// Blood oxygen saturation (percentage)
    pub spo2: u32,
    pub fall_detected: bool,
}

impl Default for VitalSigns {
    fn default() -> Self {
        Self {
            heart_rate: 78,
            temperature: 36.8,
            spo2: 97,
            fall_detected: false,
        }
    }
}

/// Kind of event recorded in the alert history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    FallDetected,
    HighTemp,
    LowSpO2,
    Other(String),
}

impl AlertType {
    pub fn label(&self) -> &str {
        match self {
            AlertType::FallDetected => "Fall Detected",
            AlertType::HighTemp => "High Temp",
            AlertType::LowSpO2 => "Low SpO2",
            AlertType::Other(label) => label,
        }
    }
}

/// Resolution state of an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Resolved,
    Pending,
    Critical,
    Other(String),
}

impl AlertStatus {
    pub fn label(&self) -> &str {
        match self {
            AlertStatus::Resolved => "Resolved",
            AlertStatus::Pending => "Pending",
            AlertStatus::Critical => "Critical",
            AlertStatus::Other(label) => label,
        }
    }
}

/// Historical alert record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Display time, e.g. "12:05 PM"
    pub time: String,
    pub alert_type: AlertType,
    pub status: AlertStatus,
    pub notes: String,
}

impl Alert {
    pub fn new(time: &str, alert_type: AlertType, status: AlertStatus, notes: &str) -> Self {
        Self {
            time: time.to_string(),
            alert_type,
            status,
            notes: notes.to_string(),
        }
    }

    /// Alert history the dashboard starts with
    pub fn initial_history() -> Vec<Alert> {
        vec![
            Alert::new(
                "12:05 PM",
                AlertType::FallDetected,
                AlertStatus::Resolved,
                "Auto alert",
            ),
            Alert::new("09:20 AM", AlertType::HighTemp, AlertStatus::Pending, "38.5°C"),
        ]
    }
}

/// One sample of the charted metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Error returned when a selection label is not one of the known options
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {label}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub label: String,
}

/// Vital sign that can be charted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "Heart Rate")]
    HeartRate,
    #[serde(rename = "SpO2")]
    SpO2,
    #[serde(rename = "Temperature")]
    Temperature,
}

impl Metric {
    /// Options in the order the metric selector lists them
    pub const ALL: [Metric; 3] = [Metric::HeartRate, Metric::SpO2, Metric::Temperature];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::HeartRate => "Heart Rate",
            Metric::SpO2 => "SpO2",
            Metric::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Metric {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| UnknownOption {
                kind: "metric",
                label: s.to_string(),
            })
    }
}

/// Chart time window offered by the range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "Last Hour")]
    LastHour,
    #[serde(rename = "Last 24 Hours")]
    Last24Hours,
    #[serde(rename = "Last Week")]
    LastWeek,
    #[serde(rename = "Last Month")]
    LastMonth,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::LastHour,
        TimeRange::Last24Hours,
        TimeRange::LastWeek,
        TimeRange::LastMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LastHour => "Last Hour",
            TimeRange::Last24Hours => "Last 24 Hours",
            TimeRange::LastWeek => "Last Week",
            TimeRange::LastMonth => "Last Month",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeRange::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| UnknownOption {
                kind: "time range",
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patient() {
        let patient = Patient::default();

        assert_eq!(patient.name, "John Doe");
        assert_eq!(patient.status, PatientStatus::Active);
        assert_eq!(patient.last_update, LAST_UPDATE_LABEL);
        assert_eq!(patient.emergency_alerts, 0);
        assert_eq!(patient.battery, 88.0);
    }

    #[test]
    fn test_default_vitals() {
        let vitals = VitalSigns::default();

        assert_eq!(vitals.heart_rate, 78);
        assert_eq!(vitals.temperature, 36.8);
        assert_eq!(vitals.spo2, 97);
        assert!(!vitals.fall_detected);
    }

    #[test]
    fn test_initial_alert_history() {
        let alerts = Alert::initial_history();

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].alert_type, AlertType::FallDetected);
        assert_eq!(alerts[0].status, AlertStatus::Resolved);
        assert_eq!(alerts[1].alert_type.label(), "High Temp");
        assert_eq!(alerts[1].notes, "38.5°C");
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!("Heart Rate".parse::<Metric>(), Ok(Metric::HeartRate));
        assert_eq!("SpO2".parse::<Metric>(), Ok(Metric::SpO2));
        assert_eq!("Temperature".parse::<Metric>(), Ok(Metric::Temperature));

        let err = "Blood Pressure".parse::<Metric>().unwrap_err();
        assert_eq!(err.kind, "metric");
        assert_eq!(err.to_string(), "unknown metric: Blood Pressure");
    }

    #[test]
    fn test_time_range_parsing() {
        for range in TimeRange::ALL {
            assert_eq!(range.label().parse::<TimeRange>(), Ok(range));
        }
        assert!("last hour".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_metric_serializes_as_label() {
        let json = serde_json::to_string(&Metric::HeartRate).unwrap();
        assert_eq!(json, "\"Heart Rate\"");

        let range: TimeRange = serde_json::from_str("\"Last Week\"").unwrap();
        assert_eq!(range, TimeRange::LastWeek);
    }
}
