//! Presentation lookups and the serializable dashboard view
//!
//! Maps categorical values to what the screen shows: metric units, alert
//! status colors and alert icons.

use serde::Serialize;

use crate::models::{
    Alert, AlertStatus, AlertType, HealthMetric, Metric, Patient, TimeRange, VitalSigns,
};
use crate::state::DashboardState;

/// Display unit for a metric selector label; unknown labels have no unit
pub fn metric_unit(label: &str) -> &'static str {
    label.parse::<Metric>().map(unit_for).unwrap_or("")
}

pub fn unit_for(metric: Metric) -> &'static str {
    match metric {
        Metric::HeartRate => "bpm",
        Metric::SpO2 => "%",
        Metric::Temperature => "°C",
    }
}

/// Badge color class for an alert status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Success,
    Warning,
    Danger,
    Info,
}

pub fn status_color(status: &AlertStatus) -> StatusColor {
    match status {
        AlertStatus::Resolved => StatusColor::Success,
        AlertStatus::Pending => StatusColor::Warning,
        AlertStatus::Critical => StatusColor::Danger,
        AlertStatus::Other(_) => StatusColor::Info,
    }
}

pub fn alert_icon(alert_type: &AlertType) -> &'static str {
    match alert_type {
        AlertType::FallDetected => "🫀",
        AlertType::HighTemp => "🌡️",
        AlertType::LowSpO2 => "💧",
        AlertType::Other(_) => "⚠️",
    }
}

/// Alert row with its display decorations resolved
#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub time: String,
    pub alert_type: String,
    pub status: String,
    pub notes: String,
    pub icon: &'static str,
    pub color: StatusColor,
}

impl From<&Alert> for AlertView {
    fn from(alert: &Alert) -> Self {
        Self {
            time: alert.time.clone(),
            alert_type: alert.alert_type.label().to_string(),
            status: alert.status.label().to_string(),
            notes: alert.notes.clone(),
            icon: alert_icon(&alert.alert_type),
            color: status_color(&alert.status),
        }
    }
}

/// Everything the dashboard screen renders, captured at one revision
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub revision: u64,
    pub patient: Patient,
    pub vitals: VitalSigns,
    pub alerts: Vec<AlertView>,
    pub series: Vec<HealthMetric>,
    pub selected_metric: Metric,
    pub selected_metric_unit: &'static str,
    pub selected_time_range: TimeRange,
    pub active_tab: String,
    pub metric_options: Vec<Metric>,
    pub time_range_options: Vec<TimeRange>,
}

impl From<&DashboardState> for DashboardView {
    fn from(state: &DashboardState) -> Self {
        Self {
            revision: state.revision(),
            patient: state.patient().clone(),
            vitals: state.vitals().clone(),
            alerts: state.alerts().iter().map(AlertView::from).collect(),
            series: state.series().to_vec(),
            selected_metric: state.selected_metric(),
            selected_metric_unit: unit_for(state.selected_metric()),
            selected_time_range: state.selected_time_range(),
            active_tab: state.active_tab().to_string(),
            metric_options: Metric::ALL.to_vec(),
            time_range_options: TimeRange::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::seeded_state;

    #[test]
    fn test_metric_units() {
        assert_eq!(metric_unit("Heart Rate"), "bpm");
        assert_eq!(metric_unit("SpO2"), "%");
        assert_eq!(metric_unit("Temperature"), "°C");
        assert_eq!(metric_unit("Respiration"), "");
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(&AlertStatus::Resolved), StatusColor::Success);
        assert_eq!(status_color(&AlertStatus::Pending), StatusColor::Warning);
        assert_eq!(status_color(&AlertStatus::Critical), StatusColor::Danger);
        assert_eq!(
            status_color(&AlertStatus::Other("Escalated".into())),
            StatusColor::Info
        );
        assert_eq!(
            serde_json::to_value(StatusColor::Danger).unwrap(),
            "danger"
        );
    }

    #[test]
    fn test_alert_icons() {
        assert_eq!(alert_icon(&AlertType::FallDetected), "🫀");
        assert_eq!(alert_icon(&AlertType::HighTemp), "🌡️");
        assert_eq!(alert_icon(&AlertType::LowSpO2), "💧");
        assert_eq!(alert_icon(&AlertType::Other("Low Battery".into())), "⚠️");
    }

    #[test]
    fn test_dashboard_view_projection() {
        let (mut state, _) = seeded_state(31);
        state.select_metric(Metric::SpO2);

        let view = DashboardView::from(&state);

        assert_eq!(view.selected_metric_unit, "%");
        assert_eq!(view.series.len(), 24);
        assert_eq!(view.alerts[0].icon, "🫀");
        assert_eq!(view.alerts[1].color, StatusColor::Warning);
        assert_eq!(view.metric_options.len(), 3);
        assert_eq!(view.time_range_options.len(), 4);
    }

    #[test]
    fn test_dashboard_view_json_shape() {
        let (state, _) = seeded_state(32);
        let json = serde_json::to_value(DashboardView::from(&state)).unwrap();

        assert_eq!(json["selected_metric"], "Heart Rate");
        assert_eq!(json["selected_time_range"], "Last 24 Hours");
        assert_eq!(json["alerts"][0]["color"], "success");
        assert_eq!(json["alerts"][0]["alert_type"], "Fall Detected");
        assert_eq!(json["active_tab"], "Home");
    }
}
