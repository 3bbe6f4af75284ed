//! HTTP request handlers
//!
//! REST endpoints through which the view layer reads the dashboard and
//! forwards user selections.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Metric, TimeRange};
use crate::state::SharedDashboard;
use crate::validation::{validate_request, MetricSelection, TabSelection, TimeRangeSelection};
use crate::view::{metric_unit, DashboardView};
use crate::websocket::WsSession;

/// Process start time, recorded once for uptime reporting
#[derive(Debug, Clone, Copy)]
pub struct StartedAt(pub DateTime<Utc>);

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // Dashboard endpoints
            .route("/dashboard", web::get().to(get_dashboard))
            .route("/dashboard/metric", web::post().to(select_metric))
            .route("/dashboard/time-range", web::post().to(select_time_range))
            .route("/dashboard/tab", web::post().to(select_tab))
            .route("/dashboard/logout", web::post().to(logout))
            // View lookups
            .route("/metrics/{name}/unit", web::get().to(get_metric_unit)),
    )
    // WebSocket endpoint
    .route("/ws", web::get().to(websocket_handler));
}

#[derive(Debug, Serialize)]
struct HealthCheck {
    status: String,
    version: String,
    timestamp: DateTime<Utc>,
    uptime_seconds: i64,
    ticks: u64,
}

/// Health check endpoint
///
/// GET /api/health
pub async fn health_check(
    state: web::Data<SharedDashboard>,
    started: web::Data<StartedAt>,
) -> Result<HttpResponse, AppError> {
    let state = state.read().await;
    let now = Utc::now();

    let health = HealthCheck {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime_seconds: (now - started.0).num_seconds(),
        ticks: state.tick_count(),
    };

    Ok(HttpResponse::Ok().json(health))
}

/// Current dashboard view
///
/// GET /api/dashboard
pub async fn get_dashboard(state: web::Data<SharedDashboard>) -> Result<HttpResponse, AppError> {
    let state = state.read().await;
    Ok(HttpResponse::Ok().json(DashboardView::from(&*state)))
}

/// Select the charted metric
///
/// POST /api/dashboard/metric
pub async fn select_metric(
    state: web::Data<SharedDashboard>,
    body: web::Json<MetricSelection>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let correlation_id = extract_correlation_id(&req);
    validate_request(&*body)?;
    let metric: Metric = body.metric.parse()?;

    let mut state = state.write().await;
    state.select_metric(metric);

    info!(correlation_id = %correlation_id, metric = %metric, "Metric selection applied");
    Ok(HttpResponse::Ok().json(DashboardView::from(&*state)))
}

/// Select the chart time range
///
/// POST /api/dashboard/time-range
pub async fn select_time_range(
    state: web::Data<SharedDashboard>,
    body: web::Json<TimeRangeSelection>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let correlation_id = extract_correlation_id(&req);
    validate_request(&*body)?;
    let range: TimeRange = body.time_range.parse()?;

    let mut state = state.write().await;
    state.select_time_range(range);

    info!(correlation_id = %correlation_id, time_range = %range, "Time range selection applied");
    Ok(HttpResponse::Ok().json(DashboardView::from(&*state)))
}

/// Select the active tab
///
/// POST /api/dashboard/tab
pub async fn select_tab(
    state: web::Data<SharedDashboard>,
    body: web::Json<TabSelection>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*body)?;

    let mut state = state.write().await;
    state.select_tab(&body.tab);

    Ok(HttpResponse::Ok().json(DashboardView::from(&*state)))
}

#[derive(Serialize)]
struct LogoutResponse {
    redirect: &'static str,
}

/// Request navigation to the login view
///
/// POST /api/dashboard/logout
pub async fn logout(state: web::Data<SharedDashboard>) -> Result<HttpResponse, AppError> {
    let state = state.read().await;
    let redirect = state.logout();

    Ok(HttpResponse::Ok().json(LogoutResponse { redirect }))
}

#[derive(Serialize)]
struct MetricUnit {
    metric: String,
    unit: &'static str,
}

/// Unit label for a metric; unknown metrics have an empty unit
///
/// GET /api/metrics/{name}/unit
pub async fn get_metric_unit(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let metric = path.into_inner();
    let unit = metric_unit(&metric);

    Ok(HttpResponse::Ok().json(MetricUnit { metric, unit }))
}

/// WebSocket upgrade handler
///
/// GET /ws
pub async fn websocket_handler(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<SharedDashboard>,
) -> Result<HttpResponse, actix_web::Error> {
    let client_id = Uuid::new_v4().to_string();

    info!(client_id = %client_id, "WebSocket connection request");

    let ws_session = WsSession::new(client_id, Arc::clone(state.get_ref()));

    actix_web_actors::ws::start(ws_session, &req, stream)
}

/// Extract or generate correlation ID from request headers
fn extract_correlation_id(req: &HttpRequest) -> String {
    req.headers()
        .get("X-Correlation-ID")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::seeded_state;
    use actix_web::{test, App};

    fn seeded_shared(seed: u64) -> SharedDashboard {
        let (mut state, _) = seeded_state(seed);
        state.initialize_series();
        state.into_shared()
    }

    macro_rules! dashboard_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(web::Data::new(StartedAt(Utc::now())))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let state = seeded_shared(41);
        state.write().await.apply_tick();
        let app = dashboard_app!(state);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["ticks"], 1);
        assert!(body["uptime_seconds"].as_i64().unwrap() >= 0);
    }

    #[actix_web::test]
    async fn test_get_dashboard() {
        let app = dashboard_app!(seeded_shared(42));

        let req = test::TestRequest::get().uri("/api/dashboard").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["patient"]["name"], "John Doe");
        assert_eq!(body["series"].as_array().unwrap().len(), 24);
        assert_eq!(body["selected_metric_unit"], "bpm");
    }

    #[actix_web::test]
    async fn test_select_metric() {
        let state = seeded_shared(43);
        let app = dashboard_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/dashboard/metric")
            .set_json(serde_json::json!({ "metric": "SpO2" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let state = state.read().await;
        assert_eq!(state.selected_metric(), Metric::SpO2);
        assert!(state.series().iter().all(|p| (90.0..100.0).contains(&p.value)));
    }

    #[actix_web::test]
    async fn test_select_unknown_metric() {
        let state = seeded_shared(44);
        let app = dashboard_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/dashboard/metric")
            .set_json(serde_json::json!({ "metric": "Blood Pressure" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        assert_eq!(state.read().await.selected_metric(), Metric::HeartRate);
    }

    #[actix_web::test]
    async fn test_select_time_range() {
        let state = seeded_shared(45);
        let app = dashboard_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/dashboard/time-range")
            .set_json(serde_json::json!({ "time_range": "Last Week" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["selected_time_range"], "Last Week");
        assert_eq!(body["series"].as_array().unwrap().len(), 24);
    }

    #[actix_web::test]
    async fn test_select_tab() {
        let state = seeded_shared(46);
        let app = dashboard_app!(state.clone());

        let req = test::TestRequest::post()
            .uri("/api/dashboard/tab")
            .set_json(serde_json::json!({ "tab": "Alerts" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(state.read().await.active_tab(), "Alerts");

        let req = test::TestRequest::post()
            .uri("/api/dashboard/tab")
            .set_json(serde_json::json!({ "tab": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_logout() {
        let (state, navigator) = seeded_state(47);
        let app = dashboard_app!(state.into_shared());

        let req = test::TestRequest::post()
            .uri("/api/dashboard/logout")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["redirect"], "/login");
        assert_eq!(navigator.routes(), vec!["/login".to_string()]);
    }

    #[actix_web::test]
    async fn test_metric_unit_lookup() {
        let app = dashboard_app!(seeded_shared(48));

        let req = test::TestRequest::get()
            .uri("/api/metrics/Temperature/unit")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["unit"], "°C");

        let req = test::TestRequest::get()
            .uri("/api/metrics/Pulse/unit")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["unit"], "");
    }
}
