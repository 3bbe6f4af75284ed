//! Patient Monitoring Dashboard
//!
//! Backend for a single-patient monitoring screen: mock profile, simulated
//! vital signs and battery, alert history and a synthetic metric chart.
//!
//! ⚠️ DISCLAIMER:
//! All readings are simulated. This system is NOT connected to any device.

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod handlers;
mod models;
mod navigation;
mod random;
mod series;
mod session;
mod simulation;
mod state;
mod validation;
mod view;
mod websocket;

use crate::config::Settings;
use crate::handlers::StartedAt;
use crate::navigation::LoggingNavigator;
use crate::random::RngSource;
use crate::session::DashboardSession;
use crate::simulation::SimulationTimer;
use crate::state::DashboardState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    // Logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,patient_dashboard=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json())
        .init();

    // Load configuration
    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_address = format!("{}:{}", settings.server.host, settings.server.port);

    info!("Starting patient dashboard backend");
    info!("Binding server to {}", bind_address);

    let state = DashboardState::new(
        Box::new(RngSource::from_seed(settings.simulation.seed)),
        Arc::new(LoggingNavigator),
    )
    .into_shared();

    // ---------------------------------------------------------------------
    // Dashboard activation: initial series + vitals simulation
    // ---------------------------------------------------------------------
    let timer = SimulationTimer::new(settings.simulation.interval_ms);
    let session = DashboardSession::activate(state, &timer).await;
    let app_state = session.state().clone();
    let started = StartedAt(Utc::now());

    // ---------------------------------------------------------------------
    // HTTP + WebSocket server
    // ---------------------------------------------------------------------
    let result = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(started))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await;

    session.deactivate();
    result
}
