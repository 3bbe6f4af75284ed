//! Configuration management module
//!
//! Loads and validates environment-based configuration.

use std::env;
use thiserror::Error;

use crate::simulation::DEFAULT_INTERVAL_MS;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid number format in environment variable {0}")]
    ParseError(&'static str),

    #[error("SIMULATION_INTERVAL_MS must be greater than zero")]
    ZeroInterval,
}

/// Server configuration settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Vitals simulation settings
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Interval in milliseconds between simulated updates
    pub interval_ms: u64,
    /// Fixed seed for reproducible readings
    pub seed: Option<u64>,
}

/// Root configuration structure
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub simulation: SimulationSettings,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .map_err(|_| SettingsError::ParseError("SERVER_PORT"))?;

        let interval_ms = match lookup("SIMULATION_INTERVAL_MS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| SettingsError::ParseError("SIMULATION_INTERVAL_MS"))?,
            None => DEFAULT_INTERVAL_MS,
        };
        if interval_ms == 0 {
            return Err(SettingsError::ZeroInterval);
        }

        let seed = lookup("SIMULATION_SEED")
            .map(|raw| raw.parse())
            .transpose()
            .map_err(|_| SettingsError::ParseError("SIMULATION_SEED"))?;

        Ok(Self {
            server: ServerSettings {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
                port,
            },
            simulation: SimulationSettings { interval_ms, seed },
        })
    }
}
