//! Addon configuration.

use crate::state::{DEFAULT_PRESSURE, PRESSURE_MAX, PRESSURE_MIN};

/// Configuration for the pressure addon.
#[derive(Debug, Clone)]
pub struct AddonConfig {
    /// Pressure value before any setter call (default: 0.5).
    /// Clamped into `[0, 1]` at init.
    pub initial_pressure: f64,
    /// Whether to log every export invocation (default: false).
    pub log_calls: bool,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            initial_pressure: DEFAULT_PRESSURE,
            log_calls: false,
        }
    }
}

impl AddonConfig {
    /// Build config from environment variables.
    pub fn from_env() -> Self {
        Self {
            initial_pressure: std::env::var("ADDON_INITIAL_PRESSURE")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| !v.is_nan())
                .map(|v| v.clamp(PRESSURE_MIN, PRESSURE_MAX))
                .unwrap_or(DEFAULT_PRESSURE),
            log_calls: std::env::var("ADDON_LOG_CALLS")
                .unwrap_or_default()
                .eq_ignore_ascii_case("true"),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
