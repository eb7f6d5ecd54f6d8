//! Export handlers invoked by the host runtime.
//!
//! Each handler marshals JSON arguments, runs against the shared pressure
//! state, and hands a JSON-compatible value back to the host. The state is
//! injected through [`ExportContext`] rather than living in a global, and is
//! kept behind a mutex so the handlers stay correct even if the host stops
//! serializing calls.

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AddonError;
use crate::state::PressureState;

/// Constant returned by the `hello` readiness check.
pub const READY_MESSAGE: &str = "Pressure Addon Ready!";

/// Export names the addon can register handlers for.
pub const KNOWN_EXPORTS: &[&str] = &["hello", "getPressure", "setPressure"];

/// Reading returned by `getPressure`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PressureReading {
    pub pressure: f64,
}

// ─── Export context ─────────────────────────────────────────────────

/// Context shared by all export handlers.
#[derive(Debug)]
pub struct ExportContext {
    state: Mutex<PressureState>,
    log_calls: bool,
}

impl ExportContext {
    /// Create a context owning the given pressure state.
    pub fn new(state: PressureState, log_calls: bool) -> Self {
        Self {
            state: Mutex::new(state),
            log_calls,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PressureState>, AddonError> {
        self.state
            .lock()
            .map_err(|_| AddonError::Internal("pressure state lock poisoned".into()))
    }

    /// `hello` — readiness check; no state interaction.
    pub fn hello(&self) -> &'static str {
        if self.log_calls {
            tracing::info!(export = "hello", "readiness check");
        }
        READY_MESSAGE
    }

    /// `getPressure` — current reading. Cannot fail under normal operation.
    pub fn get_pressure(&self) -> Result<PressureReading, AddonError> {
        let state = self.lock()?;
        let reading = PressureReading {
            pressure: state.get(),
        };
        if self.log_calls {
            tracing::info!(export = "getPressure", pressure = reading.pressure, "pressure read");
        }
        Ok(reading)
    }

    /// `setPressure` — store a clamped value.
    ///
    /// Always reports success for finite numeric input; out-of-range values
    /// are recovered by clamping, never surfaced as an error.
    pub fn set_pressure(&self, value: f64) -> Result<bool, AddonError> {
        let mut state = self.lock()?;
        let stored = state.set(value)?;
        if self.log_calls {
            tracing::info!(
                export = "setPressure",
                requested = value,
                stored,
                "pressure updated"
            );
        }
        Ok(true)
    }
}

// ─── Argument marshalling ───────────────────────────────────────────

/// Extract a required numeric argument from a host argument slice.
pub(crate) fn require_number(args: &[Value], index: usize, export: &str) -> Result<f64, AddonError> {
    let arg = args.get(index).ok_or_else(|| {
        AddonError::MissingArgument(format!("{export} expects argument {index}"))
    })?;
    arg.as_f64().ok_or_else(|| {
        AddonError::InvalidArgument(format!(
            "{export} argument {index} must be a number, got {arg}"
        ))
    })
}

// ─── Tests ──────────────────────────────────────────────────────────
