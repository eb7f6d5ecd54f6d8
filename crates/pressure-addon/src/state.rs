//! Pressure state accessor.
//!
//! Holds the single normalized pressure scalar the addon manages. The value
//! is owned by whoever constructs the state (no process-wide global) and is
//! kept within `[PRESSURE_MIN, PRESSURE_MAX]` at all times.

use crate::error::AddonError;

/// Lower bound of the pressure range.
pub const PRESSURE_MIN: f64 = 0.0;

/// Upper bound of the pressure range.
pub const PRESSURE_MAX: f64 = 1.0;

/// Pressure value before any setter call.
pub const DEFAULT_PRESSURE: f64 = 0.5;

/// The pressure scalar.
///
/// Invariant: the stored value is always within `[PRESSURE_MIN, PRESSURE_MAX]`
/// and is never NaN.
#[derive(Debug, Clone)]
pub struct PressureState {
    value: f64,
}

impl Default for PressureState {
    fn default() -> Self {
        Self {
            value: DEFAULT_PRESSURE,
        }
    }
}

impl PressureState {
    /// Create a state initialized to [`DEFAULT_PRESSURE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with a custom starting value.
    ///
    /// Out-of-range values are clamped; NaN falls back to the default.
    pub fn with_initial(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self {
            value: value.clamp(PRESSURE_MIN, PRESSURE_MAX),
        }
    }

    /// Current pressure value. No side effects.
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Store a new pressure value, clamped into range.
    ///
    /// Values below the range become [`PRESSURE_MIN`], values above it become
    /// [`PRESSURE_MAX`] (infinities clamp like any out-of-range value). NaN is
    /// rejected and the stored value is left untouched. Returns what was
    /// stored.
    pub fn set(&mut self, value: f64) -> Result<f64, AddonError> {
        if value.is_nan() {
            return Err(AddonError::InvalidArgument(
                "pressure must be a number, got NaN".into(),
            ));
        }

        let clamped = value.clamp(PRESSURE_MIN, PRESSURE_MAX);
        if clamped != value {
            tracing::debug!(
                requested = value,
                stored = clamped,
                "pressure clamped into range"
            );
        }

        self.value = clamped;
        Ok(clamped)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
