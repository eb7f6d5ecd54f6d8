//! Pressure Addon
//!
//! A native addon for a host application plugin runtime. It exposes three
//! host-callable operations — a readiness check (`hello`) and a getter/setter
//! pair for a single clamped pressure scalar (`getPressure`, `setPressure`).
//! The scalar is owned by the addon instance, kept within `[0, 1]`, and
//! marshalled to the host as JSON values.

pub mod config;
pub mod error;
pub mod exports;
pub mod manifest;
pub mod registry;
pub mod state;

pub use config::AddonConfig;
pub use error::AddonError;
pub use exports::{ExportContext, PressureReading, KNOWN_EXPORTS, READY_MESSAGE};
pub use manifest::{AddonManifest, AddonMeta, ExportsConfig};
pub use registry::{AddonStatus, PressureAddon};
pub use state::{PressureState, DEFAULT_PRESSURE, PRESSURE_MAX, PRESSURE_MIN};
