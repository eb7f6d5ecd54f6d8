//! Export registry — addon lifecycle and host dispatch.
//!
//! The [`PressureAddon`] is the instance handed to the host runtime. At init
//! it builds the export table (optionally cross-checked against a manifest),
//! then dispatches host calls by export name. Errors never cross the host
//! boundary as panics or raw `Err`s: [`PressureAddon::invoke_for_host`]
//! converts them into a host-visible error object.

use serde_json::{json, Value};

use crate::config::AddonConfig;
use crate::error::AddonError;
use crate::exports::{require_number, ExportContext, KNOWN_EXPORTS};
use crate::manifest::AddonManifest;
use crate::state::PressureState;

// ─── Lifecycle ──────────────────────────────────────────────────────

/// Lifecycle status of the addon.
///
/// `init → Ready (readable/writable) → Terminated`; there are no other
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonStatus {
    Ready,
    Terminated,
}

// ─── Addon ──────────────────────────────────────────────────────────

/// The addon instance handed to the host runtime.
#[derive(Debug)]
pub struct PressureAddon {
    ctx: ExportContext,
    /// Export names the host may invoke, in registration order.
    exports: Vec<String>,
    status: AddonStatus,
}

impl PressureAddon {
    /// Initialize the addon with every known export registered.
    pub fn init(config: AddonConfig) -> Self {
        let exports: Vec<String> = KNOWN_EXPORTS.iter().map(|e| e.to_string()).collect();
        tracing::info!(exports = ?exports, "addon initialized");
        Self {
            ctx: ExportContext::new(
                PressureState::with_initial(config.initial_pressure),
                config.log_calls,
            ),
            exports,
            status: AddonStatus::Ready,
        }
    }

    /// Initialize the addon from a manifest.
    ///
    /// Validates the manifest and registers only the exports it declares.
    /// A manifest declaring an export with no handler fails init.
    pub fn init_with_manifest(
        config: AddonConfig,
        manifest: &AddonManifest,
    ) -> Result<Self, AddonError> {
        manifest.validate()?;

        let exports = manifest.declared_exports();
        tracing::info!(
            addon = %manifest.addon.name,
            version = %manifest.addon.version,
            exports = ?exports,
            "addon initialized from manifest"
        );

        Ok(Self {
            ctx: ExportContext::new(
                PressureState::with_initial(config.initial_pressure),
                config.log_calls,
            ),
            exports,
            status: AddonStatus::Ready,
        })
    }

    /// Current lifecycle status.
    pub fn status(&self) -> AddonStatus {
        self.status
    }

    /// Registered export names, in registration order.
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Check if the addon registered an export with the given name.
    pub fn has_export(&self, name: &str) -> bool {
        self.exports.iter().any(|e| e == name)
    }

    /// Dispatch one host call by export name.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, AddonError> {
        if self.status == AddonStatus::Terminated {
            return Err(AddonError::Terminated);
        }
        if !self.has_export(name) {
            return Err(AddonError::UnknownExport(name.to_string()));
        }

        match name {
            "hello" => Ok(Value::String(self.ctx.hello().to_string())),
            "getPressure" => {
                let reading = self.ctx.get_pressure()?;
                Ok(serde_json::to_value(reading)?)
            }
            "setPressure" => {
                let value = require_number(args, 0, "setPressure")?;
                Ok(Value::Bool(self.ctx.set_pressure(value)?))
            }
            other => Err(AddonError::UnknownExport(other.to_string())),
        }
    }

    /// Dispatch one host call, never propagating an error across the ABI.
    ///
    /// Any [`AddonError`] becomes a host-visible error object
    /// `{ "error": { "kind", "message" } }`.
    pub fn invoke_for_host(&self, name: &str, args: &[Value]) -> Value {
        match self.invoke(name, args) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(export = %name, "export failed: {e}");
                json!({
                    "error": {
                        "kind": e.kind(),
                        "message": e.to_string(),
                    }
                })
            }
        }
    }

    /// Terminate the addon. Idempotent; further invocations fail with
    /// [`AddonError::Terminated`].
    pub fn terminate(&mut self) {
        if self.status == AddonStatus::Terminated {
            return;
        }
        self.status = AddonStatus::Terminated;
        tracing::info!("addon terminated");
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
