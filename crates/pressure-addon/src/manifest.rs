//! Addon manifest parsing and validation.
//!
//! Parses `addon.toml` files that declare addon metadata and the exports the
//! addon provides to the host runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AddonError;
use crate::exports::KNOWN_EXPORTS;

/// Addon manifest parsed from `addon.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonManifest {
    pub addon: AddonMeta,
    #[serde(default)]
    pub exports: ExportsConfig,
}

/// Addon metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonMeta {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub min_host_version: Option<String>,
}

/// Exports section: the operation names the addon declares to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportsConfig {
    #[serde(default)]
    pub names: Vec<String>,
}

// ─── Validation helpers ─────────────────────────────────────────────

/// Validate an addon name against `^[a-z][a-z0-9-]{1,63}$`.
///
/// The name must start with a lowercase ASCII letter, followed by 1-63
/// characters that are lowercase ASCII letters, digits, or hyphens.
/// Total length: 2-64 characters.
fn validate_addon_name(name: &str) -> Result<(), AddonError> {
    let len = name.len();
    if !(2..=64).contains(&len) {
        return Err(AddonError::InvalidManifest(format!(
            "addon name must be 2-64 characters, got {len}"
        )));
    }

    let mut chars = name.chars();

    // First character must be a lowercase ASCII letter
    let first = chars.next().unwrap();
    if !first.is_ascii_lowercase() {
        return Err(AddonError::InvalidManifest(format!(
            "addon name must start with a lowercase letter, got '{first}'"
        )));
    }

    // Remaining characters must be lowercase letters, digits, or hyphens
    for ch in chars {
        if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() && ch != '-' {
            return Err(AddonError::InvalidManifest(format!(
                "addon name contains invalid character '{ch}'"
            )));
        }
    }

    Ok(())
}

/// Validate a version string as semver.
fn validate_semver(value: &str, field_name: &str) -> Result<(), AddonError> {
    semver::Version::parse(value).map_err(|_| {
        AddonError::InvalidManifest(format!("{field_name} is not valid semver: '{value}'"))
    })?;
    Ok(())
}

impl AddonManifest {
    /// Parse an addon manifest from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, AddonError> {
        let manifest: AddonManifest = toml::from_str(toml_str)?;
        Ok(manifest)
    }

    /// Read and parse an addon manifest from disk.
    pub fn load(path: &Path) -> Result<Self, AddonError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Validate all fields of a parsed manifest.
    pub fn validate(&self) -> Result<(), AddonError> {
        // ── Addon metadata ──────────────────────────────────────────
        validate_addon_name(&self.addon.name)?;

        validate_semver(&self.addon.version, "addon.version")?;

        let desc_len = self.addon.description.len();
        if desc_len == 0 || desc_len > 500 {
            return Err(AddonError::InvalidManifest(format!(
                "addon.description must be 1-500 characters, got {desc_len}"
            )));
        }

        if let Some(ref author) = self.addon.author {
            let len = author.len();
            if len == 0 || len > 255 {
                return Err(AddonError::InvalidManifest(format!(
                    "addon.author must be 1-255 characters, got {len}"
                )));
            }
        }

        if let Some(ref min_ver) = self.addon.min_host_version {
            validate_semver(min_ver, "addon.min_host_version")?;
        }

        // ── Exports ─────────────────────────────────────────────────
        for export in &self.exports.names {
            if !KNOWN_EXPORTS.contains(&export.as_str()) {
                return Err(AddonError::InvalidManifest(format!(
                    "unknown export '{export}'; known exports: {}",
                    KNOWN_EXPORTS.join(", ")
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate an addon manifest from a TOML string.
    pub fn parse_and_validate(toml_str: &str) -> Result<Self, AddonError> {
        let manifest = Self::parse(toml_str)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Exports declared by this manifest, falling back to every known
    /// export when the section is omitted.
    pub fn declared_exports(&self) -> Vec<String> {
        if self.exports.names.is_empty() {
            KNOWN_EXPORTS.iter().map(|e| e.to_string()).collect()
        } else {
            self.exports.names.clone()
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
