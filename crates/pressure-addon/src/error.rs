//! Addon error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddonError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("missing argument: {0}")]
    MissingArgument(String),

    #[error("unknown export: {0}")]
    UnknownExport(String),

    #[error("addon is terminated")]
    Terminated,

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("semver error: {0}")]
    Semver(#[from] semver::Error),
}

impl AddonError {
    /// Stable kind tag used in host-visible error objects.
    pub fn kind(&self) -> &'static str {
        match self {
            AddonError::InvalidArgument(_) => "invalid_argument",
            AddonError::MissingArgument(_) => "missing_argument",
            AddonError::UnknownExport(_) => "unknown_export",
            AddonError::Terminated => "terminated",
            AddonError::InvalidManifest(_) => "invalid_manifest",
            AddonError::Internal(_) => "internal",
            AddonError::Io(_) => "io",
            AddonError::Serialization(_) => "serialization",
            AddonError::TomlParse(_) => "toml_parse",
            AddonError::Semver(_) => "semver",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ── Display messages ──────────────────────────────────────────────

    #[test]
    fn test_display_invalid_argument() {
        let err = AddonError::InvalidArgument("pressure must be a number".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: pressure must be a number"
        );
    }

    #[test]
    fn test_display_missing_argument() {
        let err = AddonError::MissingArgument("setPressure expects argument 0".into());
        assert_eq!(
            err.to_string(),
            "missing argument: setPressure expects argument 0"
        );
    }

    #[test]
    fn test_display_unknown_export() {
        let err = AddonError::UnknownExport("getVelocity".into());
        assert_eq!(err.to_string(), "unknown export: getVelocity");
    }

    #[test]
    fn test_display_terminated() {
        let err = AddonError::Terminated;
        assert_eq!(err.to_string(), "addon is terminated");
    }

    #[test]
    fn test_display_invalid_manifest() {
        let err = AddonError::InvalidManifest("bad version".into());
        assert_eq!(err.to_string(), "invalid manifest: bad version");
    }

    #[test]
    fn test_display_internal() {
        let err = AddonError::Internal("state lock poisoned".into());
        assert_eq!(err.to_string(), "internal error: state lock poisoned");
    }

    // ── From conversions ──────────────────────────────────────────────

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let err: AddonError = io_err.into();
        assert!(matches!(err, AddonError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("bad json{{{").unwrap_err();
        let err: AddonError = json_err.into();
        assert!(matches!(err, AddonError::Serialization(_)));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= bad").unwrap_err();
        let err: AddonError = toml_err.into();
        assert!(matches!(err, AddonError::TomlParse(_)));
    }

    #[test]
    fn test_from_semver_error() {
        let sv_err = "not.a.version".parse::<semver::Version>().unwrap_err();
        let err: AddonError = sv_err.into();
        assert!(matches!(err, AddonError::Semver(_)));
    }

    // ── Kind tags ─────────────────────────────────────────────────────

    #[test]
    fn test_kind_tags() {
        assert_eq!(AddonError::InvalidArgument("x".into()).kind(), "invalid_argument");
        assert_eq!(AddonError::MissingArgument("x".into()).kind(), "missing_argument");
        assert_eq!(AddonError::UnknownExport("x".into()).kind(), "unknown_export");
        assert_eq!(AddonError::Terminated.kind(), "terminated");
        assert_eq!(AddonError::InvalidManifest("x".into()).kind(), "invalid_manifest");
        assert_eq!(AddonError::Internal("x".into()).kind(), "internal");
    }

    // ── Debug impl ────────────────────────────────────────────────────

    #[test]
    fn test_debug_formatting() {
        let err = AddonError::UnknownExport("test".into());
        let debug = format!("{:?}", err);
        assert!(debug.contains("UnknownExport"));
        assert!(debug.contains("test"));
    }

    // ── Error trait source chain ──────────────────────────────────────

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AddonError = io_err.into();
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_string_variants() {
        use std::error::Error;
        let err = AddonError::InvalidArgument("not a number".into());
        assert!(err.source().is_none());
    }
}
