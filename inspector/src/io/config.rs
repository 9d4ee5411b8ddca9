//! Optional `link-inspect` configuration (TOML).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::InspectError;
use crate::report::OutputFormat;

/// Settings that rarely change between invocations. Command-line flags take
/// precedence over file values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    /// Refuse to read link files larger than this many bytes.
    pub max_record_bytes: u64,

    /// Rendering used when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_record_bytes: 16 * 1024 * 1024,
            format: OutputFormat::Text,
        }
    }
}

impl InspectConfig {
    pub fn validate(&self) -> Result<(), InspectError> {
        if self.max_record_bytes == 0 {
            return Err(InspectError::Config {
                reason: "max_record_bytes must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Load config from `path`, or defaults when no path is given.
///
/// An explicitly named file that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<InspectConfig, InspectError> {
    let Some(path) = path else {
        let cfg = InspectConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    };
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path).map_err(|err| InspectError::Config {
        reason: format!("read {}: {err}", path.display()),
    })?;
    let cfg: InspectConfig = toml::from_str(&contents).map_err(|err| InspectError::Config {
        reason: format!("parse {}: {err}", path.display()),
    })?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_returns_default() {
        let cfg = load_config(None).expect("load");
        assert_eq!(cfg, InspectConfig::default());
    }

    #[test]
    fn explicit_missing_path_is_config_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_config(Some(&temp.path().join("missing.toml"))).expect_err("missing");
        assert!(matches!(err, InspectError::Config { .. }));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inspect.toml");
        fs::write(&path, "format = \"json\"\n").expect("write");
        let cfg = load_config(Some(&path)).expect("load");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(
            cfg.max_record_bytes,
            InspectConfig::default().max_record_bytes
        );
    }

    #[test]
    fn zero_limit_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inspect.toml");
        fs::write(&path, "max_record_bytes = 0\n").expect("write");
        let err = load_config(Some(&path)).expect_err("invalid");
        assert_eq!(
            err,
            InspectError::Config {
                reason: "max_record_bytes must be > 0".to_string()
            }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inspect.toml");
        fs::write(&path, "colour = true\n").expect("write");
        let err = load_config(Some(&path)).expect_err("unknown key");
        assert!(err.to_string().contains("parse"));
    }
}
