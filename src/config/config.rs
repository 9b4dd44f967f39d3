use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error;

use crate::errors::CodecError;

// -----------------------------------------------------------------------------
// ----- Constants -------------------------------------------------------------

const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

// -----------------------------------------------------------------------------
// ----- CodecConfig -----------------------------------------------------------

/// Limits applied while framing backend messages.
///
/// ```toml
/// max_payload_len = 1048576
/// initial_buffer_capacity = 16384
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Largest payload accepted from a peer. `None` means unbounded.
    pub max_payload_len: Option<usize>,

    /// Starting capacity of the incremental decoder's buffer.
    pub initial_buffer_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_len: None,
            initial_buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- CodecConfig: Static ---------------------------------------------------

impl CodecConfig {
    pub fn from_file(path: &Path) -> Result<CodecConfig, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<CodecConfig, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Toml { source: e })
    }
}

// -----------------------------------------------------------------------------
// ----- CodecConfig: Builder --------------------------------------------------

impl CodecConfig {
    pub fn with_max_payload_len(mut self, limit: usize) -> Self {
        self.max_payload_len = Some(limit);
        self
    }

    pub fn with_initial_buffer_capacity(mut self, capacity: usize) -> Self {
        self.initial_buffer_capacity = capacity;
        self
    }
}

// -----------------------------------------------------------------------------
// ----- CodecConfig: Public ---------------------------------------------------

impl CodecConfig {
    #[inline]
    pub fn check_payload_len(&self, len: usize) -> Result<(), CodecError> {
        match self.max_payload_len {
            Some(limit) if len > limit => Err(CodecError::overflow("payload", len, limit)),
            _ => Ok(()),
        }
    }
}

// -----------------------------------------------------------------------------
// ----- Errors ----------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read error for {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("toml parse error: {source}")]
    Toml { source: toml::de::Error },
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        let cfg = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, CodecConfig::default());
        assert_eq!(cfg.max_payload_len, None);
        assert_eq!(cfg.initial_buffer_capacity, 8 * 1024);
    }

    #[test]
    fn parses_limits() {
        let cfg = CodecConfig::from_toml_str(
            "max_payload_len = 1024\ninitial_buffer_capacity = 64\n",
        )
        .unwrap();
        assert_eq!(cfg.max_payload_len, Some(1024));
        assert_eq!(cfg.initial_buffer_capacity, 64);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = CodecConfig::from_toml_str("max_len = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_payload_len = 4096").unwrap();

        let cfg = CodecConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.max_payload_len, Some(4096));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CodecConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("here.toml")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn payload_limit() {
        let cfg = CodecConfig::default().with_max_payload_len(10);
        assert!(cfg.check_payload_len(10).is_ok());
        assert!(matches!(
            cfg.check_payload_len(11),
            Err(CodecError::Overflow { len: 11, limit: 10, .. })
        ));
        assert!(CodecConfig::default().check_payload_len(usize::MAX).is_ok());
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
