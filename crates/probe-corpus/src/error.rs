//! Error types for the probe corpus generator
//!
//! Covers the three failure classes the pipeline distinguishes:
//! - I/O failures (propagated, never retried)
//! - invalid configuration (rejected before any file I/O)
//! - marker invariant violations (internal bugs, surfaced loudly)

use std::path::PathBuf;

/// Main corpus error type
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// File or directory I/O failed
    #[error("{action} failed for {path}: {source}")]
    Io {
        /// What the operation was doing ("create dir", "read", "write")
        action: &'static str,
        /// The path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration rejected at the boundary, before any file I/O
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Marker content violates an invariant that holds by construction
    ///
    /// Self-produced content always has matched START/END pairs with
    /// parseable ids; hitting this variant means a splicing or removal
    /// bug, not an accepted input state.
    #[error("marker invariant violated: {0}")]
    MarkerViolation(String),
}

impl CorpusError {
    /// Build an I/O error with its offending path attached
    #[inline]
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path_and_action() {
        let err = CorpusError::io(
            "write",
            "/tmp/out.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("write"));
        assert!(msg.contains("/tmp/out.md"));
    }

    #[test]
    fn invalid_config_is_descriptive() {
        let err = CorpusError::InvalidConfig("empty edit-count list".into());
        assert!(err.to_string().contains("empty edit-count list"));
    }
}
