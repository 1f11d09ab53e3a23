//! Infrastructure-level errors for the local cache. These are mapped onto
//! the domain error taxonomy at the repository boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Which decoding stage failed when reading the cache file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Reading the file from disk
    Read,
    /// Decoding the outer `{"cache": "..."}` envelope
    OuterEnvelope,
    /// The `cache` field was present but empty
    EmptyCacheField,
    /// Decoding the inner JSON string into the state tree
    InnerState,
}

impl DecodeStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::OuterEnvelope => "outer envelope",
            Self::EmptyCacheField => "empty cache field",
            Self::InnerState => "inner state",
        }
    }
}

impl std::fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors produced by [`CacheReader`](super::CacheReader)
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cache file is corrupt or unreadable ({stage}): {message}")]
    Corrupt { stage: DecodeStage, message: String },
}

impl CacheError {
    pub fn corrupt(stage: DecodeStage, message: impl Into<String>) -> Self {
        Self::Corrupt {
            stage,
            message: message.into(),
        }
    }
}

impl From<CacheError> for crate::domain::DomainError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::NotFound { path } => {
                Self::source_not_found(path.display().to_string())
            }
            CacheError::Corrupt { stage, message } => Self::source_corrupt(stage.as_str(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_maps_to_source_not_found() {
        let err = CacheError::NotFound {
            path: PathBuf::from("/tmp/cache-v3.json"),
        };
        let domain: DomainError = err.into();
        assert!(matches!(domain, DomainError::SourceNotFound { .. }));
    }

    #[test]
    fn test_corrupt_maps_to_source_corrupt_with_stage() {
        let err = CacheError::corrupt(DecodeStage::OuterEnvelope, "unexpected token");
        let domain: DomainError = err.into();
        match domain {
            DomainError::SourceCorrupt { stage, .. } => assert_eq!(stage, "outer envelope"),
            other => panic!("expected SourceCorrupt, got {other:?}"),
        }
    }
}
