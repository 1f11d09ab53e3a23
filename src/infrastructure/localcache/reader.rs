//! File I/O and double-JSON decoding for the cache file.

use std::path::{Path, PathBuf};

use super::error::{CacheError, DecodeStage};
use super::models::{CacheEnvelope, CacheState};

/// Reads and decodes the desktop app's cache file.
pub struct CacheReader {
    path: PathBuf,
}

impl CacheReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this reader is configured for.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and decodes the cache file.
    ///
    /// The file uses double-JSON encoding: the outer JSON has a `cache`
    /// field containing a JSON-encoded string that must be decoded a second
    /// time. No stage is retried and no partial state is returned.
    pub async fn read(&self) -> Result<CacheState, CacheError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(err) => return Err(CacheError::corrupt(DecodeStage::Read, err.to_string())),
        };

        // First decode: extract the "cache" JSON string
        let envelope: CacheEnvelope = serde_json::from_slice(&data)
            .map_err(|err| CacheError::corrupt(DecodeStage::OuterEnvelope, err.to_string()))?;
        if envelope.cache.is_empty() {
            return Err(CacheError::corrupt(
                DecodeStage::EmptyCacheField,
                "cache field is empty",
            ));
        }

        // Second decode: parse the inner JSON string
        let state: CacheState = serde_json::from_str(&envelope.cache)
            .map_err(|err| CacheError::corrupt(DecodeStage::InnerState, err.to_string()))?;

        Ok(state)
    }
}
