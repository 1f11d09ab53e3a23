//! Wire types for the desktop app's cache file.
//!
//! The file is double-JSON encoded: the outer JSON has a `cache` field
//! containing a JSON string, and that string decodes to a [`CacheState`]
//! with documents, metadata, and transcripts.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Outermost structure of the cache file. The `cache` field is itself a
/// JSON-encoded string.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEnvelope {
    #[serde(default)]
    pub cache: String,
}

/// Decoded inner JSON from the cache envelope
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CacheState {
    #[serde(default)]
    pub state: CacheInner,
}

/// The three main collections in the cache
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CacheInner {
    #[serde(default)]
    pub documents: HashMap<String, CacheDocument>,
    #[serde(rename = "meetingsMetadata", default)]
    pub meetings_metadata: HashMap<String, CacheMeetingMeta>,
    #[serde(default)]
    pub transcripts: HashMap<String, CacheTranscript>,
}

/// A single meeting/note document in the cache
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub last_viewed_panel: Value,
    #[serde(default)]
    pub notes_prosemirror: Value,
}

/// Meeting metadata such as attendees and conference info
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheMeetingMeta {
    #[serde(default)]
    pub attendees: Vec<CacheAttendee>,
    #[serde(default)]
    pub organizer: Option<CacheAttendee>,
    #[serde(default)]
    pub conference: Option<CacheConference>,
}

/// A meeting participant as stored in the cache
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheAttendee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Conferencing platform info
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheConference {
    #[serde(rename = "type", default)]
    pub conference_type: String,
}

/// All transcript segments for a meeting.
///
/// The cache stores transcripts in two shapes:
///   - an array directly: `[{segment}, {segment}, ...]`
///   - an object with a segments field: `{"segments": [{segment}, ...]}`
///
/// The manual `Deserialize` impl accepts both; anything else decodes to
/// zero segments rather than failing the whole inner decode.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CacheTranscript {
    pub segments: Vec<CacheSegment>,
}

impl<'de> Deserialize<'de> for CacheTranscript {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default)]
            segments: Vec<CacheSegment>,
        }

        let value = Value::deserialize(deserializer)?;

        // Array shape first (the common case on disk)
        if let Ok(segments) = serde_json::from_value::<Vec<CacheSegment>>(value.clone()) {
            return Ok(Self { segments });
        }

        let segments = serde_json::from_value::<Wrapper>(value)
            .map(|w| w.segments)
            .unwrap_or_default();
        Ok(Self { segments })
    }
}

/// A single spoken segment in a transcript
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CacheSegment {
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub timestamp: String,
}
