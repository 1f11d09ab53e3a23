//! Immutable value objects for the meeting bounded context.
//!
//! Value objects are compared by their attribute values, never by identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::MeetingId;

/// Meeting platform origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Zoom,
    GoogleMeet,
    Teams,
    /// Catch-all for unknown or absent platform data
    #[default]
    Other,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zoom => "zoom",
            Self::GoogleMeet => "google_meet",
            Self::Teams => "teams",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A participant's role in a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Host,
    Attendee,
}

/// A meeting attendee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    email: String,
    role: ParticipantRole,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> ParticipantRole {
        self.role
    }
}

/// A single spoken segment within a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    speaker: String,
    text: String,
    timestamp: DateTime<Utc>,
    confidence: f64,
}

impl Utterance {
    pub fn new(
        speaker: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
        confidence: f64,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            timestamp,
            confidence,
        }
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Ordered utterances for a single meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    meeting_id: MeetingId,
    utterances: Vec<Utterance>,
}

impl Transcript {
    pub fn new(meeting_id: MeetingId, utterances: Vec<Utterance>) -> Self {
        Self {
            meeting_id,
            utterances,
        }
    }

    pub fn meeting_id(&self) -> &MeetingId {
        &self.meeting_id
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }
}

/// Distinguishes auto-generated from user-edited summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    Auto,
    UserEdited,
}

impl SummaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::UserEdited => "user_edited",
        }
    }
}

/// A meeting summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    meeting_id: MeetingId,
    content: String,
    kind: SummaryKind,
}

impl Summary {
    pub fn new(meeting_id: MeetingId, content: impl Into<String>, kind: SummaryKind) -> Self {
        Self {
            meeting_id,
            content: content.into(),
            kind,
        }
    }

    pub fn meeting_id(&self) -> &MeetingId {
        &self.meeting_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SummaryKind {
        self.kind
    }
}

/// Extensible meeting metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    tags: Vec<String>,
    links: Vec<String>,
    external_refs: HashMap<String, String>,
}

impl Metadata {
    pub fn new(
        tags: Vec<String>,
        links: Vec<String>,
        external_refs: HashMap<String, String>,
    ) -> Self {
        Self {
            tags,
            links,
            external_refs,
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn external_refs(&self) -> &HashMap<String, String> {
        &self.external_refs
    }
}
