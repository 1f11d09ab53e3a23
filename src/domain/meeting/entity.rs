//! The Meeting aggregate root.
//!
//! All mutations go through the aggregate to enforce invariants. Domain
//! events are collected on the aggregate and can be drained after
//! persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

use super::{
    ActionItem, DomainEvent, Metadata, Participant, Source, Summary, SummaryKind, Transcript,
};

/// Unique identifier for a meeting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(String);

impl MeetingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MeetingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MeetingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Aggregate root for meeting data
#[derive(Debug, Clone)]
pub struct Meeting {
    id: MeetingId,
    title: String,
    datetime: DateTime<Utc>,
    source: Source,
    participants: Vec<Participant>,
    transcript: Option<Transcript>,
    summary: Option<Summary>,
    action_items: Vec<ActionItem>,
    metadata: Metadata,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Meeting {
    /// Constructs a valid Meeting aggregate, enforcing all creation
    /// invariants, and records a `MeetingCreated` event.
    pub fn new(
        id: MeetingId,
        title: impl Into<String>,
        datetime: DateTime<Utc>,
        source: Source,
        participants: Vec<Participant>,
    ) -> Result<Self, DomainError> {
        let title = title.into();

        if id.is_empty() {
            return Err(DomainError::validation("meeting id must not be empty"));
        }
        if title.is_empty() {
            return Err(DomainError::validation("meeting title must not be empty"));
        }
        if datetime == DateTime::<Utc>::MIN_UTC {
            return Err(DomainError::validation("meeting datetime must be set"));
        }

        let now = Utc::now();
        let created = DomainEvent::meeting_created(id.clone(), title.clone(), datetime);

        Ok(Self {
            id,
            title,
            datetime,
            source,
            participants,
            transcript: None,
            summary: None,
            action_items: Vec::new(),
            metadata: Metadata::default(),
            created_at: now,
            updated_at: now,
            events: vec![created],
        })
    }

    pub fn id(&self) -> &MeetingId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.datetime
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn action_items(&self) -> &[ActionItem] {
        &self.action_items
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the transcript and raises a `TranscriptUpdated` event.
    pub fn attach_transcript(&mut self, transcript: Transcript) -> DomainEvent {
        let event =
            DomainEvent::transcript_updated(self.id.clone(), transcript.utterances().len());
        self.transcript = Some(transcript);
        self.updated_at = Utc::now();
        self.events.push(event.clone());
        event
    }

    /// Sets the summary and raises a `SummaryUpdated` event.
    pub fn attach_summary(&mut self, summary: Summary) -> DomainEvent {
        let event = DomainEvent::summary_updated(self.id.clone(), summary.kind());
        self.summary = Some(summary);
        self.updated_at = Utc::now();
        self.events.push(event.clone());
        event
    }

    /// Appends an action item to the aggregate.
    pub fn add_action_item(&mut self, item: ActionItem) {
        self.action_items.push(item);
        self.updated_at = Utc::now();
    }

    /// Replaces the meeting metadata.
    pub fn set_metadata(&mut self, metadata: Metadata) {
        self.metadata = metadata;
        self.updated_at = Utc::now();
    }

    /// Returns the uncommitted domain events.
    pub fn domain_events(&self) -> &[DomainEvent] {
        &self.events
    }

    /// Removes all collected events (call after dispatching, or after
    /// reconstructing from a data source).
    pub fn clear_domain_events(&mut self) {
        self.events.clear();
    }

    /// Convenience for reconstruction code paths: attach an auto summary
    /// built from rendered notes text.
    pub fn auto_summary(&self, content: impl Into<String>) -> Summary {
        Summary::new(self.id.clone(), content, SummaryKind::Auto)
    }
}
