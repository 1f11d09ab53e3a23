//! Read-side repository port for the meeting bounded context.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;

use super::{ActionItem, DomainEvent, Meeting, MeetingId, Source, Transcript};

#[cfg(test)]
use mockall::automock;

/// Criteria for querying meetings. Datetime bounds are inclusive; text
/// matches are case-insensitive substring matches.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Inclusive lower bound on meeting datetime
    pub since: Option<DateTime<Utc>>,
    /// Inclusive upper bound on meeting datetime
    pub until: Option<DateTime<Utc>>,
    /// Exact source match
    pub source: Option<Source>,
    /// Matched against participant name or email
    pub participant: Option<String>,
    /// Matched against the meeting title only
    pub query: Option<String>,
    /// Maximum number of results (0 means no limit)
    pub limit: usize,
    /// Number of results to skip
    pub offset: usize,
}

/// Read-side repository port for meetings. Defined in the domain layer,
/// implemented in infrastructure.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Finds a single meeting by id, with its transcript attached when one
    /// exists.
    async fn find_by_id(&self, id: &MeetingId) -> Result<Meeting, DomainError>;

    /// Lists meetings matching the filter, newest first.
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Meeting>, DomainError>;

    /// Returns the transcript for a meeting, or `TranscriptNotReady` when
    /// none is available yet.
    async fn get_transcript(&self, id: &MeetingId) -> Result<Transcript, DomainError>;

    /// Full-text search across titles, transcript segments, and notes.
    async fn search_transcripts(
        &self,
        query: &str,
        filter: &ListFilter,
    ) -> Result<Vec<Meeting>, DomainError>;

    /// Returns the action items recorded for a meeting.
    async fn get_action_items(&self, id: &MeetingId) -> Result<Vec<ActionItem>, DomainError>;

    /// Reconciles the repository against its data source and returns the
    /// domain events synthesized from the differences.
    async fn sync(&self, since: Option<DateTime<Utc>>) -> Result<Vec<DomainEvent>, DomainError>;
}
