//! Read-side repository over the desktop app's local cache file.
//!
//! The snapshot is loaded lazily on first access and only replaced by an
//! explicit [`sync`](MeetingRepository::sync), which performs a forced full
//! reload. All filtering is done in memory.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::{
    ActionItem, DomainError, DomainEvent, ListFilter, Meeting, MeetingId, MeetingRepository,
    SummaryKind, Transcript,
};

use super::mapper::{map_document_to_domain, map_transcript_to_domain};
use super::models::{CacheMeetingMeta, CacheState, CacheTranscript};
use super::prosemirror;
use super::reader::CacheReader;

struct Inner {
    state: Option<CacheState>,
    /// Document id → last observed updated_at, wholesale-replaced on every
    /// sync. Injectable so restart behavior is the caller's choice.
    sync_state: HashMap<String, String>,
}

/// [`MeetingRepository`] implementation backed by the local cache file.
pub struct LocalCacheRepository {
    reader: CacheReader,
    inner: RwLock<Inner>,
}

impl LocalCacheRepository {
    pub fn new(reader: CacheReader) -> Self {
        Self {
            reader,
            inner: RwLock::new(Inner {
                state: None,
                sync_state: HashMap::new(),
            }),
        }
    }

    /// Seeds the change-tracking map, e.g. from a persisted snapshot, so a
    /// restart does not replay every document as newly created.
    pub fn with_sync_state(self, sync_state: HashMap<String, String>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: None,
                sync_state,
            }),
            ..self
        }
    }

    /// Returns a copy of the current change-tracking map for persistence.
    pub async fn sync_state(&self) -> HashMap<String, String> {
        self.inner.read().await.sync_state.clone()
    }

    /// Loads the snapshot once; subsequent calls never re-check the file.
    async fn ensure_loaded(&self) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if inner.state.is_none() {
            inner.state = Some(self.reader.read().await?);
        }
        Ok(())
    }

    fn matches_filter(meeting: &Meeting, filter: &ListFilter) -> bool {
        if let Some(since) = filter.since {
            if meeting.datetime() < since {
                return false;
            }
        }
        if let Some(until) = filter.until {
            if meeting.datetime() > until {
                return false;
            }
        }
        if let Some(source) = filter.source {
            if meeting.source() != source {
                return false;
            }
        }
        if let Some(participant) = &filter.participant {
            let participant = participant.to_lowercase();
            let found = meeting.participants().iter().any(|p| {
                p.name().to_lowercase().contains(&participant)
                    || p.email().to_lowercase().contains(&participant)
            });
            if !found {
                return false;
            }
        }
        if let Some(query) = &filter.query {
            let query = query.to_lowercase();
            if !meeting.title().to_lowercase().contains(&query) {
                return false;
            }
        }
        true
    }

    /// Sorts newest first, then applies offset and limit.
    fn sort_and_paginate(mut meetings: Vec<Meeting>, filter: &ListFilter) -> Vec<Meeting> {
        meetings.sort_by(|a, b| b.datetime().cmp(&a.datetime()));

        if filter.offset >= meetings.len() {
            return Vec::new();
        }
        if filter.offset > 0 {
            meetings.drain(..filter.offset);
        }
        if filter.limit > 0 && filter.limit < meetings.len() {
            meetings.truncate(filter.limit);
        }
        meetings
    }

    fn meta_for<'a>(state: &'a CacheState, id: &str) -> Option<&'a CacheMeetingMeta> {
        state.state.meetings_metadata.get(id)
    }

    fn transcript_contains(transcript: &CacheTranscript, query_lower: &str) -> bool {
        transcript
            .segments
            .iter()
            .any(|seg| seg.text.to_lowercase().contains(query_lower))
    }
}

#[async_trait]
impl MeetingRepository for LocalCacheRepository {
    async fn find_by_id(&self, id: &MeetingId) -> Result<Meeting, DomainError> {
        self.ensure_loaded().await?;

        let inner = self.inner.read().await;
        let state = inner.state.as_ref().expect("snapshot loaded");

        let doc = state
            .state
            .documents
            .get(id.as_str())
            .ok_or_else(|| DomainError::meeting_not_found(id.as_str()))?;

        let mut meeting = map_document_to_domain(doc, Self::meta_for(state, id.as_str()))?;

        // Unlike list, always attach the transcript here; listing many
        // records would pay an N+1 attachment cost.
        if let Some(transcript) = state.state.transcripts.get(id.as_str()) {
            if let Some(transcript) = map_transcript_to_domain(id.as_str(), transcript) {
                meeting.attach_transcript(transcript);
                meeting.clear_domain_events();
            }
        }

        Ok(meeting)
    }

    async fn list(&self, filter: &ListFilter) -> Result<Vec<Meeting>, DomainError> {
        self.ensure_loaded().await?;

        let inner = self.inner.read().await;
        let state = inner.state.as_ref().expect("snapshot loaded");

        let mut meetings = Vec::new();
        for (id, doc) in &state.state.documents {
            let meeting = match map_document_to_domain(doc, Self::meta_for(state, id)) {
                Ok(meeting) => meeting,
                Err(err) => {
                    warn!(document_id = %id, error = %err, "skipping invalid cache document");
                    continue;
                }
            };

            if Self::matches_filter(&meeting, filter) {
                meetings.push(meeting);
            }
        }

        Ok(Self::sort_and_paginate(meetings, filter))
    }

    async fn get_transcript(&self, id: &MeetingId) -> Result<Transcript, DomainError> {
        self.ensure_loaded().await?;

        let inner = self.inner.read().await;
        let state = inner.state.as_ref().expect("snapshot loaded");

        if !state.state.documents.contains_key(id.as_str()) {
            return Err(DomainError::meeting_not_found(id.as_str()));
        }

        // A missing entry and an entry with zero segments are
        // indistinguishable to the caller.
        state
            .state
            .transcripts
            .get(id.as_str())
            .and_then(|transcript| map_transcript_to_domain(id.as_str(), transcript))
            .ok_or_else(|| DomainError::transcript_not_ready(id.as_str()))
    }

    async fn search_transcripts(
        &self,
        query: &str,
        filter: &ListFilter,
    ) -> Result<Vec<Meeting>, DomainError> {
        self.ensure_loaded().await?;

        let inner = self.inner.read().await;
        let state = inner.state.as_ref().expect("snapshot loaded");

        let query_lower = query.to_lowercase();
        let mut meetings = Vec::new();

        for (id, doc) in &state.state.documents {
            let meeting = match map_document_to_domain(doc, Self::meta_for(state, id)) {
                Ok(meeting) => meeting,
                Err(err) => {
                    warn!(document_id = %id, error = %err, "skipping invalid cache document");
                    continue;
                }
            };

            if !Self::matches_filter(&meeting, filter) {
                continue;
            }

            // First match wins: title, then transcript text, then notes
            if doc.title.to_lowercase().contains(&query_lower) {
                meetings.push(meeting);
                continue;
            }

            if let Some(transcript) = state.state.transcripts.get(id) {
                if Self::transcript_contains(transcript, &query_lower) {
                    meetings.push(meeting);
                    continue;
                }
            }

            if !doc.notes_prosemirror.is_null() {
                let notes = prosemirror::plain_text(&doc.notes_prosemirror);
                if notes.to_lowercase().contains(&query_lower) {
                    meetings.push(meeting);
                }
            }
        }

        Ok(Self::sort_and_paginate(meetings, filter))
    }

    async fn get_action_items(&self, _id: &MeetingId) -> Result<Vec<ActionItem>, DomainError> {
        // Action items are not stored in the local cache file.
        Ok(Vec::new())
    }

    async fn sync(&self, since: Option<DateTime<Utc>>) -> Result<Vec<DomainEvent>, DomainError> {
        let mut inner = self.inner.write().await;

        // Force a full reload, bypassing the lazy-load cache
        let state = self.reader.read().await?;

        let mut events = Vec::new();
        let mut current: HashMap<String, String> =
            HashMap::with_capacity(state.state.documents.len());

        for (id, doc) in &state.state.documents {
            current.insert(id.clone(), doc.updated_at.clone());

            let created_at = DateTime::parse_from_rfc3339(&doc.created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());

            // Documents older than the cutoff only get update detection
            if let Some(since) = since {
                if created_at < since {
                    let changed = match inner.sync_state.get(id) {
                        Some(prev_updated_at) => prev_updated_at != &doc.updated_at,
                        None => true,
                    };
                    if changed {
                        events.push(DomainEvent::summary_updated(
                            MeetingId::new(id.as_str()),
                            SummaryKind::Auto,
                        ));
                    }
                    continue;
                }
            }

            if !inner.sync_state.contains_key(id) {
                events.push(DomainEvent::meeting_created(
                    MeetingId::new(id.as_str()),
                    doc.title.as_str(),
                    created_at,
                ));
            }
        }

        inner.state = Some(state);
        inner.sync_state = current;

        Ok(events)
    }
}
