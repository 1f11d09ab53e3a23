//! Translates cache wire types into domain types.
//!
//! This is the anti-corruption layer: the cache file's structure never
//! leaks into the domain model, and every mapped aggregate re-runs the
//! same validations a fresh construction would.

use chrono::{DateTime, Utc};

use crate::domain::{
    DomainError, Meeting, MeetingId, Participant, ParticipantRole, Source, Transcript, Utterance,
};

use super::models::{CacheConference, CacheDocument, CacheMeetingMeta, CacheTranscript};
use super::prosemirror;

fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Maps a cache document (plus optional metadata) to a reconstructed
/// Meeting aggregate. The returned aggregate carries no pending domain
/// events; reconstruction is not creation.
pub fn map_document_to_domain(
    doc: &CacheDocument,
    meta: Option<&CacheMeetingMeta>,
) -> Result<Meeting, DomainError> {
    // Lossy but non-fatal: an unparsable created_at falls back to now
    let created_at = parse_rfc3339(&doc.created_at).unwrap_or_else(Utc::now);

    let mut source = Source::Other;
    let mut participants = Vec::new();

    if let Some(meta) = meta {
        source = map_conference_to_source(meta.conference.as_ref());

        if let Some(organizer) = &meta.organizer {
            if !organizer.name.is_empty() || !organizer.email.is_empty() {
                participants.push(Participant::new(
                    organizer.name.as_str(),
                    organizer.email.as_str(),
                    ParticipantRole::Host,
                ));
            }
        }

        for attendee in &meta.attendees {
            // Skip organizer to avoid a duplicate participant
            if meta
                .organizer
                .as_ref()
                .is_some_and(|o| o.name == attendee.name && o.email == attendee.email)
            {
                continue;
            }
            participants.push(Participant::new(
                attendee.name.as_str(),
                attendee.email.as_str(),
                ParticipantRole::Attendee,
            ));
        }
    }

    let mut meeting = Meeting::new(
        MeetingId::new(doc.id.as_str()),
        doc.title.as_str(),
        created_at,
        source,
        participants,
    )?;

    // Clear the creation event; this is reconstitution, not creation
    meeting.clear_domain_events();

    if !doc.notes_prosemirror.is_null() {
        let notes = prosemirror::plain_text(&doc.notes_prosemirror);
        if !notes.is_empty() {
            let summary = meeting.auto_summary(notes);
            meeting.attach_summary(summary);
            meeting.clear_domain_events();
        }
    }

    Ok(meeting)
}

/// Maps a cache transcript to the domain. A transcript with zero segments
/// maps to `None`; callers cannot distinguish it from a missing entry.
pub fn map_transcript_to_domain(meeting_id: &str, transcript: &CacheTranscript) -> Option<Transcript> {
    if transcript.segments.is_empty() {
        return None;
    }

    let utterances = transcript
        .segments
        .iter()
        .map(|seg| {
            // The cache never carries confidence scores
            let timestamp =
                parse_rfc3339(&seg.timestamp).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
            Utterance::new(seg.speaker.as_str(), seg.text.as_str(), timestamp, 0.0)
        })
        .collect();

    Some(Transcript::new(MeetingId::new(meeting_id), utterances))
}

/// Maps a conference descriptor to the closed source enumeration.
pub fn map_conference_to_source(conference: Option<&CacheConference>) -> Source {
    match conference {
        Some(conf) => match conf.conference_type.as_str() {
            "zoom" => Source::Zoom,
            "google_meet" => Source::GoogleMeet,
            "teams" => Source::Teams,
            _ => Source::Other,
        },
        None => Source::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::localcache::{CacheAttendee, CacheSegment};
    use serde_json::json;

    fn document(id: &str, title: &str) -> CacheDocument {
        CacheDocument {
            id: id.to_string(),
            title: title.to_string(),
            created_at: "2025-01-15T10:00:00Z".to_string(),
            updated_at: "2025-01-15T10:30:00Z".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_mapping_with_metadata() {
        let mut doc = document("test-id", "Test Meeting");
        doc.notes_prosemirror = json!({"type":"doc","content":[
            {"type":"paragraph","content":[{"type":"text","text":"Meeting notes here"}]}
        ]});

        let meta = CacheMeetingMeta {
            organizer: Some(CacheAttendee {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            }),
            attendees: vec![
                CacheAttendee {
                    name: "Alice".to_string(),
                    email: "alice@example.com".to_string(),
                },
                CacheAttendee {
                    name: "Bob".to_string(),
                    email: "bob@example.com".to_string(),
                },
            ],
            conference: Some(CacheConference {
                conference_type: "zoom".to_string(),
            }),
        };

        let meeting = map_document_to_domain(&doc, Some(&meta)).unwrap();

        assert_eq!(meeting.id().as_str(), "test-id");
        assert_eq!(meeting.title(), "Test Meeting");
        assert_eq!(meeting.source(), Source::Zoom);

        // Organizer deduplicated out of the attendee list
        let participants = meeting.participants();
        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0].role(), ParticipantRole::Host);
        assert_eq!(participants[0].name(), "Alice");
        assert_eq!(participants[1].role(), ParticipantRole::Attendee);
        assert_eq!(participants[1].name(), "Bob");

        let summary = meeting.summary().expect("summary should be attached");
        assert_eq!(summary.content(), "Meeting notes here");

        // Reconstitution must not produce domain events
        assert!(meeting.domain_events().is_empty());
    }

    #[test]
    fn test_no_metadata_defaults() {
        let doc = document("no-meta-id", "No Meta Meeting");
        let meeting = map_document_to_domain(&doc, None).unwrap();

        assert_eq!(meeting.source(), Source::Other);
        assert!(meeting.participants().is_empty());
        assert!(meeting.summary().is_none());
    }

    #[test]
    fn test_invalid_timestamp_uses_current_time() {
        let mut doc = document("bad-time-id", "Bad Time");
        doc.created_at = "not-a-date".to_string();

        let meeting = map_document_to_domain(&doc, None).unwrap();
        assert!(meeting.datetime() > DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let doc = document("empty-title", "");
        let result = map_document_to_domain(&doc, None);
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_unnamed_organizer_is_not_a_participant() {
        let doc = document("d-1", "Meeting");
        let meta = CacheMeetingMeta {
            organizer: Some(CacheAttendee::default()),
            ..Default::default()
        };

        let meeting = map_document_to_domain(&doc, Some(&meta)).unwrap();
        assert!(meeting.participants().is_empty());
    }

    #[test]
    fn test_transcript_maps_segments_to_utterances() {
        let transcript = CacheTranscript {
            segments: vec![
                CacheSegment {
                    speaker: "Alice".to_string(),
                    text: "Hello".to_string(),
                    timestamp: "2025-01-15T10:00:30Z".to_string(),
                    ..Default::default()
                },
                CacheSegment {
                    speaker: "Bob".to_string(),
                    text: "Hi there".to_string(),
                    timestamp: "2025-01-15T10:01:00Z".to_string(),
                    ..Default::default()
                },
            ],
        };

        let result = map_transcript_to_domain("meeting-id", &transcript).unwrap();

        let utterances = result.utterances();
        assert_eq!(utterances.len(), 2);
        assert_eq!(utterances[0].speaker(), "Alice");
        assert_eq!(utterances[0].confidence(), 0.0);
    }

    #[test]
    fn test_empty_transcript_maps_to_none() {
        let transcript = CacheTranscript { segments: vec![] };
        assert!(map_transcript_to_domain("meeting-id", &transcript).is_none());
    }

    #[test]
    fn test_bad_segment_timestamp_uses_epoch() {
        let transcript = CacheTranscript {
            segments: vec![CacheSegment {
                speaker: "Alice".to_string(),
                text: "Hello".to_string(),
                timestamp: "invalid".to_string(),
                ..Default::default()
            }],
        };

        let result = map_transcript_to_domain("meeting-id", &transcript).unwrap();
        assert_eq!(
            result.utterances()[0].timestamp(),
            DateTime::<Utc>::UNIX_EPOCH
        );
    }

    #[test]
    fn test_conference_to_source_mapping() {
        let conf = |t: &str| CacheConference {
            conference_type: t.to_string(),
        };

        assert_eq!(map_conference_to_source(None), Source::Other);
        assert_eq!(map_conference_to_source(Some(&conf("zoom"))), Source::Zoom);
        assert_eq!(
            map_conference_to_source(Some(&conf("google_meet"))),
            Source::GoogleMeet
        );
        assert_eq!(map_conference_to_source(Some(&conf("teams"))), Source::Teams);
        assert_eq!(map_conference_to_source(Some(&conf("unknown"))), Source::Other);
        assert_eq!(map_conference_to_source(Some(&conf(""))), Source::Other);
    }
}
