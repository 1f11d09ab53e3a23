//! Domain events raised by the Meeting aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MeetingId, SummaryKind};

/// Events raised by the Meeting aggregate. Collected on the aggregate and
/// dispatched after persistence; reconstruction from a data source clears
/// them before the aggregate is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    MeetingCreated {
        meeting_id: MeetingId,
        title: String,
        datetime: DateTime<Utc>,
        occurred_at: DateTime<Utc>,
    },
    TranscriptUpdated {
        meeting_id: MeetingId,
        utterance_count: usize,
        occurred_at: DateTime<Utc>,
    },
    SummaryUpdated {
        meeting_id: MeetingId,
        kind: SummaryKind,
        occurred_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    pub fn meeting_created(
        meeting_id: MeetingId,
        title: impl Into<String>,
        datetime: DateTime<Utc>,
    ) -> Self {
        Self::MeetingCreated {
            meeting_id,
            title: title.into(),
            datetime,
            occurred_at: Utc::now(),
        }
    }

    pub fn transcript_updated(meeting_id: MeetingId, utterance_count: usize) -> Self {
        Self::TranscriptUpdated {
            meeting_id,
            utterance_count,
            occurred_at: Utc::now(),
        }
    }

    pub fn summary_updated(meeting_id: MeetingId, kind: SummaryKind) -> Self {
        Self::SummaryUpdated {
            meeting_id,
            kind,
            occurred_at: Utc::now(),
        }
    }

    pub fn event_name(&self) -> &'static str {
        match self {
            Self::MeetingCreated { .. } => "meeting.created",
            Self::TranscriptUpdated { .. } => "transcript.updated",
            Self::SummaryUpdated { .. } => "summary.updated",
        }
    }

    pub fn meeting_id(&self) -> &MeetingId {
        match self {
            Self::MeetingCreated { meeting_id, .. }
            | Self::TranscriptUpdated { meeting_id, .. }
            | Self::SummaryUpdated { meeting_id, .. } => meeting_id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::MeetingCreated { occurred_at, .. }
            | Self::TranscriptUpdated { occurred_at, .. }
            | Self::SummaryUpdated { occurred_at, .. } => *occurred_at,
        }
    }
}
