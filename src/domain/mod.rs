//! Domain layer - Core business logic and entities

pub mod error;
pub mod meeting;

pub use error::DomainError;
pub use meeting::{
    ActionItem, ActionItemId, DomainEvent, ListFilter, Meeting, MeetingId, MeetingRepository,
    Metadata, Participant, ParticipantRole, Source, Summary, SummaryKind, Transcript, Utterance,
};
