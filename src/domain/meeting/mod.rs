//! Meeting bounded context. The Meeting aggregate root is the consistency
//! boundary for all meeting-related data.

mod action_item;
mod entity;
mod events;
mod repository;
mod value_objects;

pub use action_item::{ActionItem, ActionItemId};
pub use entity::{Meeting, MeetingId};
pub use events::DomainEvent;
pub use repository::{ListFilter, MeetingRepository};
pub use value_objects::{
    Metadata, Participant, ParticipantRole, Source, Summary, SummaryKind, Transcript, Utterance,
};

#[cfg(test)]
pub use repository::MockMeetingRepository;
