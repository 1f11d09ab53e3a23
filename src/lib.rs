//! Meeting Notes Gateway
//!
//! Exposes a third-party meeting-notes desktop application's data as a
//! structured, queryable domain model:
//! - A meeting bounded context (aggregate, value objects, domain events)
//! - A read-side repository port with filterable, paginated queries
//! - A local cache implementation that decodes the app's double-encoded
//!   JSON snapshot file through an anti-corruption layer and synthesizes
//!   change events across repeated syncs

pub mod domain;
pub mod infrastructure;

pub use domain::{
    DomainError, DomainEvent, ListFilter, Meeting, MeetingId, MeetingRepository, Participant,
    ParticipantRole, Source, Summary, SummaryKind, Transcript, Utterance,
};
pub use infrastructure::localcache::{CacheReader, LocalCacheRepository};
