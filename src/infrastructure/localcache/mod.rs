//! Local cache infrastructure: reads the desktop app's snapshot file and
//! serves it through the domain repository port.

mod error;
mod mapper;
mod models;
mod prosemirror;
mod reader;
mod repository;

pub use error::{CacheError, DecodeStage};
pub use models::{
    CacheAttendee, CacheConference, CacheDocument, CacheEnvelope, CacheInner, CacheMeetingMeta,
    CacheSegment, CacheState, CacheTranscript,
};
pub use prosemirror::plain_text;
pub use reader::CacheReader;
pub use repository::LocalCacheRepository;
