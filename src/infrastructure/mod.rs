//! Infrastructure layer - External data source implementations

pub mod localcache;
pub mod logging;
