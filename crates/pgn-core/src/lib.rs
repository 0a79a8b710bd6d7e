//! Byte-level PGN line helpers shared by the extraction tools.

pub mod header;

pub use header::{event_name, strip_newline, EVENT_PREFIX};
