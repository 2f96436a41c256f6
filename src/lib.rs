//! Purpose: Typed, read-only model of PubSub whisper (direct message) events.
//! Exports: `api` (message graph, options, errors) plus top-level re-exports.
//! Role: Library used by PubSub dispatchers; owns no transport or I/O.
//! Invariants: Parsing is pure and synchronous; parsed values are immutable.
//! Invariants: `core` holds the error model; `json` is the only serde_json seam.
pub mod api;
pub mod core;
pub(crate) mod json;

pub use api::{
    AbsentArrays, Badge, DataPayload, DisplayNameSource, EmoteSpan, Error, ErrorKind,
    ParseFailureCategory, ParseOptions, Recipient, Tags, WhisperMessage,
};
