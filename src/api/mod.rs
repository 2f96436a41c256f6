//! Purpose: Define the public Rust API for whisper events.
//! Exports: Message graph types, decode options, and the error model.
//! Role: Public, additive-only surface; hides the JSON field readers.
//! Invariants: Every public type is immutable once returned to the caller.

mod badge;
mod options;
mod recipient;
mod tags;
mod whisper;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::json::parse::ParseFailureCategory;
pub use badge::Badge;
pub use options::{AbsentArrays, DisplayNameSource, ParseOptions};
pub use recipient::Recipient;
pub use tags::{EmoteSpan, Tags};
pub use whisper::{DataPayload, WhisperMessage};
