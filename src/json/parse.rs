//! Purpose: Provide the internal JSON decode entrypoint and failure classification.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `categorize_message`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Whisper decoding goes through `from_str`; nothing else calls serde_json directly.
//! Invariants: Category labels are stable; hints never echo the input payload.
//! Notes: Error mapping into `crate::Error` is done by callsites so field context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ParseFailureCategory {
    Syntax,
    Truncated,
    NumericRange,
    DepthLimit,
    Data,
    Io,
    Unknown,
}

impl ParseFailureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Eof => ParseFailureCategory::Truncated,
        Category::Io => ParseFailureCategory::Io,
        Category::Data => ParseFailureCategory::Data,
        Category::Syntax => match categorize_message(&err.to_string()) {
            ParseFailureCategory::Unknown => ParseFailureCategory::Syntax,
            refined => refined,
        },
    }
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if lower.contains("number out of range") {
        ParseFailureCategory::NumericRange
    } else if lower.contains("eof while parsing") {
        ParseFailureCategory::Truncated
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}",
        categorize_error(err).as_str()
    )
}
