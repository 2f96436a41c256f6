//! Purpose: Single error type for every whisper decode failure.
//! Exports: `Error`, `ErrorKind`.
//! Role: Callers branch on `kind()`; `field()` names the offending wire path.
//! Invariants: Errors are built once and never mutated after being returned.
//! Invariants: Messages never embed payload text (bodies, logins).
use crate::json::parse::ParseFailureCategory;
use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Input is not a JSON document.
    Parse,
    /// A required field is absent or `null`.
    MissingField,
    /// A field is present but has the wrong shape or cannot be converted.
    InvalidFormat,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    field: Option<String>,
    message: Option<String>,
    category: Option<ParseFailureCategory>,
    position: Option<(usize, usize)>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            field: None,
            message: None,
            category: None,
            position: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Dotted wire path of the failing field, e.g. `data_object.tags.turbo`.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn category(&self) -> Option<ParseFailureCategory> {
        self.category
    }

    /// One-based `(line, column)` reported by the decoder.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.position
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_category(mut self, category: ParseFailureCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.position = Some((line, column));
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField).with_field(field)
    }

    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat)
            .with_field(field)
            .with_message(message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(field) = &self.field {
            write!(f, ": {field}")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some((line, column)) = self.position {
            write!(f, " (line: {line}, column: {column})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
