//! Purpose: Decode a PubSub whisper event into an immutable object graph.
//! Exports: `WhisperMessage`, `DataPayload`.
//! Role: Entry point used by the PubSub dispatcher for `whisper_*` topics.
//! Invariants: Construction either yields a complete graph or an `Error`; never a partial value.
//! Invariants: Fields are set once here and exposed read-only afterwards.
//! Invariants: Tracing events carry ids and error paths only, never message text.

use crate::api::options::ParseOptions;
use crate::api::recipient::Recipient;
use crate::api::tags::{EmoteSpan, Tags};
use crate::core::error::{Error, ErrorKind};
use crate::json::field::Fields;
use crate::json::parse;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WhisperMessage {
    #[serde(rename = "type")]
    message_type: String,
    raw_data: String,
    payload: DataPayload,
}

impl WhisperMessage {
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::parse_with(input, &ParseOptions::default())
    }

    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, Error> {
        let result = decode(input).and_then(|doc| Self::from_value(&doc, options));
        match &result {
            Ok(message) => tracing::trace!(
                id = message.payload.id,
                from_id = message.payload.from_id,
                "whisper decoded"
            ),
            Err(err) => tracing::debug!(
                kind = ?err.kind(),
                field = err.field().unwrap_or(""),
                "whisper decode failed"
            ),
        }
        result
    }

    /// Builds the graph from an already decoded document.
    pub fn from_value(doc: &Value, options: &ParseOptions) -> Result<Self, Error> {
        let root = Fields::root(doc)?;
        let message_type = root.required_text("type")?;
        let raw_data = root.required_text("data")?;
        let payload = DataPayload::from_fields(&root.required_object("data_object")?, options)?;
        Ok(Self {
            message_type,
            raw_data,
            payload,
        })
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// The `data` field as received, typically the event re-encoded as JSON text.
    pub fn raw_data(&self) -> &str {
        &self.raw_data
    }

    pub fn payload(&self) -> &DataPayload {
        &self.payload
    }
}

impl FromStr for WhisperMessage {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl TryFrom<&str> for WhisperMessage {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DataPayload {
    id: u64,
    thread_id: Option<String>,
    body: Option<String>,
    sent_ts: i64,
    from_id: u64,
    tags: Tags,
    recipient: Recipient,
    nonce: Option<String>,
}

impl DataPayload {
    fn from_fields(fields: &Fields<'_>, options: &ParseOptions) -> Result<Self, Error> {
        let id = fields.required_int("id")?;
        let thread_id = fields.text("thread_id");
        let body = fields.text("body");
        let sent_ts = fields.required_int("sent_ts")?;
        let from_id = fields.required_int("from_id")?;
        let tags = Tags::from_fields(&fields.required_object("tags")?, options)?;
        let recipient = Recipient::from_fields(&fields.required_object("recipient")?, options)?;
        Ok(Self {
            id,
            thread_id,
            body,
            sent_ts,
            from_id,
            tags,
            recipient,
            nonce: fields.text("nonce"),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn sent_at_epoch_ms(&self) -> i64 {
        self.sent_ts
    }

    pub fn sent_at(&self) -> Result<time::OffsetDateTime, Error> {
        let nanos = i128::from(self.sent_ts) * 1_000_000;
        time::OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|err| {
            Error::new(ErrorKind::InvalidFormat)
                .with_field("data_object.sent_ts")
                .with_message("timestamp out of range")
                .with_source(err)
        })
    }

    pub fn sent_at_rfc3339(&self) -> Result<String, Error> {
        use time::format_description::well_known::Rfc3339;
        self.sent_at()?.format(&Rfc3339).map_err(|err| {
            Error::new(ErrorKind::InvalidFormat)
                .with_field("data_object.sent_ts")
                .with_message("timestamp format failed")
                .with_source(err)
        })
    }

    pub fn from_user_id(&self) -> u64 {
        self.from_id
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    /// Body text covered by `span`; `None` without a body or for an out-of-range span.
    pub fn emote_text(&self, span: &EmoteSpan) -> Option<&str> {
        span.slice(self.body.as_deref()?)
    }
}

fn decode(input: &str) -> Result<Value, Error> {
    parse::from_str::<Value>(input).map_err(|err| {
        Error::new(ErrorKind::Parse)
            .with_message(parse::hint_for_error(&err, "whisper"))
            .with_category(parse::categorize_error(&err))
            .with_position(err.line(), err.column())
            .with_source(err)
    })
}
