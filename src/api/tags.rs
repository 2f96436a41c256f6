//! Purpose: Sender-side tags attached to a whisper, including emote ranges.
//! Exports: `Tags`, `EmoteSpan`.
//! Invariants: `emotes` and `badges` keep wire order.
//! Invariants: Emote indices are character offsets into the body; `end` is inclusive.

use crate::api::badge::{self, Badge};
use crate::api::options::{DisplayNameSource, ParseOptions};
use crate::core::error::Error;
use crate::json::field::Fields;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Tags {
    login: Option<String>,
    display_name: Option<String>,
    color: Option<String>,
    user_type: Option<String>,
    turbo: bool,
    emotes: Vec<EmoteSpan>,
    badges: Vec<Badge>,
}

impl Tags {
    pub(crate) fn from_fields(fields: &Fields<'_>, options: &ParseOptions) -> Result<Self, Error> {
        let login = fields.text("login");
        let display_name = match options.display_name_source {
            DisplayNameSource::Login => login.clone(),
            DisplayNameSource::DisplayName => fields.text("display_name"),
        };
        let turbo = fields.required_bool("turbo")?;
        let emotes = fields
            .objects("emotes", options.absent_arrays)?
            .iter()
            .map(EmoteSpan::from_fields)
            .collect::<Result<Vec<_>, _>>()?;
        let badges = fields
            .objects("badges", options.absent_arrays)?
            .iter()
            .map(Badge::from_fields)
            .collect();
        Ok(Self {
            login,
            display_name,
            color: fields.text("color"),
            user_type: fields.text("user_type"),
            turbo,
            emotes,
            badges,
        })
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// Mirrors `login` unless `DisplayNameSource::DisplayName` was requested.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn user_type(&self) -> Option<&str> {
        self.user_type.as_deref()
    }

    pub fn is_turbo(&self) -> bool {
        self.turbo
    }

    pub fn emotes(&self) -> &[EmoteSpan] {
        &self.emotes
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn has_badge(&self, id: &str) -> bool {
        badge::has_badge(&self.badges, id)
    }
}

/// A range of the whisper body rendered as an emote.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct EmoteSpan {
    id: u64,
    start: usize,
    end: usize,
}

impl EmoteSpan {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Result<Self, Error> {
        Ok(Self {
            id: fields.required_int("id")?,
            start: fields.required_int("start")?,
            end: fields.required_int("end")?,
        })
    }

    pub fn emote_id(&self) -> u64 {
        self.id
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Text of `body` covered by this span, or `None` if the span does not fit.
    pub fn slice<'b>(&self, body: &'b str) -> Option<&'b str> {
        if self.end < self.start {
            return None;
        }
        let len = (self.end - self.start).checked_add(1)?;
        let mut offsets = body.char_indices().map(|(offset, _)| offset);
        let from = offsets.nth(self.start)?;
        let to = match offsets.nth(len - 1) {
            Some(offset) => offset,
            None if body[from..].chars().count() == len => body.len(),
            None => return None,
        };
        Some(&body[from..to])
    }
}
