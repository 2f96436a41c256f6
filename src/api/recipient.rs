use crate::api::badge::{self, Badge};
use crate::api::options::ParseOptions;
use crate::core::error::Error;
use crate::json::field::Fields;
use serde::Serialize;

/// The user a whisper was delivered to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Recipient {
    id: u64,
    username: Option<String>,
    display_name: Option<String>,
    color: Option<String>,
    user_type: Option<String>,
    turbo: bool,
    badges: Vec<Badge>,
}

impl Recipient {
    pub(crate) fn from_fields(fields: &Fields<'_>, options: &ParseOptions) -> Result<Self, Error> {
        let id = fields.required_int("id")?;
        let turbo = fields.required_bool("turbo")?;
        let badges = fields
            .objects("badges", options.absent_arrays)?
            .iter()
            .map(Badge::from_fields)
            .collect();
        Ok(Self {
            id,
            username: fields.text("username"),
            display_name: fields.text("display_name"),
            color: fields.text("color"),
            user_type: fields.text("user_type"),
            turbo,
            badges,
        })
    }

    pub fn user_id(&self) -> u64 {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

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

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn has_badge(&self, id: &str) -> bool {
        badge::has_badge(&self.badges, id)
    }
}
