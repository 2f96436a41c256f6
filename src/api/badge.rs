use crate::json::field::Fields;
use serde::Serialize;

/// A badge (subscriber, moderator, ...) shown next to a user.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct Badge {
    id: Option<String>,
    version: Option<String>,
}

impl Badge {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            id: fields.text("id"),
            version: fields.text("version"),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

pub(crate) fn has_badge(badges: &[Badge], id: &str) -> bool {
    badges.iter().any(|badge| badge.id() == Some(id))
}
