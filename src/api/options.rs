//! Purpose: Decode-time switches for the whisper model.
//! Exports: `ParseOptions`, `DisplayNameSource`, `AbsentArrays`.
//! Role: Let callers opt out of the historical wire mapping without forking the parser.
//! Invariants: `ParseOptions::default()` reproduces the historical mapping exactly.

/// Which wire field fills `Tags::display_name`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisplayNameSource {
    /// Copy `tags.login`. This is what existing consumers of the event observe.
    #[default]
    Login,
    /// Read `tags.display_name`.
    DisplayName,
}

/// How a missing or `null` `emotes` / `badges` array is treated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AbsentArrays {
    /// Fail with `ErrorKind::MissingField`.
    #[default]
    Reject,
    /// Treat as an empty array.
    Empty,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    pub display_name_source: DisplayNameSource,
    pub absent_arrays: AbsentArrays,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_name_source(mut self, source: DisplayNameSource) -> Self {
        self.display_name_source = source;
        self
    }

    pub fn with_absent_arrays(mut self, policy: AbsentArrays) -> Self {
        self.absent_arrays = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{AbsentArrays, DisplayNameSource, ParseOptions};

    #[test]
    fn defaults_keep_historical_mapping() {
        let options = ParseOptions::new();
        assert_eq!(options.display_name_source, DisplayNameSource::Login);
        assert_eq!(options.absent_arrays, AbsentArrays::Reject);
    }

    #[test]
    fn builders_override_each_switch() {
        let options = ParseOptions::new()
            .with_display_name_source(DisplayNameSource::DisplayName)
            .with_absent_arrays(AbsentArrays::Empty);
        assert_eq!(options.display_name_source, DisplayNameSource::DisplayName);
        assert_eq!(options.absent_arrays, AbsentArrays::Empty);
    }
}
