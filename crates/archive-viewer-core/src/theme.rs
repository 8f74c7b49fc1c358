//! Display theme preference.
//!
//! The only state persisted across sessions. The shell reads the stored
//! value once at startup and writes it back only when the user toggles.

use std::fmt;

/// Light or dark display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation (`"light"` or `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything else is treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme matching the platform's color scheme.
    pub fn ambient(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Startup theme: the stored preference if valid, else the platform's
    /// ambient color scheme.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(Self::parse)
            .unwrap_or_else(|| Self::ambient(prefers_dark))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
