//! Light/dark theme preference model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color scheme applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// A stored preference string that is neither `"light"` nor `"dark"`.
/// Callers treat this the same as an absent preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme {0:?}")]
pub struct ThemeParseError(String);

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Theme implied by the OS `prefers-color-scheme` hint.
    #[must_use]
    pub const fn from_os_hint(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// A stored preference wins over the OS hint; an absent (or
    /// unreadable) preference falls back to the OS color scheme.
    #[must_use]
    pub const fn resolve(stored: Option<Self>, os_prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => theme,
            None => Self::from_os_hint(os_prefers_dark),
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
