use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::l10n::Language;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown theme {0:?}, expected one of \"light\" or \"dark\".")]
pub struct UnknownThemeError(String);

impl FromStr for Theme {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Light, Self::Dark]
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownThemeError(s.into()))
    }
}

/// Language and theme of a rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UiContext {
    pub language: Language,
    pub theme: Theme,
}

impl UiContext {
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Query string that selects this context, e.g. `lang=en&theme=light`.
    pub fn query(&self) -> String {
        format!("lang={}&theme={}", self.language.code(), self.theme.as_str())
    }

    /// The context after pressing the language toggle.
    pub fn toggled_language(mut self) -> Self {
        self.set_language(self.language.toggled());
        self
    }

    /// The context after pressing the theme toggle.
    pub fn toggled_theme(mut self) -> Self {
        self.set_theme(self.theme.toggled());
        self
    }
}
