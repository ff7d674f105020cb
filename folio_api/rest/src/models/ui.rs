use folio_models::{l10n::Language, ui::UiContext};
use serde::Deserialize;

/// Language and theme selected in the query string. Unknown values are
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ApiUiQuery {
    pub lang: Option<String>,
    pub theme: Option<String>,
}

impl ApiUiQuery {
    pub fn resolve(&self, default: UiContext) -> UiContext {
        UiContext {
            language: self.language(default.language),
            theme: self
                .theme
                .as_deref()
                .and_then(|theme| theme.parse().ok())
                .unwrap_or(default.theme),
        }
    }

    pub fn language(&self, default: Language) -> Language {
        self.lang
            .as_deref()
            .and_then(|lang| lang.parse().ok())
            .unwrap_or(default)
    }
}
