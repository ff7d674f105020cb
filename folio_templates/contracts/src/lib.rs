use folio_models::{
    l10n::Language, notification::NotificationVariant, portfolio::PortfolioView, ui::Theme,
};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// A template with a name ending in `.html` is rendered with autoescaping.
pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    IndexTemplate("index.html"),
}

/// The portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexTemplate {
    pub language: Language,
    pub theme: Theme,
    /// Query string of the page itself, e.g. `lang=en&theme=light`.
    pub query: String,
    pub toggle_language_query: String,
    pub toggle_theme_query: String,
    pub portfolio: PortfolioView,
    pub contact_form: ContactFormView,
    pub toasts: Vec<ToastView>,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormView {
    pub fields: Vec<ContactFieldView>,
    pub submit_label: String,
    /// Label the page switches the submit button to when the form is sent.
    pub sending_label: String,
    pub submitting: bool,
    /// Whether edits are re-validated, which starts with the first submit.
    pub show_errors: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFieldView {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub error: Option<String>,
    pub multiline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    /// Milliseconds until the toast is dismissed.
    pub remaining_ms: u64,
}
