use std::sync::Arc;

use anyhow::Context;
use folio_templates_contracts::{Template, TemplateService, BASE_TEMPLATE, TEMPLATES};
use tera::Tera;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", BASE_TEMPLATE)
            .context("Failed to load base template")?;

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template)
                .with_context(|| format!("Failed to load template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        trace!(template = T::NAME, "render");
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use folio_demo::PORTFOLIO;
    use folio_models::{
        l10n::Language,
        notification::NotificationVariant,
        ui::{Theme, UiContext},
    };
    use folio_templates_contracts::{ContactFieldView, ContactFormView, IndexTemplate, ToastView};

    use super::*;

    #[test]
    fn index() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();
        let template = index_template(Language::En, "<script>alert(1)</script>");

        // Act
        let result = sut.render(&template);

        // Assert
        let html = result.unwrap();
        assert!(html.contains("<html lang=\"en\" class=\"light\">"));
        assert!(html.contains("Shyngys Baizhan"));
        assert!(html.contains("Send Message"));
        assert!(html.contains("Message Sent Successfully!"));
        assert!(html.contains("toast default"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains(r#"data-sending-label="Sending...""#));
        assert!(html.contains(r#"data-show-errors="true""#));
        assert!(html.contains(r#"data-validate-url="/api/contact/validate?lang=en""#));
        assert!(html.contains(r#"<script src="/app.js" defer></script>"#));
        assert!(html.contains("data-dismiss-toast"));
    }

    #[test]
    fn index_ru() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();
        let template = index_template(Language::Ru, "");

        // Act
        let result = sut.render(&template);

        // Assert
        let html = result.unwrap();
        assert!(html.contains("Шыңғыс Байжан"));
        assert!(html.contains("Все права защищены."));
        assert!(html.contains("Свяжитесь Со Мной"));
    }

    fn index_template(language: Language, name: &str) -> IndexTemplate {
        let ui = UiContext {
            language,
            theme: Theme::Light,
        };
        IndexTemplate {
            language,
            theme: ui.theme,
            query: ui.query(),
            toggle_language_query: ui.toggled_language().query(),
            toggle_theme_query: ui.toggled_theme().query(),
            portfolio: PORTFOLIO.localize(language),
            contact_form: ContactFormView {
                fields: vec![ContactFieldView {
                    name: "name".into(),
                    label: "Name".into(),
                    placeholder: "Your Name".into(),
                    value: name.into(),
                    error: Some("Name must be at least 2 characters.".into()),
                    multiline: false,
                }],
                submit_label: "Send Message".into(),
                sending_label: "Sending...".into(),
                submitting: false,
                show_errors: true,
            },
            toasts: vec![ToastView {
                id: 1,
                title: "Message Sent Successfully!".into(),
                description: "Thanks for reaching out. I'll get back to you soon.".into(),
                variant: NotificationVariant::Default,
                remaining_ms: 5000,
            }],
            year: 2025,
        }
    }
}
