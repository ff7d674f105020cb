use std::sync::LazyLock;

use folio_models::{
    contact::{ContactFormInput, ContactMessage},
    portfolio::Portfolio,
};

pub const SENDER_NAME: &str = "Portfolio Contact Form";

pub static CONTACT_FORM_INPUT: LazyLock<ContactFormInput> = LazyLock::new(|| ContactFormInput {
    name: "Max Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    subject: "Project inquiry".into(),
    message: "Hi! I would like to talk about a project.".into(),
});

pub static INVALID_CONTACT_FORM_INPUT: LazyLock<ContactFormInput> =
    LazyLock::new(|| ContactFormInput {
        name: "M".into(),
        email: "max.mustermann".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
    });

pub static CONTACT_MESSAGE: LazyLock<ContactMessage> =
    LazyLock::new(|| CONTACT_FORM_INPUT.validate().unwrap());

pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| toml::from_str(folio_assets::CONTENT_TOML).unwrap());
