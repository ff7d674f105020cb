use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    email_address::EmailAddress,
    l10n::{Language, Localized},
    macros::nutype_string,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

nutype_string!(ContactMessageAuthorName(validate(len_char_min = 2)));
nutype_string!(ContactMessageSubject(validate(len_char_min = 3)));
nutype_string!(ContactMessageContent(validate(len_char_min = 10)));

/// The contents of the contact form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Checks every field and either builds the message or reports all
    /// violations at once.
    pub fn validate(&self) -> Result<ContactMessage, ContactValidationErrors> {
        let name = ContactMessageAuthorName::try_new(self.name.clone()).ok();
        let email = self.email.parse::<EmailAddress>().ok();
        let subject = ContactMessageSubject::try_new(self.subject.clone()).ok();
        let content = ContactMessageContent::try_new(self.message.clone()).ok();

        match (name, email, subject, content) {
            (Some(name), Some(email), Some(subject), Some(content)) => Ok(ContactMessage {
                author: ContactMessageAuthor { name, email },
                subject,
                content,
            }),
            (name, email, subject, content) => Err([
                (ContactField::Name, name.is_none()),
                (ContactField::Email, email.is_none()),
                (ContactField::Subject, subject.is_none()),
                (ContactField::Message, content.is_none()),
            ]
            .into_iter()
            .filter(|&(_, invalid)| invalid)
            .map(|(field, _)| (field, field.violation()))
            .collect()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        let label = match self {
            Self::Name => Localized::new("Name", "Имя"),
            Self::Email => Localized::new("Email", "Email"),
            Self::Subject => Localized::new("Subject", "Тема"),
            Self::Message => Localized::new("Message", "Сообщение"),
        };
        *label.get(language)
    }

    pub fn placeholder(self, language: Language) -> &'static str {
        let placeholder = match self {
            Self::Name => Localized::new("Your Name", "Ваше Имя"),
            Self::Email => Localized::new("Your Email", "Ваш Email"),
            Self::Subject => Localized::new("Subject", "Тема сообщения"),
            Self::Message => Localized::new("Your Message", "Ваше сообщение"),
        };
        *placeholder.get(language)
    }

    const fn violation(self) -> ContactFieldViolation {
        match self {
            Self::Name => ContactFieldViolation::NameTooShort,
            Self::Email => ContactFieldViolation::InvalidEmail,
            Self::Subject => ContactFieldViolation::SubjectTooShort,
            Self::Message => ContactFieldViolation::MessageTooShort,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactFieldViolation {
    NameTooShort,
    InvalidEmail,
    SubjectTooShort,
    MessageTooShort,
}

impl ContactFieldViolation {
    pub fn message(self, language: Language) -> &'static str {
        let message = match self {
            Self::NameTooShort => Localized::new(
                "Name must be at least 2 characters.",
                "Имя должно содержать не менее 2 символов.",
            ),
            Self::InvalidEmail => Localized::new(
                "Please enter a valid email.",
                "Пожалуйста, введите корректный email.",
            ),
            Self::SubjectTooShort => Localized::new(
                "Subject must be at least 3 characters.",
                "Тема должна содержать не менее 3 символов.",
            ),
            Self::MessageTooShort => Localized::new(
                "Message must be at least 10 characters.",
                "Сообщение должно содержать не менее 10 символов.",
            ),
        };
        *message.get(language)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactValidationErrors(BTreeMap<ContactField, ContactFieldViolation>);

impl ContactValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<ContactFieldViolation> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ContactFieldViolation)> + '_ {
        self.0.iter().map(|(&field, &violation)| (field, violation))
    }

    /// The violation messages keyed by field name, in the given language.
    pub fn messages(&self, language: Language) -> BTreeMap<&'static str, &'static str> {
        self.iter()
            .map(|(field, violation)| (field.key(), violation.message(language)))
            .collect()
    }
}

impl FromIterator<(ContactField, ContactFieldViolation)> for ContactValidationErrors {
    fn from_iter<T: IntoIterator<Item = (ContactField, ContactFieldViolation)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
