use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local part and domain as accepted by common web forms: no quoted local
/// parts, no ip literals and a domain ending in an alphabetic top level
/// domain.
static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+.-]*[A-Za-z0-9_+-]@([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(pub lettre::Address);

#[derive(Debug, Error)]
pub enum EmailAddressError {
    #[error("Invalid email address.")]
    Syntax,
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),
}

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('.') || s.contains("..") || !EMAIL_ADDRESS_REGEX.is_match(s) {
            return Err(EmailAddressError::Syntax);
        }
        Ok(Self(s.parse()?))
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.as_str().to_owned()
    }
}
