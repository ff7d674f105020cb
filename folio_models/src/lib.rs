pub mod contact;
pub mod email_address;
pub mod l10n;
mod macros;
pub mod notification;
pub mod portfolio;
pub mod ui;
