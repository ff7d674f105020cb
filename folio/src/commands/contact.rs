use std::sync::Arc;

use anyhow::bail;
use clap::Subcommand;
use folio_config::Config;
use folio_core_contact_contracts::{
    ContactFeatureService, ContactForm, ContactSubmitError, ContactSubmitted,
};
use folio_models::{contact::ContactFormInput, l10n::Language};
use tokio::sync::Mutex;

use crate::environment::Provider;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Send a message through the configured contact relay
    #[command(aliases(["s"]))]
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        /// Language of the printed messages [default: ui.default_language]
        #[arg(long)]
        language: Option<Language>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                subject,
                message,
                language,
            } => {
                let input = ContactFormInput {
                    name,
                    email,
                    subject,
                    message,
                };
                let language = language.unwrap_or(config.ui.default_language);
                report(send(&config, input, language).await, language)
            }
        }
    }
}

pub async fn send(
    config: &Config,
    input: ContactFormInput,
    language: Language,
) -> Result<ContactSubmitted, ContactSubmitError> {
    let contact = Provider::new(config).contact()?;
    let form = Arc::new(Mutex::new(ContactForm::new(input)));
    contact.submit(&form, language).await
}

fn report(
    result: Result<ContactSubmitted, ContactSubmitError>,
    language: Language,
) -> anyhow::Result<()> {
    match result {
        Ok(ContactSubmitted { outcome, toast }) => {
            let notification = toast.notification;
            if !outcome.is_sent() {
                bail!("{}: {}", notification.title, notification.description);
            }
            println!("{}", notification.title);
            println!("{}", notification.description);
            Ok(())
        }
        Err(ContactSubmitError::Invalid(errors)) => {
            for (field, violation) in errors.iter() {
                eprintln!("{}: {}", field.label(language), violation.message(language));
            }
            bail!("The form contains {} invalid field(s)", errors.len());
        }
        Err(err) => Err(err.into()),
    }
}
