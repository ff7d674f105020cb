use anyhow::Context;
use folio_api_rest::RestServerConfig;
use folio_config::{Config, ContactConfig, ContactRelayKind};
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use folio_core_notification_impl::{NotificationFeatureConfig, NotificationFeatureServiceImpl};
use folio_core_portfolio_impl::PortfolioFeatureServiceImpl;
use folio_core_relay_impl::RelayFeatureServiceImpl;
use folio_extern_impl::{
    contact::{ContactRelayApiServiceConfig, ContactRelayApiServiceImpl},
    http::HttpClient,
};
use folio_models::ui::UiContext;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;
use types::{Contact, ContactRelayApi, Notification, Portfolio, RestServer, Template, Time};

pub mod types;

/// Builds the services of the application from the configuration.
#[derive(Debug)]
pub struct Provider<'a> {
    config: &'a Config,
    time: Time,
}

impl<'a> Provider<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            time: TimeServiceImpl,
        }
    }

    pub fn rest_server(&self) -> anyhow::Result<RestServer> {
        Ok(RestServer::new(
            RelayFeatureServiceImpl,
            self.contact()?,
            self.portfolio()?,
            self.template()?,
            self.time,
            self.rest_server_config(),
        ))
    }

    pub fn contact(&self) -> anyhow::Result<Contact> {
        Ok(ContactFeatureServiceImpl::new(
            self.contact_relay_api()?,
            self.notification(),
            ContactFeatureConfig {
                sender_name: self.config.contact.sender_name.clone(),
            },
        ))
    }

    fn contact_relay_api(&self) -> anyhow::Result<ContactRelayApi> {
        let client = HttpClient::new().context("Failed to build http client")?;
        Ok(ContactRelayApiServiceImpl::new(
            contact_relay_api_config(&self.config.contact)?,
            client,
        ))
    }

    fn notification(&self) -> Notification {
        NotificationFeatureServiceImpl::new(
            self.time,
            NotificationFeatureConfig {
                duration: *self.config.toast.duration,
            },
        )
    }

    fn portfolio(&self) -> anyhow::Result<Portfolio> {
        PortfolioFeatureServiceImpl::load(self.config.portfolio.content.as_deref())
    }

    fn template(&self) -> anyhow::Result<Template> {
        TemplateServiceImpl::new()
    }

    fn rest_server_config(&self) -> RestServerConfig {
        RestServerConfig {
            relay_path: self.config.relay.path.clone(),
            default_ui: UiContext {
                language: self.config.ui.default_language,
                theme: self.config.ui.default_theme,
            },
            toast_limit: self.config.toast.limit,
        }
    }
}

fn contact_relay_api_config(
    config: &ContactConfig,
) -> anyhow::Result<ContactRelayApiServiceConfig> {
    Ok(match config.relay {
        ContactRelayKind::Web3forms => {
            let web3forms = config
                .web3forms
                .as_ref()
                .context("Missing [contact.web3forms] config")?;
            ContactRelayApiServiceConfig::Web3Forms {
                endpoint: web3forms.endpoint.clone(),
                access_key: web3forms.access_key.clone(),
            }
        }
        ContactRelayKind::Function => {
            let function = config
                .function
                .as_ref()
                .context("Missing [contact.function] config")?;
            ContactRelayApiServiceConfig::Function {
                endpoint: function.endpoint.clone(),
                api_key: function.api_key.clone(),
            }
        }
    })
}
