use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_core_relay_contracts::RelayFeatureService;
use folio_models::ui::UiContext;
use folio_shared_contracts::time::TimeService;
use folio_templates_contracts::TemplateService;
use tokio::net::TcpListener;
use tracing::info;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Relay, Contact, Portfolio, Template, Time> {
    relay: Relay,
    contact: Contact,
    portfolio: Portfolio,
    template: Template,
    time: Time,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Path of the relay endpoint, starting with a `/`.
    pub relay_path: String,
    /// Language and theme of requests that do not select them.
    pub default_ui: UiContext,
    /// Maximum number of toasts shown at once.
    pub toast_limit: usize,
}

impl<Relay, Contact, Portfolio, Template, Time> RestServer<Relay, Contact, Portfolio, Template, Time>
where
    Relay: RelayFeatureService,
    Contact: ContactFeatureService,
    Portfolio: PortfolioFeatureService,
    Template: TemplateService,
    Time: TimeService,
{
    pub fn new(
        relay: Relay,
        contact: Contact,
        portfolio: Portfolio,
        template: Template,
        time: Time,
        config: RestServerConfig,
    ) -> Self {
        Self {
            relay,
            contact,
            portfolio,
            template,
            time,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind to {host}:{port}"))?;
        info!("Listening on http://{}", listener.local_addr()?);
        axum::serve(listener, router)
            .await
            .context("Failed to start HTTP server")
    }

    pub fn router(self) -> Router<()> {
        let portfolio = Arc::new(self.portfolio);

        let site = routes::site::SiteState {
            contact: self.contact,
            portfolio: Arc::clone(&portfolio),
            template: self.template,
            time: self.time,
            default_ui: self.config.default_ui,
            toast_limit: self.config.toast_limit,
        };

        let router = Router::new()
            .merge(routes::relay::router(
                &self.config.relay_path,
                self.relay.into(),
            ))
            .merge(routes::portfolio::router(
                portfolio,
                self.config.default_ui.language,
            ))
            .merge(routes::site::router(site.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
