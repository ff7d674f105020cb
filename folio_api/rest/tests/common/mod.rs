use std::net::SocketAddr;

use folio_api_rest::{RestServer, RestServerConfig};
use folio_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use folio_core_notification_impl::{NotificationFeatureConfig, NotificationFeatureServiceImpl};
use folio_core_portfolio_impl::PortfolioFeatureServiceImpl;
use folio_core_relay_contracts::RelayFeatureService;
use folio_core_relay_impl::RelayFeatureServiceImpl;
use folio_demo::SENDER_NAME;
use folio_extern_impl::{
    contact::{ContactRelayApiServiceConfig, ContactRelayApiServiceImpl},
    http::HttpClient,
};
use folio_models::ui::UiContext;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;
use folio_testing::{web3forms, Inbox};

pub const RELAY_PATH: &str = "/functions/v1/send-contact-email";
pub const ACCESS_KEY: &str = "test-access-key";

pub struct TestServer {
    pub addr: SocketAddr,
    pub inbox: Inbox<web3forms::Web3FormsSubmission>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

pub async fn start() -> TestServer {
    start_with(RelayFeatureServiceImpl, ACCESS_KEY).await
}

/// Starts the server together with a web3forms testing server. Submissions
/// are sent with `access_key`.
pub async fn start_with(relay: impl RelayFeatureService, access_key: &str) -> TestServer {
    let (web3forms, inbox) = web3forms::router(ACCESS_KEY.into());
    let web3forms_addr = folio_testing::spawn(web3forms).await.unwrap();

    let relay_api = ContactRelayApiServiceImpl::new(
        ContactRelayApiServiceConfig::Web3Forms {
            endpoint: format!("http://{web3forms_addr}{}", web3forms::SUBMIT_ROUTE)
                .parse()
                .unwrap(),
            access_key: access_key.into(),
        },
        HttpClient::new().unwrap(),
    );
    let notification = NotificationFeatureServiceImpl::new(
        TimeServiceImpl,
        NotificationFeatureConfig {
            duration: std::time::Duration::from_secs(5),
        },
    );
    let contact = ContactFeatureServiceImpl::new(
        relay_api,
        notification,
        ContactFeatureConfig {
            sender_name: SENDER_NAME.into(),
        },
    );

    let router = RestServer::new(
        relay,
        contact,
        PortfolioFeatureServiceImpl::load(None).unwrap(),
        TemplateServiceImpl::new().unwrap(),
        TimeServiceImpl,
        RestServerConfig {
            relay_path: RELAY_PATH.into(),
            default_ui: UiContext::default(),
            toast_limit: 1,
        },
    )
    .router();
    let addr = folio_testing::spawn(router).await.unwrap();

    TestServer { addr, inbox }
}
