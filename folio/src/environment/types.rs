use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_notification_impl::NotificationFeatureServiceImpl;
use folio_core_portfolio_impl::PortfolioFeatureServiceImpl;
use folio_core_relay_impl::RelayFeatureServiceImpl;
use folio_extern_impl::contact::ContactRelayApiServiceImpl;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<Relay, Contact, Portfolio, Template, Time>;

// Extern
pub type ContactRelayApi = ContactRelayApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;
pub type Template = TemplateServiceImpl;

// Core
pub type Contact = ContactFeatureServiceImpl<ContactRelayApi, Notification>;
pub type Notification = NotificationFeatureServiceImpl<Time>;
pub type Portfolio = PortfolioFeatureServiceImpl;
pub type Relay = RelayFeatureServiceImpl;
