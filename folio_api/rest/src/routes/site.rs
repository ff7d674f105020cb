use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing, Form, Json, Router,
};
use chrono::{DateTime, Datelike, Utc};
use folio_core_contact_contracts::{
    ContactFeatureService, ContactForm, ContactSubmitError, SharedContactForm,
};
use folio_core_notification_contracts::Toaster;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use folio_models::{
    contact::{ContactField, ContactFormInput},
    ui::UiContext,
};
use folio_shared_contracts::time::TimeService;
use folio_templates_contracts::{
    ContactFieldView, ContactFormView, IndexTemplate, TemplateService, ToastView,
};
use tokio::sync::Mutex;

use super::internal_server_error;
use crate::models::{contact::ApiContactValidation, ui::ApiUiQuery};

pub struct SiteState<Contact, Portfolio, Template, Time> {
    pub contact: Contact,
    pub portfolio: Arc<Portfolio>,
    pub template: Template,
    pub time: Time,
    pub default_ui: UiContext,
    pub toast_limit: usize,
}

pub fn router<Contact, Portfolio, Template, Time>(
    state: Arc<SiteState<Contact, Portfolio, Template, Time>>,
) -> Router<()>
where
    Contact: ContactFeatureService,
    Portfolio: PortfolioFeatureService,
    Template: TemplateService,
    Time: TimeService,
{
    Router::new()
        .route("/", routing::get(index))
        .route("/contact", routing::post(contact))
        .route("/api/contact/validate", routing::post(validate))
        .route("/style.css", routing::get(style))
        .route("/app.js", routing::get(script))
        .with_state(state)
}

async fn index<Contact, Portfolio, Template, Time>(
    State(state): State<Arc<SiteState<Contact, Portfolio, Template, Time>>>,
    Query(query): Query<ApiUiQuery>,
) -> Response
where
    Contact: ContactFeatureService,
    Portfolio: PortfolioFeatureService,
    Template: TemplateService,
    Time: TimeService,
{
    let ui = query.resolve(state.default_ui);
    let toaster = Toaster::new(state.toast_limit);
    state.render(ui, &ContactForm::default(), &toaster)
}

async fn contact<Contact, Portfolio, Template, Time>(
    State(state): State<Arc<SiteState<Contact, Portfolio, Template, Time>>>,
    Query(query): Query<ApiUiQuery>,
    Form(input): Form<ContactFormInput>,
) -> Response
where
    Contact: ContactFeatureService,
    Portfolio: PortfolioFeatureService,
    Template: TemplateService,
    Time: TimeService,
{
    let ui = query.resolve(state.default_ui);
    let form: SharedContactForm = Arc::new(Mutex::new(ContactForm::new(input)));
    let mut toaster = Toaster::new(state.toast_limit);

    match state.contact.submit(&form, ui.language).await {
        Ok(submitted) => toaster.push(submitted.toast),
        Err(ContactSubmitError::Invalid(_) | ContactSubmitError::AlreadySubmitting) => {}
        Err(ContactSubmitError::Other(err)) => return internal_server_error(err),
    }

    let form = form.lock().await;
    state.render(ui, &form, &toaster)
}

/// Re-validates the contact form while the visitor edits it.
async fn validate<Contact, Portfolio, Template, Time>(
    State(state): State<Arc<SiteState<Contact, Portfolio, Template, Time>>>,
    Query(query): Query<ApiUiQuery>,
    Json(input): Json<ContactFormInput>,
) -> Json<ApiContactValidation> {
    let language = query.language(state.default_ui.language);
    let errors = input
        .validate()
        .err()
        .map(|errors| errors.messages(language))
        .unwrap_or_default();
    Json(ApiContactValidation { errors })
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        folio_assets::APP_JS,
    )
}

async fn style() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        folio_assets::STYLE_CSS,
    )
}

impl<Contact, Portfolio, Template, Time> SiteState<Contact, Portfolio, Template, Time>
where
    Portfolio: PortfolioFeatureService,
    Template: TemplateService,
    Time: TimeService,
{
    fn render(&self, ui: UiContext, form: &ContactForm, toaster: &Toaster) -> Response {
        let now = self.time.now();
        let template = IndexTemplate {
            language: ui.language,
            theme: ui.theme,
            query: ui.query(),
            toggle_language_query: ui.toggled_language().query(),
            toggle_theme_query: ui.toggled_theme().query(),
            portfolio: self.portfolio.get_portfolio(ui.language),
            contact_form: contact_form_view(ui, form),
            toasts: toast_views(toaster, now),
            year: now.year(),
        };

        match self.template.render(&template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => internal_server_error(err),
        }
    }
}

fn contact_form_view(ui: UiContext, form: &ContactForm) -> ContactFormView {
    let fields = ContactField::ALL
        .into_iter()
        .map(|field| ContactFieldView {
            name: field.key().into(),
            label: field.label(ui.language).into(),
            placeholder: field.placeholder(ui.language).into(),
            value: form.input().get(field).into(),
            error: form
                .errors()
                .get(field)
                .map(|violation| violation.message(ui.language).into()),
            multiline: field == ContactField::Message,
        })
        .collect();

    ContactFormView {
        fields,
        submit_label: form.submit_label(ui.language).into(),
        sending_label: ContactForm::sending_label(ui.language).into(),
        submitting: form.is_submitting(),
        show_errors: form.errors_shown(),
    }
}

fn toast_views(toaster: &Toaster, now: DateTime<Utc>) -> Vec<ToastView> {
    toaster
        .active(now)
        .map(|toast| ToastView {
            id: toast.id.0,
            title: toast.notification.title.clone(),
            description: toast.notification.description.clone(),
            variant: toast.notification.variant,
            remaining_ms: toast
                .remaining(now)
                .as_millis()
                .try_into()
                .unwrap_or(u64::MAX),
        })
        .collect()
}
