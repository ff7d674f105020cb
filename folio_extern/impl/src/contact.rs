use folio_extern_contracts::contact::{
    ContactRelayApiService, ContactRelayResponse, ContactSubmission,
};
use folio_utils::Apply;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::http::HttpClient;

pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone)]
pub struct ContactRelayApiServiceImpl {
    config: ContactRelayApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub enum ContactRelayApiServiceConfig {
    /// A public form relay that authenticates submissions with an access key
    /// sent along with the form fields.
    Web3Forms { endpoint: Url, access_key: String },
    /// A relay function that takes a json body. The optional api key is sent
    /// both as bearer token and in the `apikey` header.
    Function {
        endpoint: Url,
        api_key: Option<String>,
    },
}

impl ContactRelayApiServiceImpl {
    pub fn new(config: ContactRelayApiServiceConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

impl ContactRelayApiService for ContactRelayApiServiceImpl {
    async fn submit(&self, submission: &ContactSubmission) -> anyhow::Result<ContactRelayResponse> {
        let message = &submission.message;

        let request = match &self.config {
            ContactRelayApiServiceConfig::Web3Forms {
                endpoint,
                access_key,
            } => {
                trace!(%endpoint, "submit contact message to web3forms");
                let form = Form::new()
                    .text("name", message.author.name.as_str().to_owned())
                    .text("email", message.author.email.to_string())
                    .text("subject", message.subject.as_str().to_owned())
                    .text("message", message.content.as_str().to_owned())
                    .text("access_key", access_key.clone())
                    .text("from_name", submission.from_name.clone())
                    .text("replyto", submission.reply_to.to_string());
                self.client.post(endpoint.clone()).multipart(form)
            }
            ContactRelayApiServiceConfig::Function { endpoint, api_key } => {
                trace!(%endpoint, "submit contact message to relay function");
                self.client
                    .post(endpoint.clone())
                    .json(&FunctionRequest {
                        name: &message.author.name,
                        email: message.author.email.as_str(),
                        subject: &message.subject,
                        message: &message.content,
                        from_name: &submission.from_name,
                        replyto: submission.reply_to.as_str(),
                    })
                    .apply_map(api_key.as_deref(), |request, api_key| {
                        request.bearer_auth(api_key).header("apikey", api_key)
                    })
            }
        };

        request
            .send()
            .await?
            .error_for_status()?
            .json::<RelayResponse>()
            .await
            .map(Into::into)
            .map_err(Into::into)
    }
}

#[derive(Serialize)]
struct FunctionRequest<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    from_name: &'a str,
    replyto: &'a str,
}

#[derive(Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

impl From<RelayResponse> for ContactRelayResponse {
    fn from(value: RelayResponse) -> Self {
        let message = value.message.or(value.error);
        if value.success {
            Self::Accepted { message }
        } else {
            Self::Rejected { message }
        }
    }
}
