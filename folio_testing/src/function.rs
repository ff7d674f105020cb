use std::net::SocketAddr;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::json;
use tracing::{info, warn};

use crate::Inbox;

pub const FUNCTION_ROUTE: &str = "/functions/v1/send-contact-email";

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSubmission {
    pub body: serde_json::Value,
    pub authorization: Option<String>,
    pub apikey: Option<String>,
}

pub async fn start_server(addr: SocketAddr, api_key: Option<String>) -> anyhow::Result<()> {
    info!("Starting relay function testing server on {addr}");
    info!("Function endpoint: http://{addr}{FUNCTION_ROUTE}");
    match &api_key {
        Some(api_key) => info!("Api key: {api_key:?}"),
        None => info!("No api key required"),
    }

    let (router, _) = router(api_key);
    crate::serve(addr, router).await
}

/// Builds the testing server and returns it together with the inbox its
/// accepted submissions are recorded in. If `api_key` is set, requests
/// without a matching `apikey` header are answered with `401`.
pub fn router(api_key: Option<String>) -> (Router, Inbox<FunctionSubmission>) {
    let inbox = Inbox::default();
    let router = Router::new()
        .route(FUNCTION_ROUTE, routing::post(send))
        .with_state(AppState {
            api_key,
            inbox: inbox.clone(),
        });
    (router, inbox)
}

#[derive(Clone)]
struct AppState {
    api_key: Option<String>,
    inbox: Inbox<FunctionSubmission>,
}

async fn send(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    };
    let submission = FunctionSubmission {
        body,
        authorization: header("authorization"),
        apikey: header("apikey"),
    };

    if state.api_key.is_some() && submission.apikey != state.api_key {
        warn!("Rejecting request with invalid api key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid api key"})),
        )
            .into_response();
    }

    info!(body = %submission.body, "Received submission");
    state.inbox.push(submission).await;

    Json(json!({"success": true, "message": "Contact message received"})).into_response()
}
