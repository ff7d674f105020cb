use std::{collections::BTreeMap, net::SocketAddr};

use axum::{
    extract::{Multipart, State},
    routing, Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::Inbox;

pub const SUBMIT_ROUTE: &str = "/submit";

const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// The multipart fields of one submission, including the access key.
pub type Web3FormsSubmission = BTreeMap<String, String>;

pub async fn start_server(addr: SocketAddr, access_key: String) -> anyhow::Result<()> {
    info!("Starting web3forms testing server on {addr}");
    info!("Submit endpoint: http://{addr}{SUBMIT_ROUTE}");
    info!("Access key: {access_key:?}");

    let (router, _) = router(access_key);
    crate::serve(addr, router).await
}

/// Builds the testing server and returns it together with the inbox its
/// accepted submissions are recorded in.
pub fn router(access_key: String) -> (Router, Inbox<Web3FormsSubmission>) {
    let inbox = Inbox::default();
    let router = Router::new()
        .route(SUBMIT_ROUTE, routing::post(submit))
        .with_state(AppState {
            access_key,
            inbox: inbox.clone(),
        });
    (router, inbox)
}

#[derive(Clone)]
struct AppState {
    access_key: String,
    inbox: Inbox<Web3FormsSubmission>,
}

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    message: &'static str,
}

async fn submit(State(state): State<AppState>, mut multipart: Multipart) -> Json<SubmitResponse> {
    let mut fields = Web3FormsSubmission::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_owned();
                match field.text().await {
                    Ok(value) => fields.insert(name, value),
                    Err(err) => return reject(&format!("Invalid field {name:?}: {err}")),
                };
            }
            Ok(None) => break,
            Err(err) => return reject(&format!("Invalid form data: {err}")),
        }
    }

    if fields.get("access_key") != Some(&state.access_key) {
        warn!("Rejecting submission with invalid access key");
        return Json(SubmitResponse {
            success: false,
            message: "Invalid access key",
        });
    }

    if let Some(missing) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| !fields.contains_key(*field))
    {
        return reject(&format!("Missing field {missing:?}"));
    }

    info!(?fields, "Received submission");
    state.inbox.push(fields).await;

    Json(SubmitResponse {
        success: true,
        message: "Email sent successfully!",
    })
}

fn reject(reason: &str) -> Json<SubmitResponse> {
    warn!("Rejecting submission: {reason}");
    Json(SubmitResponse {
        success: false,
        message: "Invalid submission",
    })
}
