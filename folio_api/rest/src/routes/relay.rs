use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_relay_contracts::{RelayContactMessage, RelayFeatureService, RelayReceiveError};
use tracing::warn;

use crate::{
    middlewares,
    models::relay::{ApiRelayError, ApiRelaySuccess},
};

pub fn router(path: &str, service: Arc<impl RelayFeatureService>) -> Router<()> {
    let router = Router::new()
        .route(
            path,
            routing::options(preflight)
                .post(receive)
                .fallback(unsupported_method),
        )
        .with_state(service);
    middlewares::cors::add(router)
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn receive(service: State<Arc<impl RelayFeatureService>>, body: Bytes) -> Response {
    let message = match serde_json::from_slice::<RelayContactMessage>(&body) {
        Ok(message) => message,
        Err(err) => {
            warn!("invalid relay request: {err}");
            return relay_error(err.to_string());
        }
    };

    match service.receive(message).await {
        Ok(()) => Json(ApiRelaySuccess::default()).into_response(),
        Err(RelayReceiveError::Other(err)) => {
            tracing::error!("failed to handle relay request: {err:#}");
            relay_error(err.to_string())
        }
    }
}

/// Requests without a json body fail like an unparsable body.
async fn unsupported_method(method: Method) -> Response {
    warn!("unsupported relay request method {method}");
    relay_error(format!("Unsupported method {method}, expected a json body"))
}

fn relay_error(error: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiRelayError { error }),
    )
        .into_response()
}
