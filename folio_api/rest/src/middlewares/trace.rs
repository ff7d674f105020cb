use std::time::Duration;

use axum::{
    extract::{MatchedPath, Request},
    response::Response,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, debug_span, Span};

use super::request_id::RequestId;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    let layer = TraceLayer::new_for_http()
        .make_span_with(span)
        .on_request(|_: &Request, _: &Span| debug!("request started"))
        .on_response(finished)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(());
    router.layer(layer)
}

/// Span of one request, labeled with the matched route template when there
/// is one (e.g. `/contact`) and the raw path otherwise.
fn span(request: &Request) -> Span {
    let route = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => request.uri().path().to_owned(),
    };
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.to_string())
        .unwrap_or_default();

    debug_span!(
        "http-request",
        version = ?request.version(),
        method = %request.method(),
        %route,
        %request_id,
    )
}

fn finished(response: &Response, latency: Duration, _span: &Span) {
    debug!(?latency, status = %response.status(), "request finished");
}
