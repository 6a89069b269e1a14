//! Request spans that continue the caller's distributed trace.

use axum::http::Request;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::propagation::extract_parent_context;

/// Span for an inbound request, parented on its `traceparent` / `baggage`.
///
/// Repository calls made while handling the request run inside this span,
/// so the state store receives the same trace id the caller sent.
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let span = tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    );
    span.set_parent(extract_parent_context(request.headers()));
    span
}
