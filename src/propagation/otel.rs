//! OpenTelemetry-backed tracer and inbound context extraction.
//!
//! The `tracing` span stack is bridged to OpenTelemetry by
//! `tracing-opentelemetry` (see `observability::logging`), so the active
//! span's context is read through [`OpenTelemetrySpanExt`].

use axum::http::HeaderMap;
use opentelemetry::baggage::BaggageExt;
use opentelemetry::propagation::Extractor;
use opentelemetry::trace::TraceContextExt;
use opentelemetry::{global, Context};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::propagation::context::{TraceContext, Tracer};
use crate::propagation::headers::TRACESTATE;

/// Tracer reading the ambient OpenTelemetry context of the current span.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtelTracer;

impl OtelTracer {
    pub fn new() -> Self {
        Self
    }

    /// OpenTelemetry context of the active `tracing` span, falling back to the
    /// thread's attached context when no span is bridged.
    fn ambient_context() -> Context {
        let cx = tracing::Span::current().context();
        if cx.span().span_context().is_valid() {
            cx
        } else {
            Context::current()
        }
    }
}

impl Tracer for OtelTracer {
    fn current_trace_context(&self) -> Option<TraceContext> {
        let cx = Self::ambient_context();
        let span = cx.span();
        let span_context = span.span_context();
        if !span_context.is_valid() {
            return None;
        }

        Some(TraceContext::new(
            span_context.trace_id().to_string(),
            span_context.span_id().to_string(),
            Some(span_context.is_sampled()),
        ))
    }

    fn baggage(&self, _context: &TraceContext, key: &str) -> Option<String> {
        let cx = Self::ambient_context();
        if let Some(value) = cx.baggage().get(key) {
            return Some(value.as_str().to_owned());
        }

        // The W3C trace state rides on the span context rather than in baggage.
        if key == TRACESTATE {
            let header = cx.span().span_context().trace_state().header();
            if !header.is_empty() {
                return Some(header);
            }
        }
        None
    }
}

/// Extracts the remote parent context from inbound HTTP headers.
///
/// Uses the globally installed text-map propagator (W3C trace context and
/// baggage once telemetry is initialized). Returns an empty context when the
/// headers carry nothing usable.
pub fn extract_parent_context(headers: &HeaderMap) -> Context {
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}

/// Extractor for reading propagation headers from an HTTP header map.
struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}
