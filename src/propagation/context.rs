//! Ambient trace context and the tracer capability that exposes it.

/// Snapshot of the identifiers correlating the current operation.
///
/// Ids are carried as lowercase hex strings the way tracers render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    trace_id: String,
    span_id: String,
    sampled: Option<bool>,
}

impl TraceContext {
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>, sampled: Option<bool>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
            sampled,
        }
    }

    /// Trace id as hex (normally 32 characters).
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Span id as hex (normally 16 characters).
    pub fn span_id(&self) -> &str {
        &self.span_id
    }

    /// Sampling decision; `None` when the tracer has not decided.
    pub fn sampled(&self) -> Option<bool> {
        self.sampled
    }

    pub fn is_sampled(&self) -> bool {
        self.sampled == Some(true)
    }
}

/// Read-only access to the ambient tracing subsystem.
pub trait Tracer: Send + Sync {
    /// Context of the active span, or `None` when nothing is being traced.
    fn current_trace_context(&self) -> Option<TraceContext>;

    /// Baggage value stored under `key` for the given context.
    fn baggage(&self, context: &TraceContext, key: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_flag() {
        assert!(TraceContext::new("a", "b", Some(true)).is_sampled());
        assert!(!TraceContext::new("a", "b", Some(false)).is_sampled());
        assert!(!TraceContext::new("a", "b", None).is_sampled());
    }
}
