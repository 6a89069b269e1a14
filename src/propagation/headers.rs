//! W3C trace headers produced for an outgoing call.

/// W3C `traceparent` header name.
pub const TRACEPARENT: &str = "traceparent";

/// W3C `tracestate` header name. Also the reserved baggage key it is read from.
pub const TRACESTATE: &str = "tracestate";

/// Immutable header mapping: always `traceparent`, `tracestate` only when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationHeaders {
    traceparent: String,
    tracestate: Option<String>,
}

impl PropagationHeaders {
    pub(crate) fn new(traceparent: String, tracestate: Option<String>) -> Self {
        Self {
            traceparent,
            tracestate,
        }
    }

    pub fn traceparent(&self) -> &str {
        &self.traceparent
    }

    pub fn tracestate(&self) -> Option<&str> {
        self.tracestate.as_deref()
    }

    /// Look up a header by (lowercase) name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            TRACEPARENT => Some(self.traceparent()),
            TRACESTATE => self.tracestate(),
            _ => None,
        }
    }

    /// Iterate `(name, value)` pairs, `traceparent` first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        std::iter::once((TRACEPARENT, self.traceparent.as_str()))
            .chain(self.tracestate.as_deref().map(|state| (TRACESTATE, state)))
    }
}
