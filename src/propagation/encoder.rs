//! `traceparent` / `tracestate` encoding.
//!
//! ```text
//! traceparent: 00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01
//!              ^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^ ^^
//!         version            trace id                 span id      flags
//! ```

use crate::propagation::context::{TraceContext, Tracer};
use crate::propagation::headers::{PropagationHeaders, TRACESTATE};

const VERSION: &str = "00";
const DELIMITER: char = '-';
const TRACE_ID_HEX_LEN: usize = 32;
const SPAN_ID_HEX_LEN: usize = 16;

/// Length of a `traceparent` built from correctly sized ids.
pub const TRACEPARENT_LEN: usize = VERSION.len() + 1 + TRACE_ID_HEX_LEN + 1 + SPAN_ID_HEX_LEN + 1 + 2;

/// Builds W3C propagation headers from a trace context.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceContextEncoder;

impl TraceContextEncoder {
    /// Encode `context` into propagation headers.
    ///
    /// `tracestate` is emitted only when the tracer holds baggage under the
    /// reserved `tracestate` key; its value is passed through verbatim.
    pub fn encode<T>(tracer: &T, context: &TraceContext) -> PropagationHeaders
    where
        T: Tracer + ?Sized,
    {
        let tracestate = tracer.baggage(context, TRACESTATE);
        PropagationHeaders::new(Self::traceparent(context), tracestate)
    }

    /// Render the `traceparent` value for `context`.
    ///
    /// Short ids are left-padded with zeros; oversized ids are kept whole.
    pub fn traceparent(context: &TraceContext) -> String {
        let trace_id = pad_left_zeros(context.trace_id(), TRACE_ID_HEX_LEN);
        let span_id = pad_left_zeros(context.span_id(), SPAN_ID_HEX_LEN);

        if trace_id.len() > TRACE_ID_HEX_LEN || span_id.len() > SPAN_ID_HEX_LEN {
            tracing::debug!(
                trace_id = %context.trace_id(),
                span_id = %context.span_id(),
                "Trace identifiers exceed W3C widths; traceparent will be oversized"
            );
        }

        format!(
            "{VERSION}{DELIMITER}{trace_id}{DELIMITER}{span_id}{DELIMITER}{flags}",
            flags = trace_flags(context),
        )
    }
}

fn trace_flags(context: &TraceContext) -> &'static str {
    if context.is_sampled() {
        "01"
    } else {
        "00"
    }
}

fn pad_left_zeros(input: &str, width: usize) -> String {
    format!("{input:0>width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const TRACE_ID: &str = "0af7651916cd43dd8448eb211c80319c";
    const SPAN_ID: &str = "b7ad6b7169203331";

    #[derive(Default)]
    struct StubTracer {
        baggage: HashMap<String, String>,
    }

    impl Tracer for StubTracer {
        fn current_trace_context(&self) -> Option<TraceContext> {
            None
        }

        fn baggage(&self, _context: &TraceContext, key: &str) -> Option<String> {
            self.baggage.get(key).cloned()
        }
    }

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    /// Deterministic ids of the given width spread over the hex alphabet.
    fn generated_ids(width: usize) -> Vec<String> {
        (0u64..8)
            .map(|seed| {
                let mut state = seed.wrapping_mul(0x9e37_79b9_7f4a_7c15) | 1;
                (0..width)
                    .map(|_| {
                        state ^= state << 13;
                        state ^= state >> 7;
                        state ^= state << 17;
                        char::from_digit((state % 16) as u32, 16).unwrap_or('0')
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_traceparent_layout() {
        for sampled in [Some(true), Some(false), None] {
            let context = TraceContext::new(TRACE_ID, SPAN_ID, sampled);
            let value = TraceContextEncoder::traceparent(&context);

            assert_eq!(value.len(), TRACEPARENT_LEN);
            assert_eq!(value.len(), 55);

            let fields: Vec<&str> = value.split('-').collect();
            assert_eq!(fields.len(), 4);
            assert_eq!(fields[0], "00");
            assert_eq!(fields[1], TRACE_ID);
            assert_eq!(fields[2], SPAN_ID);
            assert!(is_lower_hex(fields[1]) && is_lower_hex(fields[2]));
            assert!(fields[3] == "00" || fields[3] == "01");
        }
    }

    #[test]
    fn test_traceparent_layout_for_generated_ids() {
        let trace_ids = generated_ids(TRACE_ID_HEX_LEN);
        let span_ids = generated_ids(SPAN_ID_HEX_LEN);

        for (trace_id, span_id) in trace_ids.iter().zip(&span_ids) {
            for sampled in [Some(true), Some(false), None] {
                let context = TraceContext::new(trace_id.clone(), span_id.clone(), sampled);
                let value = TraceContextEncoder::traceparent(&context);

                assert_eq!(value.len(), TRACEPARENT_LEN);
                let fields: Vec<&str> = value.split('-').collect();
                assert_eq!(fields, vec!["00", trace_id.as_str(), span_id.as_str(), trace_flags(&context)]);
                assert!(is_lower_hex(fields[1]) && is_lower_hex(fields[2]));
            }
        }
    }

    #[test]
    fn test_sampled_flags() {
        let sampled = TraceContext::new(TRACE_ID, SPAN_ID, Some(true));
        let unsampled = TraceContext::new(TRACE_ID, SPAN_ID, Some(false));
        let undecided = TraceContext::new(TRACE_ID, SPAN_ID, None);

        assert!(TraceContextEncoder::traceparent(&sampled).ends_with("-01"));
        assert!(TraceContextEncoder::traceparent(&unsampled).ends_with("-00"));
        assert!(TraceContextEncoder::traceparent(&undecided).ends_with("-00"));
    }

    #[test]
    fn test_short_trace_id_is_padded() {
        let context = TraceContext::new("abc", SPAN_ID, Some(true));
        let value = TraceContextEncoder::traceparent(&context);
        assert_eq!(
            value,
            format!("00-00000000000000000000000000000abc-{SPAN_ID}-01")
        );
    }

    #[test]
    fn test_short_span_id_is_padded() {
        let context = TraceContext::new(TRACE_ID, "7169203331", Some(false));
        let value = TraceContextEncoder::traceparent(&context);
        assert_eq!(value, format!("00-{TRACE_ID}-0000007169203331-00"));
        assert_eq!(value.len(), TRACEPARENT_LEN);
    }

    #[test]
    fn test_long_trace_id_is_not_truncated() {
        let long_id = format!("ff{TRACE_ID}");
        let context = TraceContext::new(long_id.clone(), SPAN_ID, Some(true));
        let value = TraceContextEncoder::traceparent(&context);
        assert!(value.contains(&long_id));
        assert_eq!(value.len(), TRACEPARENT_LEN + 2);
    }

    #[test]
    fn test_encode_without_baggage() {
        let tracer = StubTracer::default();
        let context = TraceContext::new(TRACE_ID, SPAN_ID, Some(true));

        let headers = TraceContextEncoder::encode(&tracer, &context);

        assert_eq!(headers.iter().count(), 1);
        assert!(headers.tracestate().is_none());
        assert_eq!(
            headers.traceparent(),
            format!("00-{TRACE_ID}-{SPAN_ID}-01")
        );
    }

    #[test]
    fn test_encode_with_tracestate_baggage() {
        let mut tracer = StubTracer::default();
        tracer
            .baggage
            .insert(TRACESTATE.to_string(), "congo=t61rcWkgMzE".to_string());
        let context = TraceContext::new(TRACE_ID, SPAN_ID, Some(false));

        let headers = TraceContextEncoder::encode(&tracer, &context);

        assert_eq!(headers.iter().count(), 2);
        assert_eq!(headers.get(TRACESTATE), Some("congo=t61rcWkgMzE"));
        assert!(headers.traceparent().ends_with("-00"));
    }

    #[test]
    fn test_encode_ignores_unrelated_baggage() {
        let mut tracer = StubTracer::default();
        tracer.baggage.insert("tenant".into(), "acme".into());
        let context = TraceContext::new(TRACE_ID, SPAN_ID, Some(true));

        let headers = TraceContextEncoder::encode(&tracer, &context);
        assert_eq!(headers.iter().count(), 1);
    }
}
