//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use traffic_control::propagation::{TraceContext, Tracer};
use traffic_control::state::{RequestOptions, StateClient, StateError, StateResult};

pub const TRACE_ID: &str = "0af7651916cd43dd8448eb211c80319c";
pub const SPAN_ID: &str = "b7ad6b7169203331";

/// Tracer with a fixed context and baggage.
#[derive(Default)]
pub struct FixedTracer {
    context: Option<TraceContext>,
    baggage: HashMap<String, String>,
}

#[allow(dead_code)]
impl FixedTracer {
    pub fn sampled() -> Self {
        Self {
            context: Some(TraceContext::new(TRACE_ID, SPAN_ID, Some(true))),
            baggage: HashMap::new(),
        }
    }

    pub fn untraced() -> Self {
        Self::default()
    }

    pub fn with_baggage(mut self, key: &str, value: &str) -> Self {
        self.baggage.insert(key.to_string(), value.to_string());
        self
    }
}

impl Tracer for FixedTracer {
    fn current_trace_context(&self) -> Option<TraceContext> {
        self.context.clone()
    }

    fn baggage(&self, _context: &TraceContext, key: &str) -> Option<String> {
        self.baggage.get(key).cloned()
    }
}

/// State client whose every call fails like an unreachable sidecar.
#[allow(dead_code)]
pub struct FailingStateClient {
    pub status: u16,
}

impl StateClient for FailingStateClient {
    async fn save_state(
        &self,
        _store: &str,
        _key: &str,
        _value: Value,
        _options: &RequestOptions,
    ) -> StateResult<()> {
        Err(StateError::Status {
            status: self.status,
            body: "simulated failure".into(),
        })
    }

    async fn get_state(
        &self,
        _store: &str,
        _key: &str,
        _options: &RequestOptions,
    ) -> StateResult<Option<Value>> {
        Err(StateError::Status {
            status: self.status,
            body: "simulated failure".into(),
        })
    }
}

/// A request received by the mock sidecar.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a programmable mock sidecar on an ephemeral port.
///
/// Every request is recorded; `f` decides the status and body of the reply.
pub async fn start_mock_sidecar<F, Fut>(f: F) -> (SocketAddr, Recorded)
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let log = recorded.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let Some(request) = read_request(&mut socket).await else {
                    return;
                };
                log.lock().unwrap().push(request.clone());
                let (status, body) = f(request).await;
                let _ = socket.write_all(render_response(status, &body).as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, recorded)
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn render_response(status: u16, body: &str) -> String {
    let status_text = match status {
        200 => "200 OK",
        204 => "204 No Content",
        400 => "400 Bad Request",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };
    if status == 204 {
        return format!("HTTP/1.1 {}\r\nConnection: close\r\n\r\n", status_text);
    }
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    )
}

/// Fixed timestamp on the test day.
#[allow(dead_code)]
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

/// A license number no other test uses.
#[allow(dead_code)]
pub fn unique_plate() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("XT-{}", &id[..6]).to_uppercase()
}
