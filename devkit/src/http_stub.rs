/*!
HTTP stub server for development without live endpoints

Lets services be developed and tested without reaching the real Overpass or
chat-completion APIs. Serves canned responses on a random local port and
records every received request so tests can assert on them.
*/

use anyhow::Result;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// One canned response: requests for `path` get `status` + `body`,
/// optionally after an artificial delay (for timeout tests).
#[derive(Debug, Clone)]
pub struct StubRoute {
    pub path: String,
    pub status: u16,
    pub body: Value,
    pub delay: Option<Duration>,
}

impl StubRoute {
    pub fn json(path: &str, status: u16, body: Value) -> Self {
        Self {
            path: path.to_string(),
            status,
            body,
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request the stub received, kept for assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// First value of a header, case-insensitive on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<StubRoute>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stub server bound to a random port on localhost.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Bind to 127.0.0.1:0 and serve the given canned routes in a
    /// background task for the rest of the test.
    pub async fn spawn(routes: Vec<StubRoute>) -> Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            routes: Arc::new(routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("stub server stopped: {e}");
            }
        });
        Ok(Self { addr, requests })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Snapshot of every request received so far.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received on a given path.
    pub fn hits(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

async fn respond(State(state): State<StubState>, req: Request) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);
    let headers = req
        .headers()
        .iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                String::from_utf8_lossy(v.as_bytes()).to_string(),
            )
        })
        .collect();
    let bytes = to_bytes(req.into_body(), usize::MAX).await.unwrap_or_default();
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        query,
        headers,
        body: String::from_utf8_lossy(&bytes).to_string(),
    });

    let Some(route) = state.routes.iter().find(|r| r.path == path) else {
        return (StatusCode::NOT_FOUND, "stub: no such route").into_response();
    };
    if let Some(delay) = route.delay {
        tokio::time::sleep(delay).await;
    }
    let status = StatusCode::from_u16(route.status).unwrap_or(StatusCode::OK);
    (status, Json(route.body.clone())).into_response()
}
