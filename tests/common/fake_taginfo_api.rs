//! Fake taginfo API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Every path under `/api/4/` answers with whatever body was
//! registered for it via [`FakeTaginfoApi::respond`], or `404` otherwise.
//! Each request's path and raw query string is logged so tests can assert
//! exactly what went over the wire and how often.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_taginfo_api::FakeTaginfoApi;
//!
//! let api = FakeTaginfoApi::start().await.unwrap();
//! api.respond("keys/all", serde_json::json!({"data": []})).await;
//!
//! // Point the client at api.endpoint()
//! let url = api.endpoint();
//! # });
//! ```

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

const API_PREFIX: &str = "/api/4/";

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    /// Canned `(status, body)` per sub-path (e.g. `keys/all`).
    responses: HashMap<String, (StatusCode, String)>,
    /// Every request received, as `sub/path?query`.
    requests: Vec<String>,
}

/// Handle to the running fake taginfo server.
pub struct FakeTaginfoApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeTaginfoApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new().fallback(serve).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// API base URL with trailing slash (e.g. `http://127.0.0.1:PORT/api/4/`).
    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, API_PREFIX)
    }

    /// Answer `path` with `200` and `body`.
    pub async fn respond(&self, path: &str, body: serde_json::Value) {
        self.respond_raw(path, StatusCode::OK, body.to_string()).await;
    }

    /// Answer `path` with an arbitrary status and raw body text.
    pub async fn respond_raw(&self, path: &str, status: StatusCode, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.responses.insert(path.to_string(), (status, body.into()));
    }

    /// All requests received so far, as `sub/path?query`.
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }

    /// Number of requests received for `path`, whatever the query.
    pub async fn hits(&self, path: &str) -> usize {
        let prefix = format!("{path}?");
        self.state
            .lock()
            .await
            .requests
            .iter()
            .filter(|r| r.starts_with(&prefix) || r.as_str() == path)
            .count()
    }
}

// ---------------------------------------------------------------------------
// Route handler
// ---------------------------------------------------------------------------

async fn serve(State(state): State<Arc<Mutex<ApiState>>>, uri: Uri) -> Response {
    let Some(path) = uri.path().strip_prefix(API_PREFIX) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut state = state.lock().await;
    state
        .requests
        .push(format!("{}?{}", path, uri.query().unwrap_or_default()));

    match state.responses.get(path) {
        Some((status, body)) => (
            *status,
            [("content-type", "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
