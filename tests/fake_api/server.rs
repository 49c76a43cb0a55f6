//! In-process fake Firstmail API server
//!
//! An axum `Router` with one route per scripted path, served on a
//! `tokio::net::TcpListener` bound to `127.0.0.1:0`:
//!
//! ```text
//!   POST /mail/login/            <- routed to `reply`
//!       |
//!   `reply` records method, path, headers and body,
//!   pops the scripted response for the path, optionally
//!   sleeps, and answers with the canned JSON
//!       |
//!   unscripted paths hit the fallback and get a 404
//! ```

use super::request::RecordedRequest;
use super::script::Script;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// State shared between the test and the router.
#[derive(Default)]
struct Recorder {
    script: Script,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Recorder>>;

/// A fake API server on localhost with an OS-assigned port.
pub struct FakeApiServer {
    port: u16,
    state: Shared,
    /// Serve task; aborted when the server is dropped.
    handle: tokio::task::JoinHandle<()>,
}

impl FakeApiServer {
    /// Bind to `127.0.0.1:0` and start answering with `script`.
    pub async fn start(script: Script) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind to ephemeral port");
        let port = listener.local_addr().unwrap().port();

        let paths = script.paths();
        let state: Shared = Arc::new(Mutex::new(Recorder {
            script,
            requests: Vec::new(),
        }));

        let mut router = Router::new();
        for path in &paths {
            router = router.route(path, any(reply));
        }
        let app = router.fallback(reply).with_state(Arc::clone(&state));

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            port,
            state,
            handle,
        }
    }

    #[allow(dead_code)]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Base URL to put in `ClientConfig::base_url`.
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Requests received for one path.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

impl Drop for FakeApiServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn reply(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let canned = {
        let mut recorder = state.lock().unwrap();
        let canned = recorder.script.next(&request.path);
        recorder.requests.push(request);
        canned
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(canned.status).unwrap();
    (status, [(CONTENT_TYPE, "application/json")], canned.body).into_response()
}
