//! Canned responses for the fake API server
//!
//! ```ignore
//! let script = ScriptBuilder::new()
//!     .reply("/mail/login/", 200, json!({"error": false, "jwtToken": "abc"}))
//!     .reply("/mail/messages/", 403, json!({}))
//!     .build();
//! ```
//!
//! Several replies registered for the same path are served in order;
//! the last one keeps being served once the others are used up.

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// One canned HTTP response.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
    /// Wait this long before answering.
    pub delay: Option<Duration>,
}

impl Canned {
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }
}

/// Responses per request path.
#[derive(Debug, Clone, Default)]
pub struct Script {
    routes: HashMap<String, VecDeque<Canned>>,
}

impl Script {
    /// Every path that has at least one reply.
    pub fn paths(&self) -> Vec<String> {
        self.routes.keys().cloned().collect()
    }

    /// Next response for `path`, or a 404 when nothing is scripted.
    pub fn next(&mut self, path: &str) -> Canned {
        let Some(queue) = self.routes.get_mut(path) else {
            return Canned::json(404, &serde_json::json!({"error": true, "message": "not found"}));
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }
}

/// Builder for a [`Script`].
pub struct ScriptBuilder {
    script: Script,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            script: Script::default(),
        }
    }

    /// Answer `path` with `status` and a JSON body.
    pub fn reply(self, path: &str, status: u16, body: Value) -> Self {
        self.canned(path, Canned::json(status, &body))
    }

    /// Answer `path` after sleeping for `delay`.
    #[allow(dead_code)]
    pub fn slow_reply(self, path: &str, delay: Duration, body: Value) -> Self {
        let mut canned = Canned::json(200, &body);
        canned.delay = Some(delay);
        self.canned(path, canned)
    }

    pub fn canned(mut self, path: &str, canned: Canned) -> Self {
        self.script
            .routes
            .entry(path.to_string())
            .or_default()
            .push_back(canned);
        self
    }

    pub fn build(self) -> Script {
        self.script
    }
}
