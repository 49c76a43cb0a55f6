//! Provider request/response shapes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reply to a login request.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(rename = "jwtToken")]
    pub jwt_token: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Reply to a password change.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(rename = "Token")]
    pub token: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FolderRequest<'a> {
    pub folder: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// First page of messages in a folder.
///
/// Message records are passed through as the provider sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    pub count: u64,
    #[serde(default)]
    pub messages: Vec<Value>,
}

/// Result of a mailbox-wide search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub count: u64,
    /// `true` iff `count` is zero.
    pub empty: bool,
    pub messages: Vec<Value>,
}

impl From<MessageList> for SearchResult {
    fn from(list: MessageList) -> Self {
        Self {
            count: list.count,
            empty: list.count == 0,
            messages: list.messages,
        }
    }
}
