//! Requests as seen by the fake API server.

use serde_json::Value;
use std::collections::HashMap;

/// A request received by the fake server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lower-cased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn form(&self) -> HashMap<String, String> {
        serde_urlencoded::from_str(&self.body).expect("request body is not a form")
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_form_pairs() {
        let req = RecordedRequest {
            method: "POST".into(),
            path: "/".into(),
            headers: vec![],
            body: "username=a%40b.c&password=Pa%24%24+word&code=123456".into(),
        };
        let form = req.form();
        assert_eq!(form["username"], "a@b.c");
        assert_eq!(form["password"], "Pa$$ word");
        assert_eq!(form["code"], "123456");
    }
}
