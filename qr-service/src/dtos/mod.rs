//! Request intake: query pairs plus an optional parsed body.

use axum::http::{header, HeaderMap};
use serde_json::{Map, Value};

/// Raw parameters of one QR request, before any defaulting or validation.
#[derive(Debug, Clone, Default)]
pub struct QrRequest {
    query: Vec<(String, String)>,
    body: Option<Map<String, Value>>,
}

impl QrRequest {
    pub fn new(query: Vec<(String, String)>, body: Option<Map<String, Value>>) -> Self {
        Self { query, body }
    }

    /// Decodes the query string and, for JSON or form bodies, the body.
    ///
    /// A body that is not a JSON object (or cannot be parsed) is treated as
    /// absent.
    pub fn from_parts(raw_query: Option<&str>, headers: &HeaderMap, body: &[u8]) -> Self {
        let query = raw_query
            .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
            .unwrap_or_default();

        Self {
            query,
            body: parse_body(headers, body),
        }
    }

    /// First query value for `name`.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Body field `name`; `null` counts as absent.
    pub fn body(&self, name: &str) -> Option<&Value> {
        self.body
            .as_ref()
            .and_then(|fields| fields.get(name))
            .filter(|value| !value.is_null())
    }
}

fn parse_body(headers: &HeaderMap, body: &[u8]) -> Option<Map<String, Value>> {
    if body.is_empty() {
        return None;
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)?;

    if content_type.eq_ignore_ascii_case("application/json") {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Some(fields),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Ignoring malformed JSON body: {}", e);
                None
            }
        }
    } else if content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
            .ok()
            .map(|pairs| {
                let mut fields = Map::new();
                for (key, value) in pairs {
                    fields.entry(key).or_insert(Value::String(value));
                }
                fields
            })
    } else {
        None
    }
}
