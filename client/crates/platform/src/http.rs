//! REST transport
//!
//! Thin wrapper over `reqwest` bound to the platform API base URL.
//! Every request carries the bearer token from the shared [`TokenSlot`]
//! when one is present; the session store is the only writer.

use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, RwLock};

/// Shared credential slot
///
/// The session store writes the token on sign-in/restore and clears it
/// on sign-out; the [`ApiClient`] reads it on every request. Cloning
/// shares the same slot.
#[derive(Debug, Clone, Default)]
pub struct TokenSlot {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token
    pub fn set(&self, token: impl Into<String>) {
        *self.inner.write().expect("token slot poisoned") = Some(token.into());
    }

    /// Remove the stored token
    pub fn clear(&self) {
        *self.inner.write().expect("token slot poisoned") = None;
    }

    /// Current token, if any
    pub fn get(&self) -> Option<String> {
        self.inner.read().expect("token slot poisoned").clone()
    }

    pub fn is_set(&self) -> bool {
        self.inner.read().expect("token slot poisoned").is_some()
    }
}

/// Transport-level error
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Non-2xx response; the body text is preserved for the notice
    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    /// Connection / protocol failure
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// Status code of the failed response, if this was a status error
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Network(e) => e.status().map(|s| s.as_u16()),
            HttpError::Decode(_) => None,
        }
    }
}

/// Bearer-authenticated JSON API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: TokenSlot,
}

impl ApiClient {
    /// Create a client for the given API origin (e.g. `https://clickgenie.app`)
    pub fn new(base_url: impl Into<String>, token: TokenSlot) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// The credential slot this client reads from
    pub fn token_slot(&self) -> &TokenSlot {
        &self.token
    }

    /// GET a JSON resource
    pub async fn get_json(&self, path: &str) -> Result<Value, HttpError> {
        self.request(reqwest::Method::GET, path, None).await
    }

    /// Send a JSON body and return the JSON response
    pub async fn send_json<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<Value, HttpError> {
        let body = serde_json::to_value(body).map_err(HttpError::Decode)?;
        self.request(method, path, Some(body)).await
    }

    /// Send a body-less request (POST logout, DELETE, ...)
    pub async fn send_empty(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<Value, HttpError> {
        self.request(method, path, None).await
    }

    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, HttpError> {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self.http.request(method.clone(), &url);
        if let Some(token) = self.token.get() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &body {
            req = req.json(body);
        }

        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            tracing::warn!(
                method = %method,
                path = path,
                status = status.as_u16(),
                "API request failed"
            );
            let body = if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                text
            };
            return Err(HttpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if text.is_empty() {
            // 204-style responses surface as null
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(HttpError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_slot_shared() {
        let slot = TokenSlot::new();
        let clone = slot.clone();

        assert!(!slot.is_set());
        clone.set("session-abc");
        assert_eq!(slot.get(), Some("session-abc".to_string()));

        slot.clear();
        assert!(!clone.is_set());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("https://clickgenie.app/", TokenSlot::new());
        assert_eq!(client.base_url, "https://clickgenie.app");
    }

    #[test]
    fn test_status_error_display() {
        let err = HttpError::Status {
            status: 401,
            body: "Invalid session".to_string(),
        };
        assert_eq!(err.to_string(), "401: Invalid session");
        assert_eq!(err.status(), Some(401));
    }
}
