//! HTTP transport seam and error taxonomy.
//!
//! Client-side (hydrate): `BrowserTransport` performs real calls via `gloo-net`.
//! Server-side (SSR) and native tests: `BrowserTransport` reports a network
//! failure, since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a typed [`HttpError`]; nothing here navigates or touches
//! session state. That is left to `net::boundary`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

/// Errors surfaced to callers of the API client.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    /// The request never produced a response.
    #[error("network failure: {0}")]
    NetworkFailure(String),
    /// The server answered 401. `epoch` identifies the session whose token
    /// was attached, or `None` if the request carried no token.
    #[error("session expired")]
    AuthExpired { epoch: Option<u64> },
    /// Any other non-2xx status.
    #[error("server error {status}: {body}")]
    ServerError { status: u16, body: String },
    /// A 2xx body that did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl HttpError {
    /// Short user-facing description for notice banners.
    pub fn user_message(&self) -> String {
        match self {
            Self::NetworkFailure(_) => "Could not reach the server. Check your connection.".to_owned(),
            Self::AuthExpired { epoch: Some(_) } => "Your session has expired. Please sign in again.".to_owned(),
            Self::AuthExpired { epoch: None } => "Not signed in. Please sign in.".to_owned(),
            Self::ServerError { status, body } => {
                let detail = server_error_detail(body);
                match detail {
                    Some(detail) => format!("Request failed ({status}): {detail}"),
                    None => format!("Request failed ({status})."),
                }
            }
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved outbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name` case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`HttpRequest`] to the server.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// `Authorization` header value for a bearer token.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a response status onto the error taxonomy. `epoch` is the session
/// epoch of the token the request carried.
///
/// # Errors
///
/// Returns `AuthExpired` for 401 and `ServerError` for every other non-2xx.
pub fn classify(response: HttpResponse, epoch: Option<u64>) -> Result<HttpResponse, HttpError> {
    if response.is_success() {
        return Ok(response);
    }
    if response.status == 401 {
        return Err(HttpError::AuthExpired { epoch });
    }
    Err(HttpError::ServerError {
        status: response.status,
        body: response.body,
    })
}

/// Pull a `message`/`error` field out of a JSON error body, if there is one.
fn server_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match request.body {
                Some(body) => {
                    builder
                        .body(body)
                        .map_err(|e| HttpError::NetworkFailure(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| HttpError::NetworkFailure(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| HttpError::NetworkFailure(e.to_string()))?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(HttpError::NetworkFailure("not available on server".to_owned()))
        }
    }
}
