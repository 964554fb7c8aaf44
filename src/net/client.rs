//! Authenticated JSON client over a [`Transport`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page-level call goes through `ApiClient::request`, which is the one
//! place the bearer token is attached and response statuses are classified.
//! The client is session-agnostic: callers pass a `Credentials` snapshot and
//! receive typed errors back.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{BrowserTransport, HttpError, HttpRequest, HttpResponse, Method, Transport, bearer_value, classify};
use crate::config::ClientConfig;

/// Token snapshot taken from the session store when a request is issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    /// Session epoch the token belongs to; echoed back on 401.
    pub epoch: u64,
}

/// REST client bound to a fixed base address.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Browser client for the given config.
    pub fn browser(config: ClientConfig) -> Self {
        Self::new(config, BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build and send one request. No retries; every failure is terminal for
    /// this call.
    ///
    /// # Errors
    ///
    /// `NetworkFailure` when no response arrived, `AuthExpired` on 401,
    /// `ServerError` on any other non-2xx status.
    pub async fn request(
        &self,
        credentials: Option<&Credentials>,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, HttpError> {
        let request = build_request(&self.config, credentials, method, path, body);
        let result = self
            .transport
            .send(request)
            .await
            .and_then(|resp| classify(resp, credentials.map(|c| c.epoch)));
        if let Err(err) = &result {
            leptos::logging::warn!("{method} {path} failed: {err}");
        }
        result
    }

    /// `GET` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`] from [`Self::request`], or `Decode` if the body does
    /// not match `R`.
    pub async fn get_json<R: DeserializeOwned>(&self, credentials: Option<&Credentials>, path: &str) -> Result<R, HttpError> {
        let resp = self.request(credentials, Method::Get, path, None).await?;
        decode(&resp.body)
    }

    /// Send a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`] from [`Self::request`], or `Decode` on a schema mismatch.
    pub async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        credentials: Option<&Credentials>,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<R, HttpError> {
        let raw = encode(body)?;
        let resp = self.request(credentials, method, path, Some(raw)).await?;
        decode(&resp.body)
    }

    /// Send an optional JSON body and ignore the response payload.
    ///
    /// # Errors
    ///
    /// Any [`HttpError`] from [`Self::request`].
    pub async fn send_unit<B: Serialize>(
        &self,
        credentials: Option<&Credentials>,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), HttpError> {
        let raw = body.map(encode).transpose()?;
        self.request(credentials, method, path, raw).await?;
        Ok(())
    }
}

pub(crate) fn build_request(
    config: &ClientConfig,
    credentials: Option<&Credentials>,
    method: Method,
    path: &str,
    body: Option<String>,
) -> HttpRequest {
    let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
    if body.is_some() {
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
    }
    if let Some(credentials) = credentials {
        headers.push(("Authorization".to_owned(), bearer_value(&credentials.token)));
    }
    HttpRequest {
        method,
        url: config.join(path),
        headers,
        body,
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, HttpError> {
    serde_json::to_string(body).map_err(|e| HttpError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, HttpError> {
    serde_json::from_str(body).map_err(|e| HttpError::Decode(e.to_string()))
}
