//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::http::{HttpError, HttpRequest, HttpResponse, Transport};

/// Replays queued outcomes in order and records every request it saw.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, HttpError>>>,
    seen: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn reply_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.reply(status, body.to_string())
    }

    pub fn fail(self, err: HttpError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> Option<HttpRequest> {
        self.seen.borrow().last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.seen.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::NetworkFailure("no scripted reply".to_owned())))
    }
}
