use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::config::ClientConfig;
use crate::net::boundary::{FailureAction, resolve_failure};
use crate::net::client::ApiClient;
use crate::net::http::HttpError;
use crate::net::mock_transport::MockTransport;
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

#[test]
fn login_request_trims_email_but_not_password() {
    let request = login_request(" u1 ", " p1").unwrap();
    assert_eq!(request.email, "u1");
    assert_eq!(request.password, " p1");
}

#[test]
fn login_request_requires_both_fields() {
    assert_eq!(login_request("", "p1"), Err(ValidationError::Required("Email")));
    assert_eq!(login_request("u1", ""), Err(ValidationError::Required("Password")));
}

#[test]
fn invalid_credentials_message() {
    assert_eq!(
        login_error_message(&SessionError::InvalidCredentials),
        "Invalid email or password."
    );
}

#[test]
fn network_failure_message_is_friendly() {
    let err = SessionError::Http(HttpError::NetworkFailure("connection refused".into()));
    assert_eq!(
        login_error_message(&err),
        "Could not reach the server. Check your connection."
    );
}

#[test]
fn server_message_is_surfaced() {
    let err = SessionError::Http(HttpError::ServerError {
        status: 403,
        body: r#"{"message":"Account disabled"}"#.into(),
    });
    assert_eq!(login_error_message(&err), "Request failed (403): Account disabled");
}

#[test]
fn expiry_notice_does_not_survive_next_login() {
    let body = serde_json::json!({ "token": "T", "user": { "id": "u1", "role": "HOD" } });
    let transport = MockTransport::new().reply_json(200, &body).reply_json(200, &body);
    let client = ApiClient::new(ClientConfig::new("http://api.test/api"), transport);
    let mut store = SessionStore::new(MemoryStorage::new());
    store.initialize();
    let handle = RefCell::new(store);
    let mut notices = NoticeState::default();

    let request = login_request("u1", "p1").unwrap();
    let first = block_on(session::login(&handle, &client, &request));
    clear_after_login(&mut notices, &first);
    let epoch = handle.borrow().epoch();

    let expired = HttpError::AuthExpired { epoch: Some(epoch) };
    assert_eq!(resolve_failure(&handle, &expired), FailureAction::Redirect("/login"));
    notices.error(expired.user_message());
    assert_eq!(notices.items.len(), 1);

    let second = block_on(session::login(&handle, &client, &request));
    clear_after_login(&mut notices, &second);
    assert!(second.is_ok());
    assert!(notices.items.is_empty());
}

#[test]
fn failed_login_keeps_expiry_notice_visible() {
    let mut notices = NoticeState::default();
    notices.error("Your session has expired. Please sign in again.");
    clear_after_login(&mut notices, &Err(SessionError::InvalidCredentials));
    assert_eq!(notices.items.len(), 1);
}
