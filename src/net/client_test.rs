use futures::executor::block_on;

use super::*;
use crate::net::mock_transport::MockTransport;
use crate::net::types::Course;

fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(ClientConfig::new("http://api.test/api"), transport)
}

fn creds(token: &str, epoch: u64) -> Credentials {
    Credentials {
        token: token.to_owned(),
        epoch,
    }
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn request_attaches_bearer_token_when_present() {
    let api = client(MockTransport::new().reply(200, "[]"));
    block_on(api.request(Some(&creds("T", 1)), Method::Get, "/courses", None)).unwrap();

    let sent = api.transport().last().unwrap();
    assert_eq!(sent.url, "http://api.test/api/courses");
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.header("Authorization"), Some("Bearer T"));
    assert_eq!(sent.header("Content-Type"), None);
}

#[test]
fn request_omits_authorization_without_credentials() {
    let api = client(MockTransport::new().reply(200, "{}"));
    block_on(api.request(None, Method::Post, "/auth/login", Some("{}".to_owned()))).unwrap();

    let sent = api.transport().last().unwrap();
    assert_eq!(sent.header("Authorization"), None);
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
    assert_eq!(sent.body.as_deref(), Some("{}"));
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn unauthorized_response_reports_issuing_epoch() {
    let api = client(MockTransport::new().reply(401, "expired"));
    let err = block_on(api.request(Some(&creds("T", 4)), Method::Get, "/courses", None)).unwrap_err();
    assert_eq!(err, HttpError::AuthExpired { epoch: Some(4) });
}

#[test]
fn server_error_keeps_status_and_body() {
    let api = client(MockTransport::new().reply(500, "boom"));
    let err = block_on(api.request(None, Method::Delete, "/courses/1", None)).unwrap_err();
    assert_eq!(
        err,
        HttpError::ServerError {
            status: 500,
            body: "boom".to_owned()
        }
    );
}

#[test]
fn network_failure_is_propagated_without_retry() {
    let api = client(MockTransport::new().fail(HttpError::NetworkFailure("offline".to_owned())).reply(200, "[]"));
    let err = block_on(api.request(None, Method::Get, "/courses", None)).unwrap_err();
    assert_eq!(err, HttpError::NetworkFailure("offline".to_owned()));
    assert_eq!(api.transport().requests().len(), 1);
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn get_json_decodes_body() {
    let body = serde_json::json!([{
        "id": 1, "code": "CS101", "name": "Intro", "credits": 3,
        "category": "Core", "version": "1.0", "threshold": 50
    }]);
    let api = client(MockTransport::new().reply_json(200, &body));
    let courses: Vec<Course> = block_on(api.get_json(None, "/courses")).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].code, "CS101");
}

#[test]
fn get_json_reports_schema_mismatch_as_decode() {
    let api = client(MockTransport::new().reply(200, "{\"unexpected\":true}"));
    let result: Result<Vec<Course>, _> = block_on(api.get_json(None, "/courses"));
    assert!(matches!(result, Err(HttpError::Decode(_))));
}

#[test]
fn send_unit_ignores_empty_success_body() {
    let api = client(MockTransport::new().reply(204, ""));
    block_on(api.send_unit::<()>(Some(&creds("T", 1)), Method::Delete, "/courses/9", None)).unwrap();
    let sent = api.transport().last().unwrap();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.body, None);
}

#[test]
fn send_json_serializes_payload() {
    let api = client(MockTransport::new().reply(200, "{\"ok\":true}"));
    let reply: serde_json::Value = block_on(api.send_json(
        None,
        Method::Put,
        "/courses/2",
        &serde_json::json!({ "name": "Renamed" }),
    ))
    .unwrap();
    assert_eq!(reply["ok"], serde_json::json!(true));
    let sent = api.transport().last().unwrap();
    assert_eq!(sent.body.as_deref(), Some("{\"name\":\"Renamed\"}"));
}
