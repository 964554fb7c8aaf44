use futures::executor::block_on;

use super::*;
use crate::config::ClientConfig;
use crate::net::mock_transport::MockTransport;
use crate::net::types::{BloomLevel, OutcomeKind, Role};

fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(ClientConfig::new("http://api.test/api"), transport)
}

fn creds() -> Option<Credentials> {
    Some(Credentials {
        token: "T".to_owned(),
        epoch: 1,
    })
}

fn sent(api: &ApiClient<MockTransport>) -> (Method, String) {
    let req = api.transport().last().unwrap();
    (req.method, req.url.trim_start_matches("http://api.test/api").to_owned())
}

// =============================================================
// Path helpers
// =============================================================

#[test]
fn path_helpers_format_ids() {
    assert_eq!(course_path("c1"), "/courses/c1");
    assert_eq!(clo_path("7"), "/clos/7");
    assert_eq!(clos_for_course_path("c1"), "/clos/course/c1");
    assert_eq!(faculty_path("f2"), "/hod/faculty/f2");
    assert_eq!(hod_course_path("c3"), "/hod/course/c3");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn login_posts_credentials_without_bearer() {
    let body = serde_json::json!({
        "token": "T",
        "user": { "id": "u1", "name": "Rao", "role": "HOD" }
    });
    let client = client(MockTransport::new().reply_json(200, &body));
    let api = Api::new(&client, creds());
    let resp = block_on(api.login(&LoginRequest {
        email: "u1".to_owned(),
        password: "p1".to_owned(),
    }))
    .unwrap();

    assert_eq!(resp.token, "T");
    assert_eq!(resp.user.role, Role::Hod);
    let req = client.transport().last().unwrap();
    assert_eq!(req.header("Authorization"), None);
    assert_eq!(sent(&client), (Method::Post, "/auth/login".to_owned()));
}

#[test]
fn profile_unwraps_user_envelope() {
    let body = serde_json::json!({ "user": { "id": 5, "name": "Asha", "role": "FACULTY" } });
    let client = client(MockTransport::new().reply_json(200, &body));
    let user = block_on(Api::new(&client, creds()).profile()).unwrap();
    assert_eq!(user.id, "5");
    assert_eq!(sent(&client), (Method::Get, "/auth/profile".to_owned()));
}

// =============================================================
// Courses and CLOs
// =============================================================

#[test]
fn course_mutations_hit_expected_routes() {
    let input = CourseInput {
        code: "CS301".to_owned(),
        name: "Algorithms".to_owned(),
        description: String::new(),
        credits: 4,
        category: "Core".to_owned(),
        version: "1.0".to_owned(),
        threshold: 50.0,
    };
    let client = client(MockTransport::new().reply(201, "").reply(200, "").reply(200, ""));
    let api = Api::new(&client, creds());

    block_on(api.create_course(&input)).unwrap();
    assert_eq!(sent(&client), (Method::Post, "/courses".to_owned()));
    block_on(api.update_course("c1", &input)).unwrap();
    assert_eq!(sent(&client), (Method::Put, "/courses/c1".to_owned()));
    block_on(api.delete_course("c1")).unwrap();
    assert_eq!(sent(&client), (Method::Delete, "/courses/c1".to_owned()));
}

#[test]
fn clo_calls_hit_expected_routes() {
    let client = client(MockTransport::new().reply(200, "[]").reply(200, "").reply(200, ""));
    let api = Api::new(&client, creds());

    let clos = block_on(api.clos_for_course("c9")).unwrap();
    assert!(clos.is_empty());
    assert_eq!(sent(&client), (Method::Get, "/clos/course/c9".to_owned()));

    let input = CloInput {
        clo_code: "CLO1".to_owned(),
        description: "Apply graph search".to_owned(),
        bloom_level: BloomLevel::Apply,
        version: "1.0".to_owned(),
        course_id: "c9".to_owned(),
    };
    block_on(api.update_clo("3", &input)).unwrap();
    assert_eq!(sent(&client), (Method::Put, "/clos/3".to_owned()));

    let mapping = CloMappingInput {
        clo_id: "3".to_owned(),
        outcome_kind: OutcomeKind::Po,
        outcome_code: "PO2".to_owned(),
        correlation: 3,
    };
    block_on(api.map_clo(&mapping)).unwrap();
    assert_eq!(sent(&client), (Method::Post, "/clos/mapping".to_owned()));
}

// =============================================================
// HOD namespace
// =============================================================

#[test]
fn remove_course_sends_delete_with_body() {
    let client = client(MockTransport::new().reply(200, ""));
    let api = Api::new(&client, creds());
    let assignment = CourseAssignment {
        faculty_id: "f1".to_owned(),
        course_id: "c1".to_owned(),
    };
    block_on(api.remove_course(&assignment)).unwrap();

    let req = client.transport().last().unwrap();
    assert_eq!(req.method, Method::Delete);
    assert!(req.url.ends_with("/hod/faculty/remove-course"));
    assert_eq!(req.body.as_deref(), Some("{\"facultyId\":\"f1\",\"courseId\":\"c1\"}"));
}

#[test]
fn faculty_lookups_hit_expected_routes() {
    let faculty = serde_json::json!({ "id": "f1", "name": "Asha", "email": "a@x.edu" });
    let with_courses = serde_json::json!({ "id": "f1", "name": "Asha", "email": "a@x.edu", "courses": [] });
    let client = client(
        MockTransport::new()
            .reply_json(200, &faculty)
            .reply(200, "[]")
            .reply_json(200, &with_courses)
            .reply(200, "[]"),
    );
    let api = Api::new(&client, creds());

    assert_eq!(block_on(api.faculty_by_id("f1")).unwrap().name, "Asha");
    assert_eq!(sent(&client), (Method::Get, "/hod/faculty/f1".to_owned()));
    block_on(api.faculty_by_department("d1")).unwrap();
    assert_eq!(sent(&client), (Method::Get, "/hod/faculty/department/d1".to_owned()));
    let detail = block_on(api.faculty_with_courses("f1")).unwrap();
    assert_eq!(detail.faculty.id, "f1");
    assert_eq!(sent(&client), (Method::Get, "/hod/faculty/f1/courses".to_owned()));
    block_on(api.courses_for_faculty("f1")).unwrap();
    assert_eq!(sent(&client), (Method::Get, "/hod/faculty/f1/assigned-courses".to_owned()));
}

#[test]
fn hod_clo_routes_are_namespaced() {
    let client = client(MockTransport::new().reply(200, "[]").reply(200, "[]").reply(200, ""));
    let api = Api::new(&client, creds());

    block_on(api.hod_clos_for_course("c1")).unwrap();
    assert_eq!(sent(&client), (Method::Get, "/hod/clo/course/c1".to_owned()));
    block_on(api.hod_clo_mappings("c1")).unwrap();
    assert_eq!(sent(&client), (Method::Get, "/hod/clo/mappings/c1".to_owned()));
    let mapping = CloMappingInput {
        clo_id: "3".to_owned(),
        outcome_kind: OutcomeKind::Pso,
        outcome_code: "PSO1".to_owned(),
        correlation: 1,
    };
    block_on(api.hod_map_clo(&mapping)).unwrap();
    assert_eq!(sent(&client), (Method::Post, "/hod/clo/map".to_owned()));
}

#[test]
fn dashboard_stats_reads_counters() {
    let body = serde_json::json!({ "totalCourses": 3, "activeCLOs": 9, "programOutcomes": 12, "pendingReviews": 1 });
    let client = client(MockTransport::new().reply_json(200, &body));
    let stats = block_on(Api::new(&client, creds()).dashboard_stats()).unwrap();
    assert_eq!(stats.active_clos, 9);
    assert_eq!(sent(&client), (Method::Get, "/hod/dashboard/stats".to_owned()));
}
