use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Dr. Rao".to_owned(),
        email: Some("rao@example.edu".to_owned()),
        role: Role::Hod,
        department: Some(Department {
            id: "d1".to_owned(),
            name: "Computer Science".to_owned(),
            code: Some("CSE".to_owned()),
        }),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_to_upper_tags() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
    assert_eq!(serde_json::to_string(&Role::Hod).unwrap(), "\"HOD\"");
    assert_eq!(serde_json::to_string(&Role::Faculty).unwrap(), "\"FACULTY\"");
}

#[test]
fn role_rejects_unknown_tag() {
    assert!(serde_json::from_str::<Role>("\"STUDENT\"").is_err());
}

#[test]
fn role_display_matches_wire_tag() {
    assert_eq!(Role::Faculty.to_string(), "FACULTY");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_ids() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Asha",
        "role": "FACULTY",
        "department": { "id": 7, "name": "Mechanical" }
    }))
    .unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.department.unwrap().id, "7");
    assert_eq!(user.email, None);
}

#[test]
fn user_survives_storage_serialization() {
    let user = make_user();
    let raw = serde_json::to_string(&user).unwrap();
    let back: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn user_without_name_falls_back_to_id() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "u1", "role": "HOD" })).unwrap();
    assert_eq!(user.name, "");
    assert_eq!(user.display_name(), "u1");
    assert_eq!(make_user().display_name(), "Dr. Rao");
}

#[test]
fn user_rejects_object_id() {
    let result = serde_json::from_value::<User>(serde_json::json!({
        "id": { "nested": true },
        "name": "x",
        "role": "HOD"
    }));
    assert!(result.is_err());
}

// =============================================================
// Courses / CLOs
// =============================================================

#[test]
fn course_is_inactive_when_flag_missing() {
    let course: Course = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "code": "CS301",
        "name": "Algorithms",
        "credits": 4,
        "category": "Core",
        "version": "1.0",
        "threshold": 50.0
    }))
    .unwrap();
    assert!(!course.is_active);
    assert_eq!(course.description, None);
}

#[test]
fn course_input_uses_camel_case() {
    let input = CourseInput {
        code: "CS301".to_owned(),
        name: "Algorithms".to_owned(),
        description: String::new(),
        credits: 4,
        category: "Core".to_owned(),
        version: "1.0".to_owned(),
        threshold: 55.5,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["threshold"], serde_json::json!(55.5));
    assert_eq!(value["credits"], serde_json::json!(4));
}

#[test]
fn clo_reads_camel_case_fields() {
    let clo: Clo = serde_json::from_value(serde_json::json!({
        "id": 3,
        "cloCode": "CLO1",
        "description": "Analyze recurrences",
        "bloomLevel": "ANALYZE",
        "version": "1.0",
        "courseId": 9,
        "isActive": false
    }))
    .unwrap();
    assert_eq!(clo.clo_code, "CLO1");
    assert_eq!(clo.bloom_level, BloomLevel::Analyze);
    assert_eq!(clo.course_id, "9");
    assert!(!clo.is_active);
}

#[test]
fn bloom_levels_parse_in_taxonomy_order() {
    let tags: Vec<&str> = BloomLevel::ALL.iter().map(|l| l.as_str()).collect();
    assert_eq!(tags, ["REMEMBER", "UNDERSTAND", "APPLY", "ANALYZE", "EVALUATE", "CREATE"]);
    assert_eq!(BloomLevel::parse("APPLY"), Some(BloomLevel::Apply));
    assert_eq!(BloomLevel::parse("apply"), None);
}

#[test]
fn mapping_input_serializes_outcome_kind() {
    let mapping = CloMappingInput {
        clo_id: "3".to_owned(),
        outcome_kind: OutcomeKind::Pso,
        outcome_code: "PSO1".to_owned(),
        correlation: 2,
    };
    let value = serde_json::to_value(&mapping).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "cloId": "3", "outcomeKind": "PSO", "outcomeCode": "PSO1", "correlation": 2 })
    );
}

// =============================================================
// Faculty / dashboard
// =============================================================

#[test]
fn faculty_input_omits_password_on_update() {
    let input = FacultyInput {
        name: "Asha".to_owned(),
        email: "asha@example.edu".to_owned(),
        password: None,
        designation: "Assistant Professor".to_owned(),
    };
    let value = serde_json::to_value(&input).unwrap();
    assert!(value.get("password").is_none());
}

#[test]
fn dashboard_stats_reads_active_clos_key() {
    let stats: DashboardStats = serde_json::from_value(serde_json::json!({
        "totalCourses": 12,
        "activeCLOs": 48,
        "programOutcomes": 12
    }))
    .unwrap();
    assert_eq!(stats.total_courses, 12);
    assert_eq!(stats.active_clos, 48);
    assert_eq!(stats.pending_reviews, 0);
}
