use super::*;

fn course() -> Course {
    Course {
        id: "c1".into(),
        code: "CS301".into(),
        name: "Operating Systems".into(),
        description: None,
        credits: 4,
        category: "Core".into(),
        version: "2.0".into(),
        threshold: 60.0,
        is_active: true,
    }
}

fn filled() -> CourseForm {
    CourseForm {
        code: " CS301 ".into(),
        name: "Operating Systems".into(),
        credits: "4".into(),
        category: "Core".into(),
        ..CourseForm::default()
    }
}

#[test]
fn blank_form_uses_defaults() {
    let form = CourseForm::default();
    assert_eq!(form.version, "1.0");
    assert_eq!(form.threshold, "50");
}

#[test]
fn valid_form_builds_input() {
    let input = filled().validate().unwrap();
    assert_eq!(input.code, "CS301");
    assert_eq!(input.credits, 4);
    assert_eq!(input.version, "1.0");
    assert!((input.threshold - 50.0).abs() < f64::EPSILON);
    assert_eq!(input.description, "");
}

#[test]
fn missing_code_is_reported_first() {
    let form = CourseForm {
        code: String::new(),
        credits: "x".into(),
        ..filled()
    };
    assert_eq!(form.validate(), Err(ValidationError::Required("Course code")));
}

#[test]
fn non_numeric_credits_rejected() {
    let form = CourseForm {
        credits: "three".into(),
        ..filled()
    };
    assert_eq!(form.validate(), Err(ValidationError::NotANumber("Credits")));
}

#[test]
fn threshold_outside_percent_rejected() {
    let form = CourseForm {
        threshold: "120".into(),
        ..filled()
    };
    assert!(matches!(
        form.validate(),
        Err(ValidationError::OutOfRange { field: "Threshold", .. })
    ));
}

#[test]
fn edit_prefills_from_row() {
    let mut state = CoursesState::default();
    state.set_courses(vec![course()]);
    assert!(state.open_edit("c1"));
    let dialog = state.dialog.as_ref().unwrap();
    assert_eq!(dialog.editing.as_deref(), Some("c1"));
    assert_eq!(dialog.form.credits, "4");
    assert_eq!(dialog.form.threshold, "60");
    assert_eq!(dialog.form.version, "2.0");
}

#[test]
fn edit_of_missing_row_keeps_dialog_closed() {
    let mut state = CoursesState::default();
    assert!(!state.open_edit("nope"));
    assert!(state.dialog.is_none());
}

#[test]
fn pending_deactivation_resolves_row() {
    let mut state = CoursesState::default();
    state.set_courses(vec![course()]);
    state.confirm_deactivate = Some("c1".into());
    assert_eq!(state.pending_deactivation().map(|c| c.code.as_str()), Some("CS301"));
}
