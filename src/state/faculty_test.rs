use super::*;

fn member(id: &str) -> Faculty {
    Faculty {
        id: id.into(),
        name: "Dr. Rao".into(),
        email: "rao@college.edu".into(),
        designation: Some("Professor".into()),
        department: None,
        is_active: true,
    }
}

fn course(id: &str) -> Course {
    Course {
        id: id.into(),
        code: format!("CS{id}"),
        name: "Networks".into(),
        description: None,
        credits: 3,
        category: "Core".into(),
        version: "1.0".into(),
        threshold: 50.0,
        is_active: true,
    }
}

#[test]
fn password_required_only_on_create() {
    let form = FacultyForm {
        name: "Dr. Rao".into(),
        email: "rao@college.edu".into(),
        ..FacultyForm::default()
    };
    assert_eq!(form.validate(true), Err(ValidationError::Required("Password")));
    let input = form.validate(false).unwrap();
    assert_eq!(input.password, None);
}

#[test]
fn edit_never_sends_password() {
    let form = FacultyForm {
        password: "typed anyway".into(),
        ..FacultyForm::from_faculty(&member("f1"))
    };
    assert_eq!(form.validate(false).unwrap().password, None);
    assert_eq!(form.validate(true).unwrap().password.as_deref(), Some("typed anyway"));
}

#[test]
fn edit_prefills_designation() {
    let mut state = FacultyState::default();
    state.set_faculty(vec![member("f1")]);
    assert!(state.open_edit("f1"));
    let dialog = state.dialog.as_ref().unwrap();
    assert_eq!(dialog.form.designation, "Professor");
    assert!(dialog.form.password.is_empty());
}

#[test]
fn assignment_requires_course() {
    let form = AssignForm::for_faculty("f1");
    assert_eq!(form.validate(), Err(ValidationError::Required("Course")));
    let form = AssignForm {
        course_id: "c2".into(),
        ..form
    };
    assert_eq!(
        form.validate(),
        Ok(CourseAssignment {
            faculty_id: "f1".into(),
            course_id: "c2".into()
        })
    );
}

#[test]
fn assignable_excludes_already_assigned() {
    let mut state = FacultyState::default();
    state.set_faculty(vec![member("f1")]);
    state.courses = vec![course("1"), course("2"), course("3")];
    assert!(state.open_assign("f1"));
    assert!(state.set_assigned("f1", vec![course("2")]));
    let ids: Vec<&str> = state.assignable_courses().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn late_assigned_list_for_other_faculty_is_dropped() {
    let mut state = FacultyState::default();
    state.set_faculty(vec![member("f1"), member("f2")]);
    state.open_assign("f2");
    assert!(!state.set_assigned("f1", vec![course("1")]));
    assert!(state.assign.as_ref().unwrap().form.assigned.is_empty());
}

#[test]
fn removal_targets_dialog_faculty() {
    let form = AssignForm::for_faculty("f1");
    assert_eq!(form.removal("c9").course_id, "c9");
    assert_eq!(form.removal("c9").faculty_id, "f1");
}
