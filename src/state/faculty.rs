//! Faculty management view model (heads of department only).

#[cfg(test)]
#[path = "faculty_test.rs"]
mod faculty_test;

use crate::net::types::{Course, CourseAssignment, Faculty, FacultyInput};
use crate::state::forms::{self, FormDialog, ValidationError};

/// Editable draft of a faculty record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacultyForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub designation: String,
}

impl FacultyForm {
    pub fn from_faculty(faculty: &Faculty) -> Self {
        Self {
            name: faculty.name.clone(),
            email: faculty.email.clone(),
            password: String::new(),
            designation: faculty.designation.clone().unwrap_or_default(),
        }
    }

    /// Build the request body. The password is required when creating and
    /// never sent when editing.
    ///
    /// # Errors
    ///
    /// The first invalid field.
    pub fn validate(&self, creating: bool) -> Result<FacultyInput, ValidationError> {
        let name = forms::required("Name", &self.name)?;
        let email = forms::required("Email", &self.email)?;
        let password = if creating {
            Some(forms::required("Password", &self.password)?)
        } else {
            None
        };
        Ok(FacultyInput {
            name,
            email,
            password,
            designation: self.designation.trim().to_owned(),
        })
    }
}

/// Course assignment dialog for one faculty member.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignForm {
    pub faculty_id: String,
    /// Course picked in the select.
    pub course_id: String,
    /// Courses already assigned, loaded when the dialog opens.
    pub assigned: Vec<Course>,
}

impl AssignForm {
    pub fn for_faculty(faculty_id: impl Into<String>) -> Self {
        Self {
            faculty_id: faculty_id.into(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// `Required` when no course is picked.
    pub fn validate(&self) -> Result<CourseAssignment, ValidationError> {
        Ok(CourseAssignment {
            faculty_id: self.faculty_id.clone(),
            course_id: forms::required("Course", &self.course_id)?,
        })
    }

    /// Removal body for an assigned course.
    pub fn removal(&self, course_id: &str) -> CourseAssignment {
        CourseAssignment {
            faculty_id: self.faculty_id.clone(),
            course_id: course_id.to_owned(),
        }
    }
}

/// Everything the faculty page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FacultyState {
    pub faculty: Vec<Faculty>,
    /// Department course catalogue offered in the assignment select.
    pub courses: Vec<Course>,
    pub loading: bool,
    pub dialog: Option<FormDialog<FacultyForm>>,
    pub assign: Option<FormDialog<AssignForm>>,
    pub confirm_delete: Option<String>,
}

impl FacultyState {
    pub fn find(&self, id: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|member| member.id == id)
    }

    pub fn set_faculty(&mut self, faculty: Vec<Faculty>) {
        self.faculty = faculty;
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.dialog = Some(FormDialog::create(FacultyForm::default()));
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(member) = self.find(id) else {
            return false;
        };
        self.dialog = Some(FormDialog::edit(id, FacultyForm::from_faculty(member)));
        true
    }

    pub fn open_assign(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.assign = Some(FormDialog::edit(id, AssignForm::for_faculty(id)));
        true
    }

    /// Store the assigned list if the dialog is still open for `faculty_id`.
    pub fn set_assigned(&mut self, faculty_id: &str, assigned: Vec<Course>) -> bool {
        match self.assign.as_mut() {
            Some(dialog) if dialog.form.faculty_id == faculty_id => {
                dialog.form.assigned = assigned;
                true
            }
            _ => false,
        }
    }

    /// Catalogue courses not yet assigned to the open dialog's faculty.
    pub fn assignable_courses(&self) -> Vec<&Course> {
        let assigned = self
            .assign
            .as_ref()
            .map_or(&[] as &[Course], |dialog| dialog.form.assigned.as_slice());
        self.courses
            .iter()
            .filter(|course| !assigned.iter().any(|taken| taken.id == course.id))
            .collect()
    }
}
