//! Course management view model.
//!
//! DESIGN
//! ======
//! Form fields are kept as raw text so the inputs can be bound directly;
//! parsing and range checks happen once in `CourseForm::validate`.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::{Course, CourseInput};
use crate::state::forms::{self, FormDialog, ValidationError};

pub const DEFAULT_VERSION: &str = "1.0";
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Editable draft of a course.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseForm {
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: String,
    pub category: String,
    pub version: String,
    pub threshold: String,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            description: String::new(),
            credits: String::new(),
            category: String::new(),
            version: DEFAULT_VERSION.to_owned(),
            threshold: DEFAULT_THRESHOLD.to_string(),
        }
    }
}

impl CourseForm {
    /// Draft pre-filled from an existing row.
    pub fn from_course(course: &Course) -> Self {
        Self {
            code: course.code.clone(),
            name: course.name.clone(),
            description: course.description.clone().unwrap_or_default(),
            credits: course.credits.to_string(),
            category: course.category.clone(),
            version: course.version.clone(),
            threshold: course.threshold.to_string(),
        }
    }

    /// Turn the draft into a request body.
    ///
    /// # Errors
    ///
    /// The first field that fails validation, in form order.
    pub fn validate(&self) -> Result<CourseInput, ValidationError> {
        let code = forms::required("Course code", &self.code)?;
        let name = forms::required("Course name", &self.name)?;
        let credits = forms::whole_number("Credits", &self.credits)?;
        let category = forms::required("Category", &self.category)?;
        let version = forms::required("Version", &self.version)?;
        let threshold = forms::decimal_in_range("Threshold", &self.threshold, 0.0, 100.0)?;
        Ok(CourseInput {
            code,
            name,
            description: self.description.trim().to_owned(),
            credits,
            category,
            version,
            threshold,
        })
    }
}

/// Everything the courses page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoursesState {
    pub courses: Vec<Course>,
    pub loading: bool,
    pub dialog: Option<FormDialog<CourseForm>>,
    /// Course awaiting deactivation confirmation.
    pub confirm_deactivate: Option<String>,
}

impl CoursesState {
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn open_create(&mut self) {
        self.dialog = Some(FormDialog::create(CourseForm::default()));
    }

    /// Open the edit dialog for `id`. Returns `false` if the row is gone.
    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(course) = self.find(id) else {
            return false;
        };
        self.dialog = Some(FormDialog::edit(id, CourseForm::from_course(course)));
        true
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.loading = false;
    }

    /// Course name shown in the deactivation prompt.
    pub fn pending_deactivation(&self) -> Option<&Course> {
        self.confirm_deactivate.as_deref().and_then(|id| self.find(id))
    }
}
