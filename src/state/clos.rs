//! CLO management view model: course selection, CLO drafts, and PO/PSO
//! mapping drafts.

#[cfg(test)]
#[path = "clos_test.rs"]
mod clos_test;

use crate::net::types::{BloomLevel, Clo, CloInput, CloMappingInput, Course, OutcomeKind};
use crate::state::courses::DEFAULT_VERSION;
use crate::state::forms::{self, FormDialog, ValidationError};

/// Editable draft of a CLO. `bloom_level` holds the raw select value.
#[derive(Clone, Debug, PartialEq)]
pub struct CloForm {
    pub clo_code: String,
    pub description: String,
    pub bloom_level: String,
    pub version: String,
    pub course_id: String,
}

impl CloForm {
    /// Empty draft for the given course.
    pub fn for_course(course_id: impl Into<String>) -> Self {
        Self {
            clo_code: String::new(),
            description: String::new(),
            bloom_level: String::new(),
            version: DEFAULT_VERSION.to_owned(),
            course_id: course_id.into(),
        }
    }

    pub fn from_clo(clo: &Clo) -> Self {
        Self {
            clo_code: clo.clo_code.clone(),
            description: clo.description.clone(),
            bloom_level: clo.bloom_level.as_str().to_owned(),
            version: clo.version.clone(),
            course_id: clo.course_id.clone(),
        }
    }

    /// # Errors
    ///
    /// The first invalid field; an unknown Bloom tag counts as missing.
    pub fn validate(&self) -> Result<CloInput, ValidationError> {
        let clo_code = forms::required("CLO code", &self.clo_code)?;
        let bloom_level = BloomLevel::parse(self.bloom_level.trim()).ok_or(ValidationError::Required("Bloom level"))?;
        let description = forms::required("Description", &self.description)?;
        let version = forms::required("Version", &self.version)?;
        let course_id = forms::required("Course", &self.course_id)?;
        Ok(CloInput {
            clo_code,
            description,
            bloom_level,
            version,
            course_id,
        })
    }
}

/// Draft of one CLO → PO/PSO mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct MappingForm {
    pub clo_id: String,
    pub outcome_kind: OutcomeKind,
    pub outcome_code: String,
    pub correlation: String,
}

impl MappingForm {
    pub fn for_clo(clo_id: impl Into<String>) -> Self {
        Self {
            clo_id: clo_id.into(),
            outcome_kind: OutcomeKind::Po,
            outcome_code: String::new(),
            correlation: "2".to_owned(),
        }
    }

    /// # Errors
    ///
    /// Blank outcome code, or a correlation outside 1..=3.
    pub fn validate(&self) -> Result<CloMappingInput, ValidationError> {
        let outcome_code = forms::required("Outcome", &self.outcome_code)?.to_uppercase();
        let correlation = forms::whole_number("Correlation", &self.correlation)?;
        let correlation = u8::try_from(correlation)
            .ok()
            .filter(|value| (1..=3).contains(value))
            .ok_or(ValidationError::OutOfRange {
                field: "Correlation",
                min: 1.0,
                max: 3.0,
            })?;
        Ok(CloMappingInput {
            clo_id: self.clo_id.clone(),
            outcome_kind: self.outcome_kind,
            outcome_code,
            correlation,
        })
    }
}

/// Everything the CLO page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClosState {
    pub courses: Vec<Course>,
    pub selected_course: Option<String>,
    pub clos: Vec<Clo>,
    pub loading: bool,
    pub dialog: Option<FormDialog<CloForm>>,
    pub mapping: Option<FormDialog<MappingForm>>,
}

impl ClosState {
    /// Replace the course list. Keeps the current selection if it still
    /// exists, otherwise selects the first course. Returns the selection
    /// when it changed, so the caller knows to load its CLOs.
    pub fn set_courses(&mut self, courses: Vec<Course>) -> Option<String> {
        self.courses = courses;
        let still_present = self
            .selected_course
            .as_deref()
            .is_some_and(|id| self.courses.iter().any(|course| course.id == id));
        if still_present {
            return None;
        }
        let first = self.courses.first().map(|course| course.id.clone());
        if first.is_none() {
            self.clos.clear();
        }
        self.selected_course.clone_from(&first);
        first
    }

    /// Switch course. Returns `false` if it was already selected.
    pub fn select_course(&mut self, id: &str) -> bool {
        if self.selected_course.as_deref() == Some(id) {
            return false;
        }
        self.selected_course = Some(id.to_owned());
        self.clos.clear();
        self.loading = true;
        true
    }

    /// Apply a CLO list, ignoring it if the user switched course meanwhile.
    pub fn set_clos(&mut self, course_id: &str, clos: Vec<Clo>) -> bool {
        if self.selected_course.as_deref() != Some(course_id) {
            return false;
        }
        self.clos = clos;
        self.loading = false;
        true
    }

    /// Open the create dialog. No-op without a selected course.
    pub fn open_create(&mut self) -> bool {
        let Some(course_id) = self.selected_course.as_deref() else {
            return false;
        };
        self.dialog = Some(FormDialog::create(CloForm::for_course(course_id)));
        true
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        let Some(clo) = self.clos.iter().find(|clo| clo.id == id) else {
            return false;
        };
        self.dialog = Some(FormDialog::edit(id, CloForm::from_clo(clo)));
        true
    }

    pub fn open_mapping(&mut self, clo_id: &str) -> bool {
        if !self.clos.iter().any(|clo| clo.id == clo_id) {
            return false;
        }
        self.mapping = Some(FormDialog::create(MappingForm::for_clo(clo_id)));
        true
    }
}
