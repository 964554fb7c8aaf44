//! Form field validation shared by the management dialogs.
//!
//! Validation runs before submission; a form that fails never reaches the
//! network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Why a draft could not be turned into a request body.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: f64, max: f64 },
}

/// Trimmed value of a required field.
///
/// # Errors
///
/// `Required` if the value is blank.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_owned())
}

/// Required non-negative integer.
///
/// # Errors
///
/// `Required` if blank, `NotANumber` if it does not parse.
pub fn whole_number(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    let raw = required(field, value)?;
    raw.parse().map_err(|_| ValidationError::NotANumber(field))
}

/// Required decimal within `[min, max]`.
///
/// # Errors
///
/// `Required` if blank, `NotANumber` if it does not parse to a finite value,
/// `OutOfRange` if outside the bounds.
pub fn decimal_in_range(field: &'static str, value: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let raw = required(field, value)?;
    let parsed: f64 = raw.parse().map_err(|_| ValidationError::NotANumber(field))?;
    if !parsed.is_finite() {
        return Err(ValidationError::NotANumber(field));
    }
    if parsed < min || parsed > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(parsed)
}

/// Open create/edit dialog over a draft `F`.
///
/// `editing` holds the id of the record being edited; `None` means create.
#[derive(Clone, Debug, PartialEq)]
pub struct FormDialog<F> {
    pub editing: Option<String>,
    pub form: F,
    pub error: Option<String>,
    pub saving: bool,
}

impl<F> FormDialog<F> {
    pub fn create(form: F) -> Self {
        Self {
            editing: None,
            form,
            error: None,
            saving: false,
        }
    }

    pub fn edit(id: impl Into<String>, form: F) -> Self {
        Self {
            editing: Some(id.into()),
            ..Self::create(form)
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Lock the dialog for submission. Returns `false` if a save is already
    /// running, so double clicks send one request.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.error = None;
        true
    }

    /// Unlock after a failed save, keeping the draft for correction.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.error = Some(message.into());
    }
}
