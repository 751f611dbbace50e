//! Field-length validation for pending todo text.
//!
//! # Responsibility
//! - Check a proposed title/description pair before it is committed.
//! - Produce field-scoped, user-facing messages.
//!
//! # Invariants
//! - Validation is pure: no state, no side effects, no logging.
//! - Lengths are counted in UTF-16 code units, the unit the host UI's
//!   text fields report.
//! - The title has one message slot; the max-length check runs last.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted title length.
pub const TITLE_MIN_LEN: usize = 3;
/// Maximum accepted title length.
pub const TITLE_MAX_LEN: usize = 50;
/// Maximum accepted description length.
pub const DESCRIPTION_MAX_LEN: usize = 120;

/// Input field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Title,
    Description,
}

/// Single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    TitleTooShort,
    TitleTooLong,
    DescriptionTooLong,
}

impl FieldError {
    /// Field the message should be rendered next to.
    pub fn field(self) -> TodoField {
        match self {
            Self::TitleTooShort | Self::TitleTooLong => TodoField::Title,
            Self::DescriptionTooLong => TodoField::Description,
        }
    }

    /// Stable user-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Self::TitleTooShort => "Title must be at least 3 characters.",
            Self::TitleTooLong => "Title must not exceed 50 characters.",
            Self::DescriptionTooLong => "Description must not exceed 120 characters.",
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for FieldError {}

/// Outcome of validating one title/description pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub title: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl ValidationReport {
    /// Returns true when no field error was recorded.
    pub fn is_valid(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Error recorded for `field`, if any.
    pub fn error_for(&self, field: TodoField) -> Option<FieldError> {
        match field {
            TodoField::Title => self.title,
            TodoField::Description => self.description,
        }
    }

    /// Message for the title input, if any.
    pub fn title_message(&self) -> Option<&'static str> {
        self.title.map(FieldError::message)
    }

    /// Message for the description input, if any.
    pub fn description_message(&self) -> Option<&'static str> {
        self.description.map(FieldError::message)
    }

    /// Iterates recorded errors in field order.
    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.title.into_iter().chain(self.description)
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in self.errors() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Length of `value` in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane count as two.
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validates a proposed title and description.
pub fn validate_todo(title: &str, description: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    let title_len = text_len(title);
    if title_len < TITLE_MIN_LEN {
        report.title = Some(FieldError::TitleTooShort);
    }
    if title_len > TITLE_MAX_LEN {
        report.title = Some(FieldError::TitleTooLong);
    }
    if text_len(description) > DESCRIPTION_MAX_LEN {
        report.description = Some(FieldError::DescriptionTooLong);
    }

    report
}
