//! Pending add/edit form state.
//!
//! # Responsibility
//! - Hold the text a user is typing plus one error slot per field.
//! - Bridge validator output into per-field messages for rendering.
//!
//! # Invariants
//! - Editing a field clears that field's error slot only.
//! - `validate()` always recomputes both slots from scratch.

use crate::model::todo::TodoItem;
use crate::validation::{validate_todo, FieldError, ValidationReport};

/// Draft backing the add and edit screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    title: String,
    description: String,
    title_error: Option<FieldError>,
    description_error: Option<FieldError>,
}

impl TodoDraft {
    /// Empty draft for the add screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing item for the edit screen.
    pub fn for_item(item: &TodoItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.title_error = None;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.description_error = None;
    }

    pub fn title_error(&self) -> Option<&'static str> {
        self.title_error.map(FieldError::message)
    }

    pub fn description_error(&self) -> Option<&'static str> {
        self.description_error.map(FieldError::message)
    }

    /// Runs validation and stores the resulting messages.
    ///
    /// Returns the full report; `report.is_valid()` decides whether the
    /// caller may commit.
    pub fn validate(&mut self) -> ValidationReport {
        let report = validate_todo(&self.title, &self.description);
        self.record(&report);
        report
    }

    /// Stores messages from an externally produced report.
    pub fn record(&mut self, report: &ValidationReport) {
        self.title_error = report.title;
        self.description_error = report.description;
    }

    /// Copies out the pending text for committing.
    pub fn to_text(&self) -> (String, String) {
        (self.title.clone(), self.description.clone())
    }
}
