//! Todo item domain model.
//!
//! # Responsibility
//! - Define the record shared by the list and edit screens.
//! - Provide in-place mutation helpers for edit and completion toggling.
//!
//! # Invariants
//! - `item_id` never changes after creation.
//! - Mutation helpers do not validate; callers validate pending text first.

use serde::{Deserialize, Serialize};

/// Identifier for one todo item within a store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = u32;

/// One entry of the todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Store-assigned id, see `IdPolicy` for how it is derived.
    pub item_id: TodoId,
    /// Short label, 3..=50 chars when committed.
    pub title: String,
    /// Free text, at most 120 chars when committed.
    pub description: String,
    /// Completion checkbox state.
    #[serde(default)]
    pub is_completed: bool,
}

impl TodoItem {
    /// Creates a not-yet-completed item.
    pub fn new(item_id: TodoId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            item_id,
            title: title.into(),
            description: description.into(),
            is_completed: false,
        }
    }

    /// Flips completion state and returns the new value.
    pub fn toggle_completion(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }

    /// Overwrites title and description, leaving id and completion untouched.
    pub fn update_text(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.title = title.into();
        self.description = description.into();
    }
}
