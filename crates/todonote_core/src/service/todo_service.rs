//! Todo use-case service.
//!
//! # Responsibility
//! - Provide validate-then-commit create/edit flows for the UI layer.
//! - Provide completion toggling, deletion and lookups, by row for list
//!   actions and by id for route-driven callers.
//! - Resolve the edit route's string-encoded id to an item.
//!
//! # Invariants
//! - No text reaches the store without passing `validate_todo`.
//! - A failed validation leaves the store unchanged.
//! - Logs carry ids and counts only, never user text.

use crate::form::TodoDraft;
use crate::model::todo::{TodoId, TodoItem};
use crate::store::todo_store::{StoreError, TodoStore};
use crate::validation::{validate_todo, ValidationReport};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for todo use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoServiceError {
    /// Pending text failed field validation.
    Validation(ValidationReport),
    /// Target item does not exist.
    NotFound(TodoId),
    /// List row index is past the end of the list.
    RowOutOfRange(usize),
    /// The store cannot issue another id.
    IdsExhausted,
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(report) => write!(f, "validation failed: {report}"),
            Self::NotFound(item_id) => write!(f, "todo not found: {item_id}"),
            Self::RowOutOfRange(index) => write!(f, "todo row out of range: {index}"),
            Self::IdsExhausted => f.write_str("todo ids exhausted"),
        }
    }
}

impl Error for TodoServiceError {}

impl From<StoreError> for TodoServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(item_id) => Self::NotFound(item_id),
            StoreError::RowOutOfRange(index) => Self::RowOutOfRange(index),
            StoreError::IdsExhausted => Self::IdsExhausted,
        }
    }
}

/// Todo service facade over store implementations.
pub struct TodoService<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    /// Creates a service owning the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ordered snapshot for list rendering.
    pub fn items(&self) -> &[TodoItem] {
        self.store.items()
    }

    /// Gets one item by id.
    pub fn find_todo(&self, item_id: TodoId) -> Option<&TodoItem> {
        self.store.find(item_id)
    }

    /// Validates and appends a new item.
    pub fn create_todo(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TodoItem, TodoServiceError> {
        let title = title.into();
        let description = description.into();
        let report = validate_todo(&title, &description);
        if !report.is_valid() {
            debug!(
                "event=todo_create module=service status=rejected errors={}",
                report.errors().count()
            );
            return Err(TodoServiceError::Validation(report));
        }

        let item = self.store.add(title, description).inspect_err(|err| {
            warn!("event=todo_create module=service status=error error={err}");
        })?;
        info!(
            "event=todo_create module=service status=ok item_id={} count={}",
            item.item_id,
            self.store.len()
        );
        Ok(item)
    }

    /// Validates and overwrites title/description of an existing item.
    ///
    /// Validation runs before the existence check, matching the edit screen
    /// which can only be open for an item that resolved.
    pub fn edit_todo(
        &mut self,
        item_id: TodoId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<TodoItem, TodoServiceError> {
        let title = title.into();
        let description = description.into();
        let report = validate_todo(&title, &description);
        if !report.is_valid() {
            debug!(
                "event=todo_edit module=service status=rejected item_id={} errors={}",
                item_id,
                report.errors().count()
            );
            return Err(TodoServiceError::Validation(report));
        }

        if let Err(err) = self.store.update(item_id, title, description) {
            warn!("event=todo_edit module=service status=error item_id={item_id} error=not_found");
            return Err(err.into());
        }
        info!("event=todo_edit module=service status=ok item_id={item_id}");
        self.store
            .find(item_id)
            .cloned()
            .ok_or(TodoServiceError::NotFound(item_id))
    }

    /// Commits an add-screen draft, filling its error slots on failure.
    pub fn submit_new(&mut self, draft: &mut TodoDraft) -> Result<TodoItem, TodoServiceError> {
        let (title, description) = draft.to_text();
        self.create_todo(title, description)
            .inspect_err(|err| record_draft_errors(draft, err))
    }

    /// Commits an edit-screen draft, filling its error slots on failure.
    pub fn submit_edit(
        &mut self,
        item_id: TodoId,
        draft: &mut TodoDraft,
    ) -> Result<TodoItem, TodoServiceError> {
        let (title, description) = draft.to_text();
        self.edit_todo(item_id, title, description)
            .inspect_err(|err| record_draft_errors(draft, err))
    }

    /// Flips completion of the first item with `item_id`.
    pub fn toggle_completion(&mut self, item_id: TodoId) -> Result<bool, TodoServiceError> {
        let completed = self.store.toggle_completion(item_id)?;
        info!(
            "event=todo_toggle module=service status=ok item_id={item_id} completed={completed}"
        );
        Ok(completed)
    }

    /// Flips completion of the list row at `index` and returns the new state.
    ///
    /// List actions use this so the tapped row is the one changed even when
    /// ids collide.
    pub fn toggle_row(&mut self, index: usize) -> Result<bool, TodoServiceError> {
        let completed = self.store.toggle_at(index).inspect_err(|_| {
            debug!("event=todo_toggle module=service status=rejected row={index}");
        })?;
        info!("event=todo_toggle module=service status=ok row={index} completed={completed}");
        Ok(completed)
    }

    /// Removes the list row at `index` and returns the removed item.
    pub fn delete_row(&mut self, index: usize) -> Result<TodoItem, TodoServiceError> {
        let item = self.store.remove_at(index).inspect_err(|_| {
            debug!("event=todo_delete module=service status=rejected row={index}");
        })?;
        info!(
            "event=todo_delete module=service status=ok row={} item_id={} count={}",
            index,
            item.item_id,
            self.store.len()
        );
        Ok(item)
    }

    /// Removes the first item with `item_id`. Returns false when nothing matched.
    pub fn delete_todo(&mut self, item_id: TodoId) -> bool {
        let Some(item) = self.store.find(item_id).cloned() else {
            debug!("event=todo_delete module=service status=noop item_id={item_id}");
            return false;
        };
        let removed = self.store.remove(&item);
        info!(
            "event=todo_delete module=service status=ok item_id={} count={}",
            item_id,
            self.store.len()
        );
        removed
    }

    /// Resolves the edit route argument to an item.
    ///
    /// Returns `None` when `raw` is not an integer or no item matches; the
    /// UI then skips the edit screen.
    pub fn resolve_edit_target(&self, raw: &str) -> Option<&TodoItem> {
        let item_id = parse_item_id(raw)?;
        self.store.find(item_id)
    }
}

/// Strict integer parse of a route-encoded item id.
///
/// No trimming; a leading `+` is accepted, negatives never match an id.
pub fn parse_item_id(raw: &str) -> Option<TodoId> {
    raw.parse::<TodoId>().ok()
}

fn record_draft_errors(draft: &mut TodoDraft, err: &TodoServiceError) {
    if let TodoServiceError::Validation(report) = err {
        draft.record(report);
    }
}
