//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose list/add/edit/toggle/delete use cases to Dart via FRB.
//! - Flatten core errors into UI-ready envelopes with field messages.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The todo store lives inside `TodoSession`; Dart owns its lifetime.

use log::warn;
use todonote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_item_id,
    ping as ping_inner, InMemoryTodoStore, StoreConfig, TodoItem, TodoService, TodoServiceError,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Todo row as rendered by the list and edit screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub item_id: u32,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl From<&TodoItem> for TodoView {
    fn from(item: &TodoItem) -> Self {
        Self {
            item_id: item.item_id,
            title: item.title.clone(),
            description: item.description.clone(),
            is_completed: item.is_completed,
        }
    }
}

/// Result of submitting the add or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFormResponse {
    /// Whether the item was committed; the UI pops back to the list when true.
    pub ok: bool,
    /// Committed item on success.
    pub item: Option<TodoView>,
    /// Message shown under the title input.
    pub title_error: Option<String>,
    /// Message shown under the description input.
    pub description_error: Option<String>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl TodoFormResponse {
    fn committed(message: &str, item: &TodoItem) -> Self {
        Self {
            ok: true,
            item: Some(TodoView::from(item)),
            title_error: None,
            description_error: None,
            message: message.to_string(),
        }
    }

    fn rejected(err: &TodoServiceError) -> Self {
        let (title_error, description_error) = match err {
            TodoServiceError::Validation(report) => (
                report.title_message().map(str::to_string),
                report.description_message().map(str::to_string),
            ),
            TodoServiceError::NotFound(_)
            | TodoServiceError::RowOutOfRange(_)
            | TodoServiceError::IdsExhausted => (None, None),
        };
        Self {
            ok: false,
            item: None,
            title_error,
            description_error,
            message: err.to_string(),
        }
    }
}

/// Result of a list-row action (toggle or delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoActionResponse {
    pub ok: bool,
    /// Completion state after a toggle; `None` for deletes and failures.
    pub is_completed: Option<bool>,
    pub message: String,
}

impl TodoActionResponse {
    fn success(message: impl Into<String>, is_completed: Option<bool>) -> Self {
        Self {
            ok: true,
            is_completed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            is_completed: None,
            message: message.into(),
        }
    }
}

/// Todo list owned by the Dart side for the lifetime of the navigation graph.
#[flutter_rust_bridge::frb(opaque)]
pub struct TodoSession {
    service: TodoService<InMemoryTodoStore>,
}

impl TodoSession {
    /// Creates an empty session using `TODONOTE_ID_POLICY` when set.
    ///
    /// An unsupported policy value falls back to defaults.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        let config = StoreConfig::from_env().unwrap_or_else(|err| {
            warn!("event=session_config module=ffi status=fallback error={err}");
            StoreConfig::default()
        });
        Self::with_config(config)
    }

    #[flutter_rust_bridge::frb(ignore)]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            service: TodoService::new(InMemoryTodoStore::with_config(config)),
        }
    }

    /// Current list in insertion order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn list_todos(&self) -> Vec<TodoView> {
        self.service.items().iter().map(TodoView::from).collect()
    }

    /// Submits the add form.
    #[flutter_rust_bridge::frb(sync)]
    pub fn create_todo(&mut self, title: String, description: String) -> TodoFormResponse {
        match self.service.create_todo(title, description) {
            Ok(item) => TodoFormResponse::committed("Todo created.", &item),
            Err(err) => TodoFormResponse::rejected(&err),
        }
    }

    /// Resolves the edit route argument; `None` means skip the edit screen.
    #[flutter_rust_bridge::frb(sync)]
    pub fn load_edit_target(&self, item_id: String) -> Option<TodoView> {
        self.service
            .resolve_edit_target(item_id.as_str())
            .map(TodoView::from)
    }

    /// Submits the edit form for the route-encoded `item_id`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn edit_todo(
        &mut self,
        item_id: String,
        title: String,
        description: String,
    ) -> TodoFormResponse {
        let Some(parsed_id) = parse_item_id(item_id.as_str()) else {
            return TodoFormResponse {
                ok: false,
                item: None,
                title_error: None,
                description_error: None,
                message: format!("invalid todo id: `{item_id}`"),
            };
        };
        match self.service.edit_todo(parsed_id, title, description) {
            Ok(item) => TodoFormResponse::committed("Todo updated.", &item),
            Err(err) => TodoFormResponse::rejected(&err),
        }
    }

    /// Flips the checkbox of the row at `row_index` in `list_todos()` order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_todo(&mut self, row_index: u32) -> TodoActionResponse {
        match self.service.toggle_row(row_index as usize) {
            Ok(completed) => TodoActionResponse::success("Todo toggled.", Some(completed)),
            Err(err) => TodoActionResponse::failure(format!("toggle_todo failed: {err}")),
        }
    }

    /// Deletes the row at `row_index` in `list_todos()` order.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_todo(&mut self, row_index: u32) -> TodoActionResponse {
        match self.service.delete_row(row_index as usize) {
            Ok(_) => TodoActionResponse::success("Todo deleted.", None),
            Err(err) => TodoActionResponse::failure(format!("delete_todo failed: {err}")),
        }
    }
}

impl Default for TodoSession {
    fn default() -> Self {
        Self::new()
    }
}
