//! Core domain logic for TodoNote.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use config::{IdPolicy, StoreConfig};
pub use form::TodoDraft;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem};
pub use service::todo_service::{parse_item_id, TodoService, TodoServiceError};
pub use store::todo_store::{InMemoryTodoStore, StoreError, StoreResult, TodoStore};
pub use validation::{
    text_len, validate_todo, FieldError, TodoField, ValidationReport, DESCRIPTION_MAX_LEN,
    TITLE_MAX_LEN, TITLE_MIN_LEN,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
