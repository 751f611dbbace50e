//! Todo store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered todo collection for the lifetime of its owner.
//! - Assign item ids according to `IdPolicy`.
//!
//! # Invariants
//! - Items keep insertion order; nothing reorders them.
//! - Lookups return the first item with a matching id.
//! - Under `IdPolicy::Sequential` no id is ever issued twice; once the
//!   counter is spent `add` fails with `IdsExhausted`.
//! - Row-addressed operations act on exactly the row given, even when
//!   ids collide under `IdPolicy::StoreSize`.

use crate::config::{IdPolicy, StoreConfig};
use crate::model::todo::{TodoId, TodoItem};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(TodoId),
    RowOutOfRange(usize),
    IdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::RowOutOfRange(index) => write!(f, "todo row out of range: {index}"),
            Self::IdsExhausted => f.write_str("todo ids exhausted"),
        }
    }
}

impl Error for StoreError {}

/// Collection interface for todo list operations.
pub trait TodoStore {
    /// Appends a new item built from already-validated text.
    fn add(&mut self, title: String, description: String) -> StoreResult<TodoItem>;
    /// Gets the first item with `item_id`.
    fn find(&self, item_id: TodoId) -> Option<&TodoItem>;
    /// Removes the first item equal to `item`. Returns false when absent.
    fn remove(&mut self, item: &TodoItem) -> bool;
    /// Removes the row at `index` and returns it.
    fn remove_at(&mut self, index: usize) -> StoreResult<TodoItem>;
    /// Flips completion of the first item with `item_id`.
    fn toggle_completion(&mut self, item_id: TodoId) -> StoreResult<bool>;
    /// Flips completion of the row at `index`.
    fn toggle_at(&mut self, index: usize) -> StoreResult<bool>;
    /// Overwrites title and description in place.
    fn update(&mut self, item_id: TodoId, title: String, description: String) -> StoreResult<()>;
    /// Current ordered snapshot.
    fn items(&self) -> &[TodoItem];

    fn len(&self) -> usize {
        self.items().len()
    }

    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Vec-backed todo store.
#[derive(Debug)]
pub struct InMemoryTodoStore {
    items: Vec<TodoItem>,
    id_policy: IdPolicy,
    /// `None` once every sequential id has been issued.
    next_id: Option<TodoId>,
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

impl InMemoryTodoStore {
    /// Creates an empty store with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the provided config.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            items: Vec::new(),
            id_policy: config.id_policy,
            next_id: Some(0),
        }
    }

    /// Active id policy.
    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    fn issue_id(&mut self) -> StoreResult<TodoId> {
        match self.id_policy {
            IdPolicy::Sequential => {
                let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
                self.next_id = id.checked_add(1);
                Ok(id)
            }
            IdPolicy::StoreSize => {
                TodoId::try_from(self.items.len()).map_err(|_| StoreError::IdsExhausted)
            }
        }
    }

    fn find_mut(&mut self, item_id: TodoId) -> StoreResult<&mut TodoItem> {
        self.items
            .iter_mut()
            .find(|item| item.item_id == item_id)
            .ok_or(StoreError::NotFound(item_id))
    }
}

impl TodoStore for InMemoryTodoStore {
    fn add(&mut self, title: String, description: String) -> StoreResult<TodoItem> {
        let item = TodoItem::new(self.issue_id()?, title, description);
        self.items.push(item.clone());
        Ok(item)
    }

    fn find(&self, item_id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.item_id == item_id)
    }

    fn remove(&mut self, item: &TodoItem) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn remove_at(&mut self, index: usize) -> StoreResult<TodoItem> {
        if index >= self.items.len() {
            return Err(StoreError::RowOutOfRange(index));
        }
        Ok(self.items.remove(index))
    }

    fn toggle_completion(&mut self, item_id: TodoId) -> StoreResult<bool> {
        Ok(self.find_mut(item_id)?.toggle_completion())
    }

    fn toggle_at(&mut self, index: usize) -> StoreResult<bool> {
        self.items
            .get_mut(index)
            .map(TodoItem::toggle_completion)
            .ok_or(StoreError::RowOutOfRange(index))
    }

    fn update(&mut self, item_id: TodoId, title: String, description: String) -> StoreResult<()> {
        self.find_mut(item_id)?.update_text(title, description);
        Ok(())
    }

    fn items(&self) -> &[TodoItem] {
        &self.items
    }
}
