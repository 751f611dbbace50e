//! Domain model for the todo-note list.
//!
//! # Responsibility
//! - Define the canonical record rendered by list/add/edit screens.
//!
//! # Invariants
//! - Every stored item passed validation when it was committed.
//! - Deletion is a hard removal from the store; no tombstones.

pub mod todo;
