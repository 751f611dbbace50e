//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from store details.

pub mod todo_service;
