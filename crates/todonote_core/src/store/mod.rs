//! Store layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the collection contract the service layer talks to.
//! - Keep id assignment and ordering inside the store boundary.
//!
//! # Invariants
//! - Stores do not validate text; services validate before calling in.
//! - Id-addressed mutations return `NotFound` instead of silently passing.

pub mod todo_store;
