//! Flutter-facing bindings for `todonote_core`.

pub mod api;
