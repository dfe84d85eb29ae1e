//! Flutter-facing bindings for MinuteMate core.

pub mod api;
