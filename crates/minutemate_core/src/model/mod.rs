//! Domain model for extracted meeting-note structures.
//!
//! # Responsibility
//! - Define the records exchanged between extraction and rendering.
//!
//! # Invariants
//! - Records are built fresh per extraction call and never mutated afterward.

pub mod action_item;
