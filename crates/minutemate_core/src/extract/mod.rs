//! Heuristic extraction of structured data from meeting notes.
//!
//! # Responsibility
//! - Own the trigger and key-value rules ([`rules`]).
//! - Apply them line by line to produce action items ([`action_items`]).

pub mod action_items;
pub mod rules;
