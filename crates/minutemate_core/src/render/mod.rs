//! Display markup for extracted meeting minutes.
//!
//! # Responsibility
//! - Escape user text for markup surfaces ([`escape`]).
//! - Build preview and placeholder HTML fragments ([`preview`]).

pub mod escape;
pub mod preview;
