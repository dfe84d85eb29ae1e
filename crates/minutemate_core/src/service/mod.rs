//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate extraction and rendering into use-case level APIs.
//! - Keep UI/FFI shells decoupled from rule and markup details.

pub mod mom_service;
