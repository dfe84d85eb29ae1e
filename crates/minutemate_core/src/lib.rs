//! Core domain logic for MinuteMate.
//! Turns free-text meeting notes into action items and preview markup.

pub mod config;
pub mod extract;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use config::{ConfigError, ExtractorConfig, MAX_ACTION_ITEMS};
pub use extract::action_items::{count_missing, extract_action_items, extract_action_items_with};
pub use extract::rules::{
    is_candidate_line, is_notes_whitespace, matched_triggers, trim_notes, FieldRule, TriggerRule,
    DUE_RULE, OWNER_RULE, TRIGGER_RULES,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::action_item::{ActionItem, MISSING};
pub use render::escape::{escape_html, escape_html_opt};
pub use render::preview::{
    render_action_items, render_empty_state, render_missing_warning, render_preview,
    CLEARED_MESSAGE, EMPTY_NOTES_MESSAGE, NO_ACTION_ITEMS_MESSAGE,
};
pub use service::mom_service::{MomOutcome, MomService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
