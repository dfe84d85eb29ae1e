//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the "generate" and "clear" button events to Dart via FRB.
//! - Flatten core results into plain envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Configuration is resolved once per process.

use log::warn;
use minutemate_core::{
    core_version as core_version_inner, extract_action_items_with,
    init_logging as init_logging_inner, ActionItem, ExtractorConfig, MomOutcome, MomService,
};
use std::sync::OnceLock;

static MOM_SERVICE: OnceLock<MomService> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Action item as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomActionItem {
    pub task: String,
    /// Owner name or `MISSING`.
    pub owner: String,
    /// Due date/phrase or `MISSING`.
    pub due: String,
    /// True when owner or due is `MISSING`.
    pub needs_attention: bool,
}

/// Response envelope for the generate event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomPreviewResponse {
    /// Markup to place into the preview container.
    pub markup: String,
    /// Extracted items (empty when notes were blank).
    pub items: Vec<MomActionItem>,
    /// Items with owner or due missing.
    pub missing_count: u32,
    /// True when the notes were blank and `markup` is the placeholder.
    pub is_empty: bool,
}

/// Generates the MOM preview for pasted notes.
///
/// # FFI contract
/// - Sync call, pure CPU work bounded by input length.
/// - Never panics; blank notes return the placeholder with `is_empty = true`.
#[flutter_rust_bridge::frb(sync)]
pub fn mom_generate(raw_notes: String) -> MomPreviewResponse {
    match mom_service().generate(raw_notes.as_str()) {
        MomOutcome::Empty { markup } => MomPreviewResponse {
            markup,
            items: Vec::new(),
            missing_count: 0,
            is_empty: true,
        },
        MomOutcome::Preview {
            markup,
            items,
            missing_count,
        } => MomPreviewResponse {
            markup,
            items: items.into_iter().map(to_mom_action_item).collect(),
            missing_count: u32::try_from(missing_count).unwrap_or(u32::MAX),
            is_empty: false,
        },
    }
}

/// Returns the placeholder markup shown after the clear event.
#[flutter_rust_bridge::frb(sync)]
pub fn mom_clear() -> String {
    mom_service().clear()
}

/// Extracts action items only, for callers rendering natively in Dart.
#[flutter_rust_bridge::frb(sync)]
pub fn mom_extract_action_items(raw_notes: String) -> Vec<MomActionItem> {
    extract_action_items_with(raw_notes.as_str(), mom_service().config())
        .into_iter()
        .map(to_mom_action_item)
        .collect()
}

fn mom_service() -> &'static MomService {
    MOM_SERVICE.get_or_init(|| {
        let config = ExtractorConfig::from_env().unwrap_or_else(|err| {
            warn!("event=config_load module=ffi status=fallback error={err}");
            ExtractorConfig::default()
        });
        MomService::new(config)
    })
}

fn to_mom_action_item(item: ActionItem) -> MomActionItem {
    let needs_attention = item.has_missing_field();
    MomActionItem {
        task: item.task,
        owner: item.owner,
        due: item.due,
        needs_attention,
    }
}
