//! Minutes-of-meeting preview use-case service.
//!
//! # Responsibility
//! - Handle the "generate" and "clear" events of an outer UI shell.
//! - Combine extraction and rendering into one outcome per request.
//!
//! # Invariants
//! - Blank notes never reach extraction; they yield the empty state.
//! - Log events carry counts and timings only, never note text.

use crate::config::ExtractorConfig;
use crate::extract::action_items::{count_missing, extract_action_items_with};
use crate::extract::rules::trim_notes;
use crate::model::action_item::ActionItem;
use crate::render::preview::{
    render_empty_state, render_preview, CLEARED_MESSAGE, EMPTY_NOTES_MESSAGE,
};
use log::info;
use std::time::Instant;

/// Result of one generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MomOutcome {
    /// Notes were blank; `markup` is the "paste notes" placeholder.
    Empty { markup: String },
    /// Notes were present and a preview was rendered.
    Preview {
        markup: String,
        items: Vec<ActionItem>,
        /// Items with owner or due set to the sentinel.
        missing_count: usize,
    },
}

impl MomOutcome {
    /// Markup to display, regardless of variant.
    pub fn markup(&self) -> &str {
        match self {
            Self::Empty { markup } | Self::Preview { markup, .. } => markup,
        }
    }

    /// Extracted items; empty for [`MomOutcome::Empty`].
    pub fn items(&self) -> &[ActionItem] {
        match self {
            Self::Empty { .. } => &[],
            Self::Preview { items, .. } => items,
        }
    }
}

/// Stateless facade over extraction and rendering.
#[derive(Debug, Clone, Default)]
pub struct MomService {
    config: ExtractorConfig,
}

impl MomService {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts action items without rendering.
    pub fn extract(&self, raw_notes: &str) -> Vec<ActionItem> {
        extract_action_items_with(raw_notes, &self.config)
    }

    /// Handles a generate request for `raw_notes`.
    ///
    /// # Contract
    /// - Input is trimmed first (a leading byte-order mark counts as whitespace);
    ///   blank input returns [`MomOutcome::Empty`].
    /// - The raw-notes echo uses the trimmed text.
    pub fn generate(&self, raw_notes: &str) -> MomOutcome {
        let started_at = Instant::now();
        let notes = trim_notes(raw_notes);
        if notes.is_empty() {
            info!("event=mom_generate module=service status=empty");
            return MomOutcome::Empty {
                markup: render_empty_state(EMPTY_NOTES_MESSAGE),
            };
        }

        let items = self.extract(notes);
        let missing_count = count_missing(&items);
        let markup = render_preview(notes, &items);
        info!(
            "event=mom_generate module=service status=ok input_chars={} items={} missing={} duration_ms={}",
            notes.chars().count(),
            items.len(),
            missing_count,
            started_at.elapsed().as_millis()
        );

        MomOutcome::Preview {
            markup,
            items,
            missing_count,
        }
    }

    /// Handles a clear request; returns the cleared placeholder markup.
    pub fn clear(&self) -> String {
        info!("event=mom_clear module=service status=ok");
        render_empty_state(CLEARED_MESSAGE)
    }
}
