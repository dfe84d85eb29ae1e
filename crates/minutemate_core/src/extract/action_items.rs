//! Line-based action-item extraction.
//!
//! # Responsibility
//! - Turn raw meeting notes into an ordered, bounded list of [`ActionItem`].
//!
//! # Invariants
//! - Total over all inputs: never fails, empty input yields an empty list.
//! - Output keeps source line order and holds at most `max_items` entries.
//! - Deterministic; no I/O and no shared mutable state.

use crate::config::ExtractorConfig;
use crate::extract::rules::{is_candidate_line, trim_notes, DUE_RULE, OWNER_RULE};
use crate::model::action_item::ActionItem;

/// Extracts up to six action items using default configuration.
pub fn extract_action_items(text: &str) -> Vec<ActionItem> {
    extract_action_items_with(text, &ExtractorConfig::default())
}

/// Extracts action items, keeping the first `config.max_items` matches.
///
/// Rules:
/// - lines are split on `\n`, trimmed with [`trim_notes`], blank lines dropped;
/// - a line is kept when any trigger rule matches;
/// - owner/due are captured from the trimmed line, then stripped (owner first)
///   to form `task`.
pub fn extract_action_items_with(text: &str, config: &ExtractorConfig) -> Vec<ActionItem> {
    let limit = crate::config::normalize_max_items(Some(config.max_items));

    text.split('\n')
        .map(trim_notes)
        .filter(|line| !line.is_empty())
        .filter(|line| is_candidate_line(line))
        .map(parse_candidate_line)
        .take(limit)
        .collect()
}

/// Counts items whose owner or due fell back to the sentinel.
pub fn count_missing(items: &[ActionItem]) -> usize {
    items.iter().filter(|item| item.has_missing_field()).count()
}

fn parse_candidate_line(line: &str) -> ActionItem {
    let owner = OWNER_RULE.capture(line);
    let due = DUE_RULE.capture(line);
    let without_owner = OWNER_RULE.strip(line);
    let task = trim_notes(&DUE_RULE.strip(&without_owner)).to_string();
    ActionItem::new(task, owner, due)
}
