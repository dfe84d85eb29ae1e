//! MOM preview markup.
//!
//! # Responsibility
//! - Turn extracted items plus raw notes into the six preview blocks.
//! - Provide placeholder markup for empty and cleared states.
//!
//! # Invariants
//! - Every user-derived string passes through [`escape_html`].
//! - Rendering is pure; identical input gives identical markup.

use crate::extract::action_items::count_missing;
use crate::model::action_item::ActionItem;
use crate::render::escape::escape_html;

/// Placeholder shown when generate is requested with blank notes.
pub const EMPTY_NOTES_MESSAGE: &str = "Paste some notes first.";
/// Placeholder shown after the notes are cleared.
pub const CLEARED_MESSAGE: &str = "Cleared. Paste notes and generate again.";
/// Shown in place of the item list when nothing was detected.
pub const NO_ACTION_ITEMS_MESSAGE: &str =
    "No clear action items detected. Add lines like “Owner: Sam, Due: Friday”.";

const SPACER: &str = r#"<div style="height:10px;"></div>"#;

/// Renders the numbered action item list, or the fallback message.
pub fn render_action_items(items: &[ActionItem]) -> String {
    if items.is_empty() {
        return format!(r#"<div class="txt">{NO_ACTION_ITEMS_MESSAGE}</div>"#);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                r#"<div class="kv">
          <span class="tag">#{number}</span>
          <span class="tag">Owner: {owner}</span>
          <span class="tag">Due: {due}</span>
        </div>
        <div class="txt" style="margin-top:8px;">{task}</div>"#,
                number = index + 1,
                owner = escape_html(&item.owner),
                due = escape_html(&item.due),
                task = escape_html(&item.task),
            )
        })
        .collect::<Vec<_>>()
        .join(SPACER)
}

/// Renders the missing-field warning; empty when nothing is missing.
pub fn render_missing_warning(missing_count: usize) -> String {
    if missing_count == 0 {
        return String::new();
    }
    format!(
        r#"{SPACER}<div class="txt">⚠️ {missing_count} item(s) missing owner or due date. MinuteMate flags these instead of guessing.</div>"#
    )
}

/// Renders the full preview for `notes` and its extracted `items`.
pub fn render_preview(notes: &str, items: &[ActionItem]) -> String {
    let action_lines = render_action_items(items);
    let warning = render_missing_warning(count_missing(items));
    let safe_notes = escape_html(notes);

    format!(
        r#"
    <div class="block">
      <h4>1) Summary</h4>
      <div class="txt">This meeting covered key deliverables and next steps. Items requiring ownership and timing are captured below for quick follow-through.</div>
    </div>

    <div class="block">
      <h4>2) Key Decisions</h4>
      <div class="txt">MISSING — add explicit decision lines (e.g., “Decision: use Runway for a 5s video”).</div>
    </div>

    <div class="block">
      <h4>3) Action Items (Owner + Due Date)</h4>
      {action_lines}
      {warning}
    </div>

    <div class="block">
      <h4>4) Risks / Open Questions</h4>
      <div class="txt">• Owner(s) missing for some tasks<br>• Timeline dependencies may slip without due dates<br>• Clarify who generates the AI video and by when</div>
    </div>

    <div class="block">
      <h4>5) Follow-up Messages</h4>
      <div class="txt"><strong>Email:</strong><br>
Subject: Meeting Follow-up — Minutes & Next Steps<br>
Hi team, here are the minutes and action items from today. Please confirm missing owners/due dates so we can lock the plan.</div>
      {SPACER}
      <div class="txt"><strong>Slack:</strong><br>
Quick recap posted ✅ Please confirm owners/due dates for the open items so we can move fast.</div>
    </div>

    <div class="block">
      <h4>Raw Notes (Reference)</h4>
      <div class="txt">{safe_notes}</div>
    </div>
  "#
    )
}

/// Renders the placeholder block used for empty and cleared states.
pub fn render_empty_state(message: &str) -> String {
    format!(
        r#"<div class="mom-empty"><div class="spark"></div><p class="muted">{}</p></div>"#,
        escape_html(message)
    )
}
