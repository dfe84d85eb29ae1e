//! Action item domain model.
//!
//! # Responsibility
//! - Define the structured record produced by note extraction.
//! - Keep "field not detected" explicit via the `MISSING` sentinel.
//!
//! # Invariants
//! - `owner`/`due` are either a detected value or exactly [`MISSING`].
//! - `task` never carries the `owner:`/`due:` key-value text that was extracted.

use serde::{Deserialize, Serialize};

/// Sentinel used when an owner or due field could not be detected.
///
/// Distinguishes "absent" from "present but empty".
pub const MISSING: &str = "MISSING";

/// One candidate action extracted from free-text meeting notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Source line with owner/due key-values removed, trimmed.
    pub task: String,
    /// Detected owner name or [`MISSING`].
    pub owner: String,
    /// Detected due date/phrase or [`MISSING`].
    pub due: String,
}

impl ActionItem {
    /// Builds an item, substituting [`MISSING`] for undetected fields.
    pub fn new(task: impl Into<String>, owner: Option<&str>, due: Option<&str>) -> Self {
        Self {
            task: task.into(),
            owner: owner.unwrap_or(MISSING).to_string(),
            due: due.unwrap_or(MISSING).to_string(),
        }
    }

    pub fn owner_missing(&self) -> bool {
        self.owner == MISSING
    }

    pub fn due_missing(&self) -> bool {
        self.due == MISSING
    }

    /// Returns whether either owner or due fell back to the sentinel.
    pub fn has_missing_field(&self) -> bool {
        self.owner_missing() || self.due_missing()
    }
}
