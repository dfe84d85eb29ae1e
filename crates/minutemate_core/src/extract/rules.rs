//! Named pattern rules used by action-item extraction.
//!
//! # Responsibility
//! - Keep the trigger vocabulary as a data table, not inline checks.
//! - Provide owner/due key-value rules that capture and strip independently.
//! - Define the whitespace set used for trimming and matching notes.
//!
//! # Invariants
//! - Keyword matching folds ASCII case only (`ſ` does not match `s`).
//! - Whitespace is the ECMAScript set: includes U+FEFF, excludes U+0085.
//! - Triggers are substring matches; `need` also hits `needed`/`unneeded`.
//! - Field values stop at the first `,` or `;` (or end of line).

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Regex class equivalent to ECMAScript `\s`.
const WHITESPACE_CLASS: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Returns whether `c` belongs to the ECMAScript whitespace set.
pub fn is_notes_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims notes whitespace (including a byte-order mark) from both ends.
pub fn trim_notes(value: &str) -> &str {
    value.trim_matches(is_notes_whitespace)
}

/// One named trigger marking a line as a candidate action.
#[derive(Debug)]
pub struct TriggerRule {
    /// Stable rule name, also the keyword searched for.
    pub name: &'static str,
    /// Whether the keyword must be followed by whitespace.
    pub trailing_space: bool,
}

impl TriggerRule {
    const fn keyword(name: &'static str) -> Self {
        Self {
            name,
            trailing_space: false,
        }
    }

    fn pattern(&self) -> String {
        let keyword = keyword_pattern(self.name);
        if self.trailing_space {
            format!("{keyword}{WHITESPACE_CLASS}")
        } else {
            keyword
        }
    }
}

/// Trigger table, evaluated in declaration order.
pub const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        name: "to",
        trailing_space: true,
    },
    TriggerRule::keyword("need"),
    TriggerRule::keyword("action"),
    TriggerRule::keyword("follow"),
    TriggerRule::keyword("draft"),
    TriggerRule::keyword("send"),
    TriggerRule::keyword("create"),
    TriggerRule::keyword("decide"),
];

static TRIGGER_ANY_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = TRIGGER_RULES
        .iter()
        .map(TriggerRule::pattern)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?:{alternation})")).expect("valid trigger regex")
});

static TRIGGER_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TRIGGER_RULES
        .iter()
        .map(|rule| {
            let re = Regex::new(&rule.pattern()).expect("valid trigger regex");
            (rule.name, re)
        })
        .collect()
});

/// Returns whether `line` contains at least one trigger.
pub fn is_candidate_line(line: &str) -> bool {
    TRIGGER_ANY_RE.is_match(line)
}

/// Returns names of all triggers present in `line`, in table order.
pub fn matched_triggers(line: &str) -> Vec<&'static str> {
    TRIGGER_RES
        .iter()
        .filter(|(_, re)| re.is_match(line))
        .map(|(name, _)| *name)
        .collect()
}

/// Key-value rule of the shape `<key>\s*:\s*<value>` terminated by `,`/`;`.
pub struct FieldRule {
    capture_re: Lazy<Regex>,
    strip_re: Lazy<Regex>,
}

impl FieldRule {
    /// Returns the first captured value, trimmed.
    ///
    /// A key followed only by whitespace before a separator yields `Some("")`.
    pub fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.capture_re
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| trim_notes(m.as_str()))
    }

    /// Removes the first key-value occurrence; other text is left untouched.
    pub fn strip<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.strip_re.replace(line, "")
    }
}

fn keyword_pattern(keyword: &str) -> String {
    format!("(?i-u:{})", regex::escape(keyword))
}

fn field_regex(key: &str, capture_value: bool) -> Regex {
    let value = if capture_value { "([^,;]+)" } else { "[^,;]+" };
    let pattern = format!(
        "{key}{ws}*:{ws}*{value}",
        key = keyword_pattern(key),
        ws = WHITESPACE_CLASS
    );
    Regex::new(&pattern).expect("valid field regex")
}

/// Owner rule: `owner: <name>`.
pub static OWNER_RULE: FieldRule = FieldRule {
    capture_re: Lazy::new(|| field_regex("owner", true)),
    strip_re: Lazy::new(|| field_regex("owner", false)),
};

/// Due rule: `due: <date or phrase>`.
pub static DUE_RULE: FieldRule = FieldRule {
    capture_re: Lazy::new(|| field_regex("due", true)),
    strip_re: Lazy::new(|| field_regex("due", false)),
};

#[cfg(test)]
mod tests {
    use super::{
        is_candidate_line, matched_triggers, trim_notes, DUE_RULE, OWNER_RULE, TRIGGER_RULES,
    };

    #[test]
    fn trigger_table_names_are_unique() {
        let mut names = TRIGGER_RULES.iter().map(|rule| rule.name).collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TRIGGER_RULES.len());
    }

    #[test]
    fn to_trigger_requires_trailing_whitespace() {
        assert!(is_candidate_line("go to the store"));
        assert!(!is_candidate_line("Friday meeting notes"));
        assert!(!is_candidate_line("tomorrow at noon"));
    }

    #[test]
    fn triggers_match_inside_longer_words() {
        assert_eq!(matched_triggers("unneeded"), vec!["need"]);
        assert_eq!(matched_triggers("big sendoff"), vec!["send"]);
        assert_eq!(matched_triggers("FOLLOWUP"), vec!["follow"]);
    }

    #[test]
    fn matched_triggers_follow_table_order() {
        assert_eq!(
            matched_triggers("Decide whether to send the draft"),
            vec!["to", "draft", "send", "decide"]
        );
    }

    #[test]
    fn owner_capture_stops_at_separators() {
        assert_eq!(OWNER_RULE.capture("Owner: Sam, Due: Friday"), Some("Sam"));
        assert_eq!(OWNER_RULE.capture("owner : Pat ; later"), Some("Pat"));
        assert_eq!(OWNER_RULE.capture("no owner here"), None);
    }

    #[test]
    fn owner_capture_is_case_insensitive() {
        assert_eq!(OWNER_RULE.capture("OWNER: Pat"), Some("Pat"));
        assert_eq!(OWNER_RULE.capture("owner: Pat"), Some("Pat"));
    }

    #[test]
    fn due_matches_inside_overdue() {
        assert_eq!(DUE_RULE.capture("overdue: yesterday"), Some("yesterday"));
    }

    #[test]
    fn whitespace_only_value_captures_empty() {
        assert_eq!(OWNER_RULE.capture("owner:  , later"), Some(""));
    }

    #[test]
    fn strip_removes_only_first_occurrence() {
        assert_eq!(OWNER_RULE.strip("owner: a; owner: b"), "; owner: b");
        assert_eq!(DUE_RULE.strip("no key here"), "no key here");
    }

    #[test]
    fn keyword_case_folding_is_ascii_only() {
        assert!(is_candidate_line("SEND the deck"));
        assert!(!is_candidate_line("\u{17f}end the deck"));
        assert_eq!(DUE_RULE.capture("DUE: Friday"), Some("Friday"));
        assert_eq!(OWNER_RULE.capture("\u{17f}owner: x"), Some("x"));
    }

    #[test]
    fn to_trigger_uses_ecmascript_whitespace() {
        assert!(is_candidate_line("go to\tx"));
        assert!(is_candidate_line("go to\u{a0}x"));
        assert!(is_candidate_line("go to\u{feff}x"));
        assert!(!is_candidate_line("go to\u{85}x"));
    }

    #[test]
    fn field_separator_spacing_uses_ecmascript_whitespace() {
        assert_eq!(OWNER_RULE.capture("owner\u{feff}:\u{3000}Sam"), Some("Sam"));
        assert_eq!(OWNER_RULE.capture("owner\u{85}: Sam"), None);
    }

    #[test]
    fn trim_notes_strips_bom_but_keeps_next_line() {
        assert_eq!(trim_notes("\u{feff} send deck \u{3000}"), "send deck");
        assert_eq!(trim_notes("\u{85}send\u{85}"), "\u{85}send\u{85}");
        assert_eq!(trim_notes("\u{feff}\n"), "");
    }

    #[test]
    fn captured_value_is_trimmed_of_bom() {
        assert_eq!(OWNER_RULE.capture("owner: Sam\u{feff}, due: x"), Some("Sam"));
    }
}
