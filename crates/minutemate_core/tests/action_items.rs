use minutemate_core::{extract_action_items, ActionItem, MISSING};

#[test]
fn extraction_is_deterministic() {
    let notes = "Action: send deck, Owner: Sam, Due: Friday\nneed budget\nrandom chatter";
    assert_eq!(extract_action_items(notes), extract_action_items(notes));
}

#[test]
fn empty_and_blank_input_yield_no_items() {
    assert!(extract_action_items("").is_empty());
    assert!(extract_action_items("   \n  \n").is_empty());
}

#[test]
fn lines_without_triggers_are_ignored() {
    assert!(extract_action_items("Friday meeting notes").is_empty());
}

#[test]
fn owner_and_due_are_extracted_and_stripped_from_task() {
    let items = extract_action_items("Action: send deck, Owner: Sam, Due: Friday");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.owner, "Sam");
    assert_eq!(item.due, "Friday");
    assert_eq!(item.task, "Action: send deck, ,");
    assert!(!item.task.contains("Owner:"));
    assert!(!item.task.contains("Due:"));
}

#[test]
fn undetected_fields_use_missing_sentinel() {
    let items = extract_action_items("Need to follow up with vendor");
    assert_eq!(
        items,
        vec![ActionItem {
            task: "Need to follow up with vendor".to_string(),
            owner: MISSING.to_string(),
            due: MISSING.to_string(),
        }]
    );
}

#[test]
fn only_first_six_candidates_are_kept_in_order() {
    let notes = (1..=10)
        .map(|i| format!("send update {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let items = extract_action_items(&notes);
    let tasks = items.iter().map(|item| item.task.clone()).collect::<Vec<_>>();
    let expected = (1..=6)
        .map(|i| format!("send update {i}"))
        .collect::<Vec<_>>();
    assert_eq!(tasks, expected);
}

#[test]
fn non_candidate_lines_do_not_consume_slots() {
    let notes = "intro\nsend a\nchatter\nsend b\nsend c\nsend d\nsend e\nsend f\nsend g";
    let items = extract_action_items(notes);
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].task, "send a");
    assert_eq!(items[5].task, "send f");
}

#[test]
fn owner_key_is_case_insensitive() {
    let upper = extract_action_items("Draft plan, OWNER: Pat");
    let lower = extract_action_items("Draft plan, owner: Pat");
    assert_eq!(upper[0].owner, "Pat");
    assert_eq!(lower[0].owner, "Pat");
}

#[test]
fn trigger_matching_is_substring_based() {
    let items = extract_action_items("unneeded chairs\nfarewell sendoff\nFriday");
    let tasks = items.iter().map(|item| item.task.as_str()).collect::<Vec<_>>();
    assert_eq!(tasks, vec!["unneeded chairs", "farewell sendoff"]);
}

#[test]
fn field_values_stop_at_semicolon() {
    let items = extract_action_items("create ticket; owner: Ana; due: next week; urgent");
    assert_eq!(items[0].owner, "Ana");
    assert_eq!(items[0].due, "next week");
    assert_eq!(items[0].task, "create ticket; ; ; urgent");
}

#[test]
fn due_is_stripped_when_owner_absent() {
    let items = extract_action_items("Decide venue due: Monday");
    assert_eq!(items[0].owner, MISSING);
    assert_eq!(items[0].due, "Monday");
    assert_eq!(items[0].task, "Decide venue");
}

#[test]
fn surrounding_whitespace_is_trimmed_before_matching() {
    let items = extract_action_items("   \t follow up with legal, Owner:   Jo   \n");
    assert_eq!(items[0].owner, "Jo");
    assert_eq!(items[0].task, "follow up with legal,");
}

#[test]
fn byte_order_mark_is_trimmed_like_whitespace() {
    let items = extract_action_items("\u{feff}send deck, Owner: Sam\u{feff}");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].task, "send deck,");
    assert_eq!(items[0].owner, "Sam");
}

#[test]
fn bom_only_lines_are_dropped() {
    assert!(extract_action_items("\u{feff}\n\u{feff}  \u{3000}\n").is_empty());
}

#[test]
fn non_ascii_case_variants_do_not_trigger() {
    assert!(extract_action_items("\u{17f}end the deck").is_empty());
    assert!(extract_action_items("go to\u{85}x").is_empty());
    assert_eq!(extract_action_items("go to\u{a0}x").len(), 1);
}
