// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::date;
use crate::{build_guard_duty_list, prune_guard_duty_list};
use coy_forms_domain::{FormError, GuardDutyEntry, IcRole};

fn entry(day: u32, roles: &[IcRole], guards: u32) -> GuardDutyEntry {
    let mut entry: GuardDutyEntry = GuardDutyEntry::new(date(2026, 2, day));
    for &role in roles {
        entry.toggle_role(role);
    }
    entry.num_guards = guards;
    entry
}

#[test]
fn test_build_with_no_entries_fails() {
    let result: Result<String, FormError> = build_guard_duty_list(1, 2026, &[]);
    assert_eq!(result, Err(FormError::NoEntries));
}

#[test]
fn test_build_with_invalid_month_fails() {
    let entries: Vec<GuardDutyEntry> = vec![entry(7, &[IcRole::TwoIc], 0)];
    let result: Result<String, FormError> = build_guard_duty_list(12, 2026, &entries);
    assert!(matches!(result, Err(FormError::Internal { .. })));
}

#[test]
fn test_build_single_entry_exact_shape() {
    let entries: Vec<GuardDutyEntry> = vec![entry(7, &[IcRole::TwoIc], 2)];
    let text: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    assert_eq!(
        text,
        "GUARD DUTY FEBRUARY 2026\n\n\
         7/2 (SATURDAY)\n\
         2IC: \nNUMBER: \n\n\
         G: \nNUMBER: \n\n\
         G: \nNUMBER:"
    );
}

#[test]
fn test_build_separator_appears_between_blocks_only() {
    let entries: Vec<GuardDutyEntry> = vec![
        entry(7, &[IcRole::TwoIc], 0),
        entry(14, &[], 1),
    ];
    let text: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    assert_eq!(text.matches("==========").count(), 1);
    assert!(!text.ends_with("=========="));
    assert!(text.contains("7/2 (SATURDAY)"));
    assert!(text.contains("14/2 (SATURDAY)"));
}

#[test]
fn test_build_roles_render_in_seniority_order() {
    // Toggled out of order; the stanza order must follow the enumeration.
    let entries: Vec<GuardDutyEntry> = vec![entry(7, &[IcRole::FourIc, IcRole::TwoIc], 0)];
    let text: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    let two_ic: usize = text.find("2IC:").unwrap();
    let four_ic: usize = text.find("4IC:").unwrap();
    assert!(two_ic < four_ic);
}

#[test]
fn test_prune_empty_input_returns_empty() {
    assert_eq!(prune_guard_duty_list("", date(2026, 2, 10)), "");
    assert_eq!(prune_guard_duty_list("   \n  ", date(2026, 2, 10)), "");
}

#[test]
fn test_prune_without_date_lines_returns_input_unchanged() {
    let raw: &str = "hello world\nno dates here";
    assert_eq!(prune_guard_duty_list(raw, date(2026, 2, 10)), raw);
}

#[test]
fn test_prune_drops_past_blocks_and_keeps_header() {
    let entries: Vec<GuardDutyEntry> = vec![
        entry(7, &[IcRole::TwoIc], 0),
        entry(14, &[], 1),
    ];
    let built: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    let pruned: String = prune_guard_duty_list(&built, date(2026, 2, 10));
    assert_eq!(
        pruned,
        "GUARD DUTY FEBRUARY 2026\n\n14/2 (SATURDAY)\nG: \nNUMBER:"
    );
}

#[test]
fn test_prune_keeps_today() {
    let entries: Vec<GuardDutyEntry> = vec![entry(7, &[IcRole::TwoIc], 0)];
    let built: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    let pruned: String = prune_guard_duty_list(&built, date(2026, 2, 7));
    assert!(pruned.contains("7/2 (SATURDAY)"));
}

#[test]
fn test_prune_all_past_returns_header_only() {
    let entries: Vec<GuardDutyEntry> = vec![
        entry(7, &[IcRole::TwoIc], 0),
        entry(14, &[], 1),
    ];
    let built: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    let pruned: String = prune_guard_duty_list(&built, date(2026, 3, 1));
    assert_eq!(pruned, "GUARD DUTY FEBRUARY 2026");
}

#[test]
fn test_prune_all_past_without_header_returns_empty() {
    let raw: &str = "7/2 (SATURDAY)\nG: \nNUMBER:";
    assert_eq!(prune_guard_duty_list(raw, date(2026, 3, 1)), "");
}

#[test]
fn test_prune_is_idempotent() {
    let entries: Vec<GuardDutyEntry> = vec![
        entry(7, &[IcRole::TwoIc], 1),
        entry(14, &[IcRole::ThreeIc], 2),
        entry(21, &[], 1),
    ];
    let built: String = build_guard_duty_list(1, 2026, &entries).unwrap();
    let today: chrono::NaiveDate = date(2026, 2, 10);
    let once: String = prune_guard_duty_list(&built, today);
    let twice: String = prune_guard_duty_list(&once, today);
    assert_eq!(once, twice);
}

#[test]
fn test_prune_tolerates_decorated_date_lines() {
    let raw: &str = "GUARD DUTY FEBRUARY 2026\n\n7/2 (PM) (SATURDAY)\nG: \nNUMBER:";
    let kept: String = prune_guard_duty_list(raw, date(2026, 2, 1));
    assert!(kept.contains("7/2 (PM) (SATURDAY)"));
    let dropped: String = prune_guard_duty_list(raw, date(2026, 2, 10));
    assert_eq!(dropped, "GUARD DUTY FEBRUARY 2026");
}

#[test]
fn test_prune_out_of_range_month_falls_back_to_header_month() {
    let raw: &str = "GUARD DUTY FEBRUARY 2026\n\n7/23 (SATURDAY)\nG: \nNUMBER:";
    // Month numeral 23 is out of range; the block reads as 7 February.
    assert!(prune_guard_duty_list(raw, date(2026, 2, 1)).contains("7/23"));
    assert_eq!(
        prune_guard_duty_list(raw, date(2026, 2, 10)),
        "GUARD DUTY FEBRUARY 2026"
    );
}

#[test]
fn test_prune_without_header_uses_today_for_year() {
    let raw: &str = "7/2 (SATURDAY)\nG: \nNUMBER:";
    let kept: String = prune_guard_duty_list(raw, date(2026, 2, 1));
    assert_eq!(kept, raw);
}

#[test]
fn test_prune_normalizes_crlf_line_endings() {
    let raw: &str = "GUARD DUTY FEBRUARY 2026\r\n\r\n14/2 (SATURDAY)\r\nG: \r\nNUMBER:";
    let pruned: String = prune_guard_duty_list(raw, date(2026, 2, 10));
    assert_eq!(
        pruned,
        "GUARD DUTY FEBRUARY 2026\n\n14/2 (SATURDAY)\nG: \nNUMBER:"
    );
}
