// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Routine-order assembly.
//!
//! The composer is pure string assembly: no validation happens here. The
//! caller supplies the safety message, the events block, the
//! pre-formatted regimental-duties text, and guard-duty text that has
//! already been pruned of past dates.

use chrono::NaiveDate;
use coy_forms_domain::{RegimentalEntry, format_slash, weekday_name};

/// Fixed CO safety-message boilerplate. Invariant text.
const SAFETY_BOILERPLATE: &str = "1. NO TRAINING INCIDENT\n\
                                  2. NO VEHICLE INCIDENT\n\
                                  3. NO SECURITY INCIDENT\n\
                                  4. NO UNAUTHORISED ABSENCE\n\
                                  5. NO SAFETY INFRINGEMENT\n\
                                  6. NO NEGATIVE INTERACTION";

/// Formats the regimental-duties section body, one block per entry.
///
/// Every unset field renders as the `[]` placeholder so the published
/// order shows what still needs a name against it.
#[must_use]
pub fn format_regimental_duties(entries: &[RegimentalEntry]) -> String {
    let blocks: Vec<String> = entries.iter().map(format_entry).collect();
    blocks.join("\n\n")
}

fn format_entry(entry: &RegimentalEntry) -> String {
    format!(
        "{date} ({weekday})\n\
         DFO: {dfo}\n\
         UDO: {udo}\n\
         DUTY CLERK: {clerk}\n\n\
         RCV\n\
         COMMANDER: {rcv_commander}\n\
         2IC: {rcv_second}\n\
         CREW:\n\
         {rcv_crew}\n\n\
         ARV\n\
         COMMANDER: {arv_commander}\n\
         DRIVER: {arv_driver}\n\
         MECHANIC: {arv_mechanic}\n\n\
         HRV\n\
         COMMANDER: {hrv_commander}\n\
         DRIVER: {hrv_driver}\n\
         MECHANIC: {hrv_mechanic}",
        date = format_slash(entry.date),
        weekday = weekday_name(entry.date),
        dfo = placeholder(&entry.dfo),
        udo = placeholder(&entry.udo),
        clerk = placeholder(&entry.duty_clerk),
        rcv_commander = placeholder(&entry.rcv.commander),
        rcv_second = placeholder(&entry.rcv.second_ic),
        rcv_crew = placeholder(&entry.rcv.crew_list),
        arv_commander = placeholder(&entry.arv.commander),
        arv_driver = placeholder(&entry.arv.driver),
        arv_mechanic = placeholder(&entry.arv.mechanic),
        hrv_commander = placeholder(&entry.hrv.commander),
        hrv_driver = placeholder(&entry.hrv.driver),
        hrv_mechanic = placeholder(&entry.hrv.mechanic),
    )
}

fn placeholder(value: &str) -> &str {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() { "[]" } else { trimmed }
}

/// Assembles the daily routine-order bulletin.
///
/// # Arguments
///
/// * `safety_message` - Caller-supplied safety message (uppercased here)
/// * `event_update` - Events/notices body; section tags stay even when
///   this is empty
/// * `regimental_duties_text` - Pre-formatted by
///   [`format_regimental_duties`]
/// * `guard_duty_text` - Already pruned of past dates by the caller
/// * `today` - Embedded in the title line
#[must_use]
pub fn build_routine_order(
    safety_message: &str,
    event_update: &str,
    regimental_duties_text: &str,
    guard_duty_text: &str,
    today: NaiveDate,
) -> String {
    let safety_body: String = if safety_message.trim().is_empty() {
        SAFETY_BOILERPLATE.to_string()
    } else {
        format!(
            "{SAFETY_BOILERPLATE}\n\n{}",
            safety_message.trim().to_uppercase()
        )
    };

    let sections: [String; 4] = [
        section(
            "\u{26a0}\u{fe0f} [CO'S SAFETY MESSAGE] \u{26a0}\u{fe0f}",
            "\u{26a0}\u{fe0f} [END OF CO'S SAFETY MESSAGE] \u{26a0}\u{fe0f}",
            &safety_body,
        ),
        section(
            "\u{1f4e2} [EVENTS / NOTICES] \u{1f4e2}",
            "\u{1f4e2} [END OF EVENTS / NOTICES] \u{1f4e2}",
            event_update.trim(),
        ),
        section(
            "\u{1fa96} [REGIMENTAL DUTIES] \u{1fa96}",
            "\u{1fa96} [END OF REGIMENTAL DUTIES] \u{1fa96}",
            regimental_duties_text.trim(),
        ),
        section(
            "\u{1f482} [GUARD DUTY] \u{1f482}",
            "\u{1f482} [END OF GUARD DUTY] \u{1f482}",
            guard_duty_text.trim(),
        ),
    ];

    format!(
        "\u{1fa96} ROUTINE ORDER FOR {weekday} {date} \u{1fa96}\n\n{body}",
        weekday = weekday_name(today),
        date = format_slash(today),
        body = sections.join("\n\n"),
    )
}

/// Wraps a section body in its matching tag pair. Tags are always
/// present; an empty body collapses to adjacent tag lines.
fn section(open_tag: &str, close_tag: &str, body: &str) -> String {
    if body.is_empty() {
        format!("{open_tag}\n{close_tag}")
    } else {
        format!("{open_tag}\n\n{body}\n\n{close_tag}")
    }
}
