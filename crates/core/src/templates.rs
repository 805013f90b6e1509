// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat-form generation functions, one per registry entry.
//!
//! Each function is pure and total given well-formed input; malformed
//! values (already rejected by the engine for active required fields)
//! degrade to neutral fallbacks rather than panicking.

use crate::night_strength::{NightStrengthAdjustment, adjust_night_strength};
use crate::registry::ValueMap;
use chrono::{Duration, NaiveDate};
use coy_forms_domain::{format_long_span, format_short, format_slash, parse_value_date};

fn value<'a>(values: &'a ValueMap, key: &str) -> &'a str {
    values.get(key).map_or("", String::as_str)
}

fn is_true(values: &ValueMap, key: &str) -> bool {
    value(values, key) == "true"
}

/// Renders a leave/off application message.
pub fn generate_leave_application(values: &ValueMap, today: NaiveDate) -> String {
    let rank: &str = value(values, "rank");
    let name: String = value(values, "name").trim().to_uppercase();
    let leave_type: &str = value(values, "leaveType");
    let start: NaiveDate = parse_value_date(value(values, "startDate")).unwrap_or(today);
    let end: NaiveDate = parse_value_date(value(values, "endDate")).unwrap_or(start);

    let half_day: String = if is_true(values, "isHalfDay") {
        format!(" ({})", value(values, "halfDayPeriod"))
    } else {
        String::new()
    };

    format!(
        "Dear Sir/Ma'am,\n\n\
         {rank} {name} would like to apply for {leave_type} on {span}{half_day}.\n\n\
         Reason: {reason}\n\
         Contact: {contact}\n\n\
         Thank you.",
        span = format_long_span(start, end),
        reason = value(values, "reason").trim(),
        contact = value(values, "contactNumber"),
    )
}

/// Renders a report-sick message.
///
/// A multi-day MC status computes its end date as
/// `incidentDate + (numberOfDays - 1)` days, rendered short-numeric.
pub fn generate_sick_report(values: &ValueMap, today: NaiveDate) -> String {
    let rank: &str = value(values, "rank");
    let name: String = value(values, "name").trim().to_uppercase();
    let incident: NaiveDate = parse_value_date(value(values, "incidentDate")).unwrap_or(today);
    let status: &str = value(values, "status");

    let status_line: String = if status == "MC" {
        let days: i64 = value(values, "numberOfDays").trim().parse().unwrap_or(1);
        let end: NaiveDate = incident + Duration::days(days - 1);
        if days > 1 {
            format!(
                "{days} DAYS MC ({} - {})",
                format_short(incident),
                format_short(end)
            )
        } else {
            format!("1 DAY MC ({})", format_short(incident))
        }
    } else {
        status.to_uppercase()
    };

    format!(
        "SICK REPORT\n\n\
         1. RANK/NAME: {rank} {name}\n\
         2. DATE/TIME REPORTED: {date} {time}HRS\n\
         3. LOCATION: {location}\n\
         4. SYMPTOMS: {symptoms}\n\
         5. STATUS: {status_line}",
        date = format_short(incident),
        time = value(values, "reportTime"),
        location = value(values, "location").trim(),
        symptoms = value(values, "symptoms").trim(),
    )
}

/// Renders a vehicle status ("HULL BOS") report.
///
/// The entire output shape branches on the vehicle-present flag: present
/// yields the full telemetry block with a status glyph; absent yields a
/// reduced block naming the absence reason and a placeholder fault line.
pub fn generate_vehicle_status(values: &ValueMap, _today: NaiveDate) -> String {
    let callsign: &str = value(values, "callsign");
    let mid: &str = value(values, "mid");

    if is_true(values, "vehiclePresent") {
        let faults: &str = value(values, "faults").trim();
        format!(
            "HULL BOS\n\n\
             CALLSIGN: {callsign}\n\
             MID: {mid}\n\
             STATUS: \u{2705}\n\
             LOCATION: {location}\n\
             FUEL: {fuel}\n\
             FAULTS: {faults_line}",
            location = value(values, "location").trim(),
            fuel = value(values, "fuel"),
            faults_line = if faults.is_empty() { "NIL" } else { faults },
        )
    } else {
        format!(
            "HULL BOS\n\n\
             CALLSIGN: {callsign}\n\
             MID: {mid}\n\
             STATUS: \u{274c} ({reason})\n\
             FAULTS: -",
            reason = value(values, "absenceReason").trim().to_uppercase(),
        )
    }
}

/// Renders the adjusted night-strength report.
pub fn generate_night_strength(values: &ValueMap, today: NaiveDate) -> String {
    let rank: &str = value(values, "rank");
    let name: String = value(values, "name").trim().to_uppercase();
    let blk210: i64 = value(values, "blk210").trim().parse().unwrap_or(0);

    let adjustment: NightStrengthAdjustment =
        adjust_night_strength(value(values, "rosterText"), blk210);

    format!(
        "NIGHT STRENGTH REPORT {date}\n\
         REPORTED BY: {rank} {name}\n\n\
         {roster}\n\n\
         STAYIN DETAILS\n\
         BLK210: {blk210}\n\
         BLK420: {blk420}",
        date = format_slash(today),
        roster = adjustment.adjusted.trim_end(),
        blk420 = adjustment.blk420,
    )
}
