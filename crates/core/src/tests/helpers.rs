// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ValueMap;
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn values(pairs: &[(&str, &str)]) -> ValueMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// A fully valid leave application submission.
pub fn leave_values() -> ValueMap {
    values(&[
        ("rank", "3SG"),
        ("name", "John Tan"),
        ("leaveType", "Annual Leave"),
        ("isHalfDay", "false"),
        ("startDate", "2025-06-03"),
        ("endDate", "2025-06-05"),
        ("reason", "Family event"),
        ("contactNumber", "91234567"),
    ])
}

/// A fully valid report-sick submission.
pub fn sick_values() -> ValueMap {
    values(&[
        ("rank", "CPL"),
        ("name", "Wei Ming"),
        ("incidentDate", "2025-06-03"),
        ("reportTime", "0930"),
        ("location", "Medical Centre"),
        ("symptoms", "Fever and cough"),
        ("status", "MC"),
        ("numberOfDays", "2"),
    ])
}
