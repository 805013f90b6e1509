// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::request_response::{GenerateFormRequest, GuardDutyEntryPayload};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// A fully valid leave application request.
pub fn leave_request() -> GenerateFormRequest {
    GenerateFormRequest {
        template: String::from("leave-application"),
        values: fields(&[
            ("rank", "3SG"),
            ("name", "John Tan"),
            ("leaveType", "Annual Leave"),
            ("isHalfDay", "false"),
            ("startDate", "2025-06-03"),
            ("endDate", "2025-06-05"),
            ("reason", "Family event"),
            ("contactNumber", "91234567"),
        ]),
    }
}

pub fn duty_entry(iso_date: &str, ic_types: &[&str], num_guards: u32) -> GuardDutyEntryPayload {
    GuardDutyEntryPayload {
        date: String::from(iso_date),
        ic_types: ic_types.iter().map(|&label| label.to_string()).collect(),
        num_guards,
    }
}
