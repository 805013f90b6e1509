// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-date naming and formatting utilities.
//!
//! All generated forms render dates at day granularity in one of three
//! shapes:
//!
//! - long form `D MMMM` (e.g. "3 June") for leave/off windows
//! - short numeric form `DDMMYY` for incident timestamps
//! - slash form `DD/MM/YYYY` for report titles
//!
//! Submitted field values carry dates as ISO 8601 (`YYYY-MM-DD`) strings;
//! [`parse_value_date`] is the single parsing entry point for those.

use chrono::{Datelike, NaiveDate, Weekday};

/// Full month names, indexed by zero-based month.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the uppercase weekday name for a date (e.g. "SATURDAY").
#[must_use]
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// Returns the full month name for a zero-based month index.
///
/// Returns `None` if the index is outside 0-11.
#[must_use]
pub fn month_name(month0: u32) -> Option<&'static str> {
    usize::try_from(month0)
        .ok()
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
}

/// Parses a full month name (case-insensitive) to its zero-based index.
#[must_use]
pub fn parse_month_name(token: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(token.trim()))
        .and_then(|index| u32::try_from(index).ok())
}

/// Formats a date in short numeric form `DDMMYY` (e.g. "030625").
#[must_use]
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d%m%y").to_string()
}

/// Formats a date in slash form `DD/MM/YYYY` (e.g. "03/06/2025").
#[must_use]
pub fn format_slash(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a date in long form `D MMMM` (e.g. "3 June").
///
/// The day carries no zero padding.
#[must_use]
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{} {}",
        date.day(),
        month_name(date.month0()).unwrap_or_default()
    )
}

/// Formats a date window in long form.
///
/// A window whose start equals its end collapses to a single date string
/// rather than "X to X".
#[must_use]
pub fn format_long_span(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_long(start)
    } else {
        format!("{} to {}", format_long(start), format_long(end))
    }
}

/// Returns the default routine-order day span for a given date.
///
/// Monday-Thursday cover today and tomorrow; Friday through Sunday extend
/// the span through the following Monday. Users may override the span to
/// any value from 1 to 4.
#[must_use]
pub fn default_span_days(date: NaiveDate) -> u32 {
    match date.weekday() {
        Weekday::Fri => 4,
        Weekday::Sat => 3,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Sun => 2,
    }
}

/// Parses a submitted field value as an ISO 8601 calendar date.
#[must_use]
pub fn parse_value_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
