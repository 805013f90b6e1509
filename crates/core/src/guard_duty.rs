// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guard-duty list building and date pruning.
//!
//! The builder produces a dated roster text block from configured
//! entries. The pruner parses a previously generated (or hand-edited)
//! list back into dated sub-blocks and discards past dates; it is used
//! when composing the daily routine order so only future duties remain.
//!
//! The pruner is deliberately tolerant: date lines may carry decorations
//! ("7/2 (PM) (SATURDAY)"), the header is optional, and unrecognizable
//! input is returned unchanged rather than failing. Re-running the pruner
//! on its own output yields the same output.

use chrono::{Datelike, NaiveDate};
use coy_forms_domain::{FormError, GuardDutyEntry, IcRole, month_name, parse_month_name, weekday_name};
use regex::Regex;

/// Separator emitted by the builder between dated blocks.
const BUILD_SEPARATOR: &str = "==========";

/// Canonical separator the pruner uses when rejoining kept blocks.
const PRUNE_SEPARATOR: &str = "==============";

/// Builds a dated guard-duty roster text block.
///
/// # Arguments
///
/// * `month0` - Zero-based month for the header (0 = January)
/// * `year` - Four-digit year for the header
/// * `entries` - Roster entries, ordered ascending by date
///
/// # Returns
///
/// The roster text: a `GUARD DUTY {MONTH} {YEAR}` header, then one block
/// per entry separated by a ten-`=` line. Each block opens with a
/// `{day}/{month} ({WEEKDAY})` line followed by a two-line stanza per
/// selected in-charge role and per anonymous guard slot, fields left
/// empty for manual fill-in.
///
/// # Errors
///
/// * `FormError::NoEntries` if `entries` is empty
/// * `FormError::Internal` if `month0` is outside 0-11
pub fn build_guard_duty_list(
    month0: u32,
    year: i32,
    entries: &[GuardDutyEntry],
) -> Result<String, FormError> {
    if entries.is_empty() {
        return Err(FormError::NoEntries);
    }
    let month: &str = month_name(month0).ok_or_else(|| FormError::Internal {
        message: format!("month index {month0} out of range"),
    })?;

    let mut blocks: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        blocks.push(build_block(entry));
    }

    Ok(format!(
        "GUARD DUTY {} {year}\n\n{}",
        month.to_uppercase(),
        blocks.join(&format!("\n\n{BUILD_SEPARATOR}\n\n")),
    ))
}

fn build_block(entry: &GuardDutyEntry) -> String {
    let mut block: String = format!(
        "{}/{} ({})\n",
        entry.date.day(),
        entry.date.month(),
        weekday_name(entry.date),
    );
    for role in IcRole::ALL {
        if entry.ic_types.contains(&role) {
            block.push_str(&format!("{}: \nNUMBER: \n\n", role.as_str()));
        }
    }
    for _ in 0..entry.num_guards {
        block.push_str("G: \nNUMBER: \n\n");
    }
    block.trim_end().to_string()
}

/// Removes dated sub-blocks older than `today` from a guard-duty text
/// block.
///
/// Comparison is date-only; the header and inter-block formatting are
/// preserved for what remains. This transformation never fails: input
/// with no recognizable date line at all is returned unchanged, and an
/// empty input yields an empty string. It is idempotent and lossy by
/// design (free text above the first date line does not survive).
#[must_use]
pub fn prune_guard_duty_list(raw: &str, today: NaiveDate) -> String {
    let text: String = raw.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return String::new();
    }

    let Ok(header_regex) = Regex::new(r"(?i)^\s*GUARD DUTY\s+([A-Za-z]+)\s+([0-9]{4})\s*$") else {
        return raw.to_string();
    };
    let Ok(date_line_regex) = Regex::new(r"^\s*([0-9]{1,2})/([0-9]{1,2})\b.*$") else {
        return raw.to_string();
    };

    // Recognize an optional header line and drop it from the body scan.
    let mut header: Option<(String, u32, i32)> = None;
    let mut body: Vec<&str> = Vec::new();
    for line in text.lines() {
        if header.is_none() {
            if let Some(captures) = header_regex.captures(line) {
                let month0: Option<u32> = parse_month_name(&captures[1]);
                let year: Option<i32> = captures[2].parse().ok();
                if let (Some(month0), Some(year)) = (month0, year) {
                    header = Some((line.trim().to_string(), month0, year));
                    continue;
                }
            }
        }
        body.push(line);
    }

    // Each date line starts a block running up to the next date line.
    let starts: Vec<usize> = body
        .iter()
        .enumerate()
        .filter_map(|(index, line)| date_line_regex.is_match(line).then_some(index))
        .collect();
    if starts.is_empty() {
        // Malformed input: pruning is inapplicable.
        return raw.to_string();
    }

    let fallback_month0: u32 = header.as_ref().map_or_else(|| today.month0(), |h| h.1);
    let year: i32 = header.as_ref().map_or_else(|| today.year(), |h| h.2);

    let mut kept: Vec<String> = Vec::new();
    for (position, &start) in starts.iter().enumerate() {
        let end: usize = starts.get(position + 1).copied().unwrap_or(body.len());
        let block: &[&str] = &body[start..end];
        if block_date(block, &date_line_regex, fallback_month0, year)
            .is_none_or(|date| date >= today)
        {
            kept.push(trim_block(block));
        }
    }

    let rebuilt: String = kept.join(&format!("\n\n{PRUNE_SEPARATOR}\n\n"));
    match header {
        Some((header_line, _, _)) if rebuilt.is_empty() => header_line,
        Some((header_line, _, _)) => format!("{header_line}\n\n{rebuilt}"),
        None => rebuilt,
    }
}

/// Derives the calendar date of a block from its opening date line.
///
/// The month numeral on the line is one-based; an out-of-range numeral
/// falls back to the header's month rather than discarding the block.
/// Returns `None` when no valid date can be derived, in which case the
/// caller keeps the block.
fn block_date(
    block: &[&str],
    date_line_regex: &Regex,
    fallback_month0: u32,
    year: i32,
) -> Option<NaiveDate> {
    let captures = date_line_regex.captures(block.first()?)?;
    let day: u32 = captures[1].parse().ok()?;
    let month0: u32 = captures[2]
        .parse::<u32>()
        .ok()
        .and_then(|month| month.checked_sub(1))
        .filter(|&month0| month0 <= 11)
        .unwrap_or(fallback_month0);
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
}

/// Strips trailing whitespace and trailing separator lines from a block.
fn trim_block(block: &[&str]) -> String {
    let mut lines: Vec<&str> = block.to_vec();
    while let Some(last) = lines.last() {
        let trimmed: &str = last.trim();
        if trimmed.is_empty() || trimmed.chars().all(|c| c == '=') {
            lines.pop();
        } else {
            break;
        }
    }
    lines
        .join("\n")
        .trim_end()
        .to_string()
}
