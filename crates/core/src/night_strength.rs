// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Night-strength roster adjustment.
//!
//! A pasted roster contains lines of the exact shape `LABEL: <integer>`.
//! Personnel reported under the absence categories (`OS`, `OTHERS`,
//! `RSO`, `RSI`) are folded into the stay-out count, and those category
//! lines are zeroed in the adjusted output. Every other line, including
//! ones not matching the label shape, is preserved verbatim in its
//! original position.

use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Labels whose counts fold into the stay-out figure and are zeroed.
const ABSENCE_LABELS: [&str; 4] = ["OS", "OTHERS", "RSO", "RSI"];

/// The result of adjusting a night-strength roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightStrengthAdjustment {
    /// The adjusted roster text.
    pub adjusted: String,
    /// The stay-in count as reported.
    pub stay_in: i64,
    /// The recomputed stay-out count.
    pub stay_out: i64,
    /// The total folded in from the absence categories.
    pub moved_out: i64,
    /// `STAYIN` minus the given BLK 210 strength. May be negative; no
    /// validation rejects that, it is passed through arithmetically.
    pub blk420: i64,
}

/// Adjusts a pasted roster, folding absence categories into stay-out.
///
/// Labels are matched case-sensitively, anchored to line start/end with
/// optional surrounding whitespace, first occurrence only. Any absent
/// label defaults to 0.
#[must_use]
pub fn adjust_night_strength(raw_roster: &str, blk210: i64) -> NightStrengthAdjustment {
    let Ok(label_regex) = Regex::new(r"^\s*([A-Z]+)\s*:\s*([0-9]+)\s*$") else {
        return NightStrengthAdjustment {
            adjusted: raw_roster.to_string(),
            stay_in: 0,
            stay_out: 0,
            moved_out: 0,
            blk420: -blk210,
        };
    };

    // First occurrence of each label wins.
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for line in raw_roster.lines() {
        if let Some(captures) = label_regex.captures(line) {
            if let (Some(label), Ok(count)) = (
                capture_label(&captures[1]),
                captures[2].parse::<i64>(),
            ) {
                counts.entry(label).or_insert(count);
            }
        }
    }

    let stay_in: i64 = counts.get("STAYIN").copied().unwrap_or(0);
    let moved_out: i64 = ABSENCE_LABELS
        .iter()
        .map(|label| counts.get(label).copied().unwrap_or(0))
        .sum();
    let stay_out: i64 = counts.get("STAYOUT").copied().unwrap_or(0) + moved_out;
    let blk420: i64 = stay_in - blk210;

    // Rewrite the first occurrence of each target label; everything else
    // passes through verbatim.
    let mut rewritten: Vec<String> = Vec::new();
    let mut consumed: HashSet<&str> = HashSet::new();
    for line in raw_roster.lines() {
        let label: Option<&str> = label_regex
            .captures(line)
            .and_then(|captures| capture_label(&captures[1]));
        match label {
            Some(label) if consumed.insert(label) => {
                if ABSENCE_LABELS.contains(&label) {
                    rewritten.push(format!("{label}: 0"));
                } else if label == "STAYOUT" {
                    rewritten.push(format!("STAYOUT: {stay_out}"));
                } else {
                    rewritten.push(line.to_string());
                }
            }
            _ => rewritten.push(line.to_string()),
        }
    }

    NightStrengthAdjustment {
        adjusted: rewritten.join("\n"),
        stay_in,
        stay_out,
        moved_out,
        blk420,
    }
}

/// Restricts a captured label to the tracked set.
fn capture_label(captured: &str) -> Option<&'static str> {
    ["STAYIN", "STAYOUT", "OS", "OTHERS", "RSO", "RSI"]
        .into_iter()
        .find(|label| *label == captured)
}
