// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster entry types for the guard-duty and routine-order builders.

use crate::dates::default_span_days;
use crate::error::FormError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A supervisory in-charge role for a guard shift, ranked by seniority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IcRole {
    /// Second in charge.
    #[serde(rename = "2IC")]
    TwoIc,
    /// Third in charge.
    #[serde(rename = "3IC")]
    ThreeIc,
    /// Fourth in charge.
    #[serde(rename = "4IC")]
    FourIc,
}

impl IcRole {
    /// All roles in enumeration (seniority) order.
    pub const ALL: [Self; 3] = [Self::TwoIc, Self::ThreeIc, Self::FourIc];

    /// Returns the roster label for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoIc => "2IC",
            Self::ThreeIc => "3IC",
            Self::FourIc => "4IC",
        }
    }

    /// Parses a roster label ("2IC", "3IC", "4IC") into a role.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "2IC" => Some(Self::TwoIc),
            "3IC" => Some(Self::ThreeIc),
            "4IC" => Some(Self::FourIc),
            _ => None,
        }
    }
}

/// One duty date's roster configuration.
///
/// The date is day-granular; time of day is irrelevant and must be
/// normalized away before equality or sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDutyEntry {
    /// The calendar day of the duty.
    pub date: NaiveDate,
    /// Selected in-charge roles, deduplicated, in enumeration order.
    pub ic_types: Vec<IcRole>,
    /// Count of anonymous guard slots.
    pub num_guards: u32,
}

impl GuardDutyEntry {
    /// Creates an entry with no roles and no guards.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            ic_types: Vec::new(),
            num_guards: 0,
        }
    }

    /// Toggles an in-charge role on or off.
    ///
    /// The selected set stays deduplicated and in enumeration order.
    pub fn toggle_role(&mut self, role: IcRole) {
        if let Some(index) = self.ic_types.iter().position(|&r| r == role) {
            self.ic_types.remove(index);
        } else {
            self.ic_types.push(role);
            self.ic_types.sort_unstable();
            self.ic_types.dedup();
        }
    }
}

/// Adds an entry to a collection, keeping it sorted ascending by date.
///
/// # Errors
///
/// Returns `FormError::DuplicateDate` if an entry for the same calendar
/// date already exists.
pub fn add_guard_duty_entry(
    entries: &mut Vec<GuardDutyEntry>,
    entry: GuardDutyEntry,
) -> Result<(), FormError> {
    if entries.iter().any(|existing| existing.date == entry.date) {
        return Err(FormError::DuplicateDate { date: entry.date });
    }
    entries.push(entry);
    entries.sort_by_key(|existing| existing.date);
    Ok(())
}

/// The RCV recovery-duty crew roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryCrew {
    /// Vehicle commander.
    pub commander: String,
    /// Second in command.
    pub second_ic: String,
    /// Multi-line crew list.
    pub crew_list: String,
}

/// An ARV/HRV recovery-duty crew roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryVehicleCrew {
    /// Vehicle commander.
    pub commander: String,
    /// Driver.
    pub driver: String,
    /// Mechanic.
    pub mechanic: String,
}

/// One day's regimental duty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimentalEntry {
    /// The calendar day this entry covers.
    pub date: NaiveDate,
    /// Duty field officer.
    pub dfo: String,
    /// Unit duty officer.
    pub udo: String,
    /// Duty clerk.
    pub duty_clerk: String,
    /// RCV recovery crew.
    pub rcv: RecoveryCrew,
    /// ARV recovery crew.
    pub arv: RecoveryVehicleCrew,
    /// HRV recovery crew.
    pub hrv: RecoveryVehicleCrew,
}

impl RegimentalEntry {
    /// Creates a blank entry for a date.
    #[must_use]
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            dfo: String::new(),
            udo: String::new(),
            duty_clerk: String::new(),
            rcv: RecoveryCrew::default(),
            arv: RecoveryVehicleCrew::default(),
            hrv: RecoveryVehicleCrew::default(),
        }
    }
}

/// Re-derives a regimental entry collection for a new day span.
///
/// The returned collection covers a contiguous run of `span_days`
/// calendar days starting at `today`. Existing entries are preserved by
/// matching on date; new dates receive blank records; dates falling out
/// of range are dropped.
#[must_use]
pub fn resize_regimental_entries(
    existing: &[RegimentalEntry],
    today: NaiveDate,
    span_days: u32,
) -> Vec<RegimentalEntry> {
    (0..span_days)
        .map(|offset| {
            let date: NaiveDate = today + Duration::days(i64::from(offset));
            existing
                .iter()
                .find(|entry| entry.date == date)
                .cloned()
                .unwrap_or_else(|| RegimentalEntry::blank(date))
        })
        .collect()
}

/// Aggregate working state for composing a routine order.
///
/// The guard-duty text is owned and edited by the user as raw text; it is
/// not structurally parsed until generation time, when the pruner runs
/// over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineOrderState {
    /// Free-text CO safety message.
    pub safety_message: String,
    /// Free-text events and notices.
    pub event_update: String,
    /// Contiguous day count covered by the regimental entries.
    pub span_days: u32,
    /// One regimental entry per covered day.
    pub regimental: Vec<RegimentalEntry>,
    /// Raw pasted guard-duty text block.
    pub guard_duty_text: String,
}

impl RoutineOrderState {
    /// Creates a blank state sized by the default span rule for `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        let span_days: u32 = default_span_days(today);
        Self {
            safety_message: String::new(),
            event_update: String::new(),
            span_days,
            regimental: resize_regimental_entries(&[], today, span_days),
            guard_duty_text: String::new(),
        }
    }

    /// Overrides the day span, re-deriving the entry collection.
    pub fn set_span_days(&mut self, today: NaiveDate, span_days: u32) {
        self.span_days = span_days;
        self.regimental = resize_regimental_entries(&self.regimental, today, span_days);
    }
}
