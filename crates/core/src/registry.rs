// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The template registry.
//!
//! Each report type is a [`TemplateDefinition`]: a display name, an
//! ordered field table, and a pure generation function dispatched through
//! [`template_definition`]. The registry is static configuration data;
//! validation walks the field table generically, so no template carries
//! hand-written validation logic.
//!
//! Guard-duty lists and routine orders do not fit the flat-form model.
//! Their definitions carry `custom_ui: true` and no generation function;
//! input collection and rendering happen through the dedicated builders
//! in `guard_duty` and `routine_order`.

use crate::templates;
use chrono::NaiveDate;
use coy_forms_domain::{FieldType, FormError, TemplateField};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Submitted field values, keyed by field key.
pub type ValueMap = BTreeMap<String, String>;

/// A pure template generation function.
///
/// Receives the reduced value map (restricted to declared keys, missing
/// keys resolved to the field's declared default or an empty string) and
/// today's date for templates that embed it.
pub type GenerateFn = fn(&ValueMap, NaiveDate) -> String;

/// 24-hour `HHMM` time-of-day pattern.
pub const TIME_PATTERN: &str = "^([01][0-9]|2[0-3])[0-5][0-9]$";

/// Identifies a report template in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Leave/off application message.
    LeaveApplication,
    /// Medical incident (report sick) report.
    SickReport,
    /// Vehicle status ("HULL BOS") report.
    VehicleStatus,
    /// Night strength roster adjustment report.
    NightStrength,
    /// Guard duty roster list (custom builder).
    GuardDuty,
    /// Daily routine order bulletin (custom builder).
    RoutineOrder,
}

impl TemplateId {
    /// All template identifiers in display order.
    pub const ALL: [Self; 6] = [
        Self::LeaveApplication,
        Self::SickReport,
        Self::VehicleStatus,
        Self::NightStrength,
        Self::GuardDuty,
        Self::RoutineOrder,
    ];

    /// Returns the registry key for this template.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeaveApplication => "leave-application",
            Self::SickReport => "sick-report",
            Self::VehicleStatus => "vehicle-status",
            Self::NightStrength => "night-strength",
            Self::GuardDuty => "guard-duty",
            Self::RoutineOrder => "routine-order",
        }
    }
}

impl FromStr for TemplateId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leave-application" => Ok(Self::LeaveApplication),
            "sick-report" => Ok(Self::SickReport),
            "vehicle-status" => Ok(Self::VehicleStatus),
            "night-strength" => Ok(Self::NightStrength),
            "guard-duty" => Ok(Self::GuardDuty),
            "routine-order" => Ok(Self::RoutineOrder),
            _ => Err(FormError::UnknownTemplate(s.to_string())),
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One report type: display name, field table, and generation strategy.
#[derive(Debug, Clone)]
pub struct TemplateDefinition {
    /// Display name shown to users and recorded in generation logs.
    pub name: &'static str,
    /// Ordered field specifications.
    pub fields: Vec<TemplateField>,
    /// Flat-form generation function. `None` for custom-UI templates.
    pub generate: Option<GenerateFn>,
    /// Marks templates whose input collection is not a flat form.
    pub custom_ui: bool,
}

/// Looks up the definition for a template identifier.
#[must_use]
pub fn template_definition(id: TemplateId) -> TemplateDefinition {
    match id {
        TemplateId::LeaveApplication => leave_application(),
        TemplateId::SickReport => sick_report(),
        TemplateId::VehicleStatus => vehicle_status(),
        TemplateId::NightStrength => night_strength(),
        TemplateId::GuardDuty => TemplateDefinition {
            name: "Guard Duty",
            fields: Vec::new(),
            generate: None,
            custom_ui: true,
        },
        TemplateId::RoutineOrder => TemplateDefinition {
            name: "Routine Order",
            fields: Vec::new(),
            generate: None,
            custom_ui: true,
        },
    }
}

const RANKS: &[&str] = &[
    "REC", "PTE", "LCP", "CPL", "CFC", "3SG", "2SG", "1SG", "3WO", "2LT", "LTA", "CPT",
];

fn leave_application() -> TemplateDefinition {
    TemplateDefinition {
        name: "Leave Application",
        fields: vec![
            TemplateField::new("rank", "Rank", FieldType::SingleSelect).with_options(RANKS),
            TemplateField::new("name", "Name", FieldType::Text)
                .with_placeholder("As in 11B"),
            TemplateField::new("leaveType", "Leave Type", FieldType::SingleSelect).with_options(&[
                "Annual Leave",
                "Off",
                "Medical Leave",
                "Compassionate Leave",
            ]),
            TemplateField::new("isHalfDay", "Half Day", FieldType::Boolean).with_default("false"),
            TemplateField::new("halfDayPeriod", "Half Day Period", FieldType::SingleSelect)
                .with_options(&["AM", "PM"])
                .show_if("isHalfDay", "true"),
            TemplateField::new("startDate", "Start Date", FieldType::Date),
            TemplateField::new("endDate", "End Date", FieldType::Date),
            TemplateField::new("reason", "Reason", FieldType::MultilineText),
            TemplateField::new("contactNumber", "Contact Number", FieldType::Text).with_pattern(
                "^[89][0-9]{7}$",
                Some("Contact number must be 8 digits starting with 8 or 9."),
            ),
        ],
        generate: Some(templates::generate_leave_application),
        custom_ui: false,
    }
}

fn sick_report() -> TemplateDefinition {
    TemplateDefinition {
        name: "Report Sick",
        fields: vec![
            TemplateField::new("rank", "Rank", FieldType::SingleSelect).with_options(RANKS),
            TemplateField::new("name", "Name", FieldType::Text),
            TemplateField::new("incidentDate", "Date Reported", FieldType::Date),
            TemplateField::new("reportTime", "Time Reported", FieldType::Text)
                .with_placeholder("e.g. 0930")
                .with_pattern(TIME_PATTERN, Some("Time must be in 24-hour HHMM format.")),
            TemplateField::new("location", "Location", FieldType::Text),
            TemplateField::new("symptoms", "Symptoms", FieldType::MultilineText),
            TemplateField::new("status", "Status", FieldType::SingleSelect).with_options(&[
                "MC",
                "Light Duty",
                "Observation",
            ]),
            TemplateField::new("numberOfDays", "Number of Days", FieldType::Text)
                .with_pattern("^[0-9]+$", Some("Number of days must be a whole number."))
                .show_if("status", "MC"),
        ],
        generate: Some(templates::generate_sick_report),
        custom_ui: false,
    }
}

fn vehicle_status() -> TemplateDefinition {
    TemplateDefinition {
        name: "HULL BOS",
        fields: vec![
            TemplateField::new("callsign", "Callsign", FieldType::Text),
            TemplateField::new("mid", "MID", FieldType::Text)
                .with_pattern("^[0-9]{5}$", Some("MID must be exactly 5 digits.")),
            TemplateField::new("vehiclePresent", "Vehicle Present", FieldType::Boolean)
                .with_default("true"),
            TemplateField::new("location", "Location", FieldType::Text)
                .show_if("vehiclePresent", "true"),
            TemplateField::new("fuel", "Fuel", FieldType::SingleSelect)
                .with_options(&["FULL", "3/4", "1/2", "1/4"])
                .show_if("vehiclePresent", "true"),
            TemplateField::new("faults", "Faults", FieldType::MultilineText)
                .optional()
                .show_if("vehiclePresent", "true"),
            TemplateField::new("absenceReason", "Absence Reason", FieldType::Text)
                .with_placeholder("e.g. AT WORKSHOP")
                .show_if("vehiclePresent", "false"),
        ],
        generate: Some(templates::generate_vehicle_status),
        custom_ui: false,
    }
}

fn night_strength() -> TemplateDefinition {
    TemplateDefinition {
        name: "Night Strength",
        fields: vec![
            TemplateField::new("rank", "Rank", FieldType::SingleSelect).with_options(RANKS),
            TemplateField::new("name", "Name", FieldType::Text),
            TemplateField::new("blk210", "BLK 210 Strength", FieldType::Text)
                .with_pattern("^[0-9]+$", Some("BLK 210 strength must be a whole number.")),
            TemplateField::new("rosterText", "Pasted Roster", FieldType::MultilineText),
        ],
        generate: Some(templates::generate_night_strength),
        custom_ui: false,
    }
}
