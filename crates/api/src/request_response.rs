// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Visibility dependency of one form field on another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowIfInfo {
    /// The key of the controlling field.
    pub key: String,
    /// The value the controlling field must currently hold.
    pub equals: String,
}

/// One form field's specification, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Unique identifier within the template.
    pub key: String,
    /// Display label.
    pub label: String,
    /// The input widget class (kebab-case).
    pub field_type: String,
    /// Optional placeholder text.
    pub placeholder: Option<String>,
    /// Ordered option list for single-select fields.
    pub options: Vec<String>,
    /// Whether the field must be filled while visible.
    pub required: bool,
    /// Optional anchored pattern the value must match in full.
    pub pattern: Option<String>,
    /// Optional message shown when the pattern check fails.
    pub error_message: Option<String>,
    /// Optional pre-filled value.
    pub default: Option<String>,
    /// Optional visibility dependency.
    pub show_if: Option<ShowIfInfo>,
}

/// One registry entry, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// The registry key (e.g., `leave-application`).
    pub id: String,
    /// The display name.
    pub name: String,
    /// Whether this template uses a dedicated builder instead of a flat form.
    pub custom_ui: bool,
    /// Ordered field specifications. Empty for custom-UI templates.
    pub fields: Vec<FieldInfo>,
}

/// API response listing all registered templates in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTemplatesResponse {
    /// The registered templates.
    pub templates: Vec<TemplateInfo>,
}

/// API request to generate a flat-form report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFormRequest {
    /// The registry key of the template to generate.
    pub template: String,
    /// Submitted values, keyed by field key.
    pub values: BTreeMap<String, String>,
}

/// API response for a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateFormResponse {
    /// The registry key of the generated template.
    pub template: String,
    /// The template's display name.
    pub template_type: String,
    /// The rendered report text.
    pub text: String,
}

/// One configured guard-duty date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDutyEntryPayload {
    /// The calendar day of the duty (ISO 8601, `YYYY-MM-DD`).
    pub date: String,
    /// Selected in-charge roles (`2IC`, `3IC`, `4IC`).
    pub ic_types: Vec<String>,
    /// Count of anonymous guard slots.
    pub num_guards: u32,
}

/// API request to build a guard-duty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildGuardDutyRequest {
    /// The roster month (1-12).
    pub month: u32,
    /// The roster year.
    pub year: i32,
    /// The configured dates.
    pub entries: Vec<GuardDutyEntryPayload>,
}

/// API response carrying a built guard-duty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDutyListResponse {
    /// The roster text.
    pub text: String,
}

/// API request to prune past dates from a pasted guard-duty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneGuardDutyRequest {
    /// The raw pasted roster text.
    pub text: String,
}

/// API response carrying a pruned guard-duty roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneGuardDutyResponse {
    /// The pruned roster text.
    pub text: String,
}

/// The RCV recovery-duty crew roster, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryCrewPayload {
    /// Vehicle commander.
    pub commander: String,
    /// Second in command.
    pub second_ic: String,
    /// Multi-line crew list.
    pub crew_list: String,
}

/// An ARV/HRV recovery-duty crew roster, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryVehicleCrewPayload {
    /// Vehicle commander.
    pub commander: String,
    /// Driver.
    pub driver: String,
    /// Mechanic.
    pub mechanic: String,
}

/// One day's regimental duty roster, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimentalEntryPayload {
    /// The calendar day this entry covers (ISO 8601, `YYYY-MM-DD`).
    pub date: String,
    /// Duty field officer.
    pub dfo: String,
    /// Unit duty officer.
    pub udo: String,
    /// Duty clerk.
    pub duty_clerk: String,
    /// RCV recovery crew.
    pub rcv: RecoveryCrewPayload,
    /// ARV recovery crew.
    pub arv: RecoveryVehicleCrewPayload,
    /// HRV recovery crew.
    pub hrv: RecoveryVehicleCrewPayload,
}

/// API request to compose a routine-order bulletin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineOrderRequest {
    /// Free-text CO safety message. May be empty.
    pub safety_message: String,
    /// Free-text events and notices. May be empty.
    pub event_update: String,
    /// One regimental entry per covered day.
    pub regimental: Vec<RegimentalEntryPayload>,
    /// Raw pasted guard-duty text; past dates are pruned before embedding.
    pub guard_duty_text: String,
}

/// API response carrying a composed routine order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineOrderResponse {
    /// The bulletin text.
    pub text: String,
}

/// API request to record one successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordGenerationRequest {
    /// The registry key of the generated template.
    pub template: String,
    /// The submitted field values, keyed by field key.
    pub fields: BTreeMap<String, String>,
}

/// API response for a recorded generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordGenerationResponse {
    /// The assigned event ID.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// One recorded generation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInfo {
    /// The assigned event ID.
    pub event_id: i64,
    /// The registry key of the generated template.
    pub template: String,
    /// The template's display name at the time of generation.
    pub template_type: String,
    /// The submitted field values.
    pub fields: BTreeMap<String, String>,
    /// The caller's user agent, if one was sent.
    pub user_agent: Option<String>,
    /// When the event was recorded (RFC 3339).
    pub created_at: String,
}

/// API response listing recorded generation events, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGenerationsResponse {
    /// The recorded events.
    pub generations: Vec<GenerationInfo>,
}
