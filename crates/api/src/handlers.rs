// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for report generation and analytics.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use coy_forms::{
    TemplateDefinition, TemplateId, build_guard_duty_list, build_routine_order,
    format_regimental_duties, generate, prune_guard_duty_list, template_definition,
};
use coy_forms_domain::{
    FieldType, GuardDutyEntry, IcRole, RecoveryCrew, RecoveryVehicleCrew, RegimentalEntry,
    add_guard_duty_entry, parse_value_date,
};
use coy_forms_persistence::{GenerationEventRow, NewGenerationEvent, SqlitePersistence};
use tracing::{debug, info};

use crate::error::{ApiError, translate_form_error};
use crate::request_response::{
    BuildGuardDutyRequest, FieldInfo, GenerateFormRequest, GenerateFormResponse, GenerationInfo,
    GuardDutyListResponse, ListGenerationsResponse, ListTemplatesResponse, PruneGuardDutyRequest,
    PruneGuardDutyResponse, RecordGenerationRequest, RecordGenerationResponse,
    RegimentalEntryPayload, RoutineOrderRequest, RoutineOrderResponse, ShowIfInfo, TemplateInfo,
};

const fn field_type_key(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Text => "text",
        FieldType::MultilineText => "multiline-text",
        FieldType::SingleSelect => "single-select",
        FieldType::Date => "date",
        FieldType::Boolean => "boolean",
    }
}

/// Lists every registered template in display order.
#[must_use]
pub fn list_templates() -> ListTemplatesResponse {
    let templates: Vec<TemplateInfo> = TemplateId::ALL
        .into_iter()
        .map(|id| {
            let definition: TemplateDefinition = template_definition(id);
            TemplateInfo {
                id: id.as_str().to_string(),
                name: definition.name.to_string(),
                custom_ui: definition.custom_ui,
                fields: definition
                    .fields
                    .iter()
                    .map(|field| FieldInfo {
                        key: field.key.to_string(),
                        label: field.label.to_string(),
                        field_type: field_type_key(field.field_type).to_string(),
                        placeholder: field.placeholder.map(String::from),
                        options: field.options.iter().map(|&o| o.to_string()).collect(),
                        required: field.required,
                        pattern: field.pattern.map(String::from),
                        error_message: field.error_message.map(String::from),
                        default: field.default.map(String::from),
                        show_if: field.show_if.map(|dep| ShowIfInfo {
                            key: dep.key.to_string(),
                            equals: dep.equals.to_string(),
                        }),
                    })
                    .collect(),
            }
        })
        .collect();

    ListTemplatesResponse { templates }
}

/// Validates and generates a flat-form report.
///
/// # Arguments
///
/// * `request` - The template key and submitted values
/// * `today` - Today's date, for templates that embed it
///
/// # Errors
///
/// Returns an error if:
/// - The template key is not registered
/// - The template uses a dedicated builder instead of a flat form
/// - Any validation step rejects the submitted values
pub fn generate_form(
    request: &GenerateFormRequest,
    today: NaiveDate,
) -> Result<GenerateFormResponse, ApiError> {
    let id: TemplateId = TemplateId::from_str(&request.template).map_err(translate_form_error)?;
    let definition: TemplateDefinition = template_definition(id);

    if definition.custom_ui {
        return Err(ApiError::InvalidInput {
            field: String::from("template"),
            message: format!(
                "Template '{}' uses a dedicated builder endpoint",
                request.template
            ),
        });
    }

    let text: String =
        generate(&definition, &request.values, today).map_err(translate_form_error)?;
    debug!(template = %request.template, "Generated flat-form report");

    Ok(GenerateFormResponse {
        template: request.template.clone(),
        template_type: definition.name.to_string(),
        text,
    })
}

/// Builds a guard-duty roster from configured dates.
///
/// # Errors
///
/// Returns an error if:
/// - The month is outside 1-12
/// - Any entry date is not a valid ISO 8601 date
/// - Any in-charge role label is unknown
/// - Two entries share a calendar date
/// - No entries were configured
pub fn build_guard_duty(
    request: &BuildGuardDutyRequest,
) -> Result<GuardDutyListResponse, ApiError> {
    if !(1..=12).contains(&request.month) {
        return Err(ApiError::InvalidInput {
            field: String::from("month"),
            message: format!("Month {} is outside 1-12", request.month),
        });
    }

    let mut entries: Vec<GuardDutyEntry> = Vec::with_capacity(request.entries.len());
    for payload in &request.entries {
        let date: NaiveDate =
            parse_value_date(&payload.date).ok_or_else(|| ApiError::InvalidInput {
                field: String::from("date"),
                message: format!("'{}' is not a valid ISO 8601 date", payload.date),
            })?;

        let mut entry: GuardDutyEntry = GuardDutyEntry::new(date);
        entry.num_guards = payload.num_guards;
        for label in &payload.ic_types {
            let role: IcRole = IcRole::parse(label).ok_or_else(|| ApiError::InvalidInput {
                field: String::from("ic_types"),
                message: format!("'{label}' is not a recognized in-charge role"),
            })?;
            entry.toggle_role(role);
        }

        add_guard_duty_entry(&mut entries, entry).map_err(translate_form_error)?;
    }

    let text: String = build_guard_duty_list(request.month - 1, request.year, &entries)
        .map_err(translate_form_error)?;
    debug!(
        month = request.month,
        year = request.year,
        entry_count = entries.len(),
        "Built guard-duty roster"
    );

    Ok(GuardDutyListResponse { text })
}

/// Prunes past dates from a pasted guard-duty roster.
///
/// This operation never fails: text the pruner cannot interpret is
/// returned unchanged.
#[must_use]
pub fn prune_guard_duty(request: &PruneGuardDutyRequest, today: NaiveDate) -> PruneGuardDutyResponse {
    PruneGuardDutyResponse {
        text: prune_guard_duty_list(&request.text, today),
    }
}

/// Composes the daily routine-order bulletin.
///
/// The pasted guard-duty text is pruned of past dates before embedding.
///
/// # Errors
///
/// Returns an error if any regimental entry date is not a valid ISO 8601
/// date.
pub fn compose_routine_order(
    request: &RoutineOrderRequest,
    today: NaiveDate,
) -> Result<RoutineOrderResponse, ApiError> {
    let mut regimental: Vec<RegimentalEntry> = Vec::with_capacity(request.regimental.len());
    for payload in &request.regimental {
        regimental.push(regimental_entry_from_payload(payload)?);
    }

    let duties_text: String = format_regimental_duties(&regimental);
    let guard_duty_text: String = prune_guard_duty_list(&request.guard_duty_text, today);

    let text: String = build_routine_order(
        &request.safety_message,
        &request.event_update,
        &duties_text,
        &guard_duty_text,
        today,
    );
    debug!(day_count = regimental.len(), "Composed routine order");

    Ok(RoutineOrderResponse { text })
}

fn regimental_entry_from_payload(
    payload: &RegimentalEntryPayload,
) -> Result<RegimentalEntry, ApiError> {
    let date: NaiveDate =
        parse_value_date(&payload.date).ok_or_else(|| ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{}' is not a valid ISO 8601 date", payload.date),
        })?;

    Ok(RegimentalEntry {
        date,
        dfo: payload.dfo.clone(),
        udo: payload.udo.clone(),
        duty_clerk: payload.duty_clerk.clone(),
        rcv: RecoveryCrew {
            commander: payload.rcv.commander.clone(),
            second_ic: payload.rcv.second_ic.clone(),
            crew_list: payload.rcv.crew_list.clone(),
        },
        arv: RecoveryVehicleCrew {
            commander: payload.arv.commander.clone(),
            driver: payload.arv.driver.clone(),
            mechanic: payload.arv.mechanic.clone(),
        },
        hrv: RecoveryVehicleCrew {
            commander: payload.hrv.commander.clone(),
            driver: payload.hrv.driver.clone(),
            mechanic: payload.hrv.mechanic.clone(),
        },
    })
}

/// Records one successful generation as an append-only event.
///
/// # Arguments
///
/// * `persistence` - The persistence layer to write to
/// * `request` - The template key and submitted field values
/// * `user_agent` - The caller's user agent, if one was sent
///
/// # Errors
///
/// Returns an error if the template key is not registered or the write
/// fails.
pub fn record_generation(
    persistence: &mut SqlitePersistence,
    request: &RecordGenerationRequest,
    user_agent: Option<String>,
) -> Result<RecordGenerationResponse, ApiError> {
    let id: TemplateId = TemplateId::from_str(&request.template).map_err(translate_form_error)?;
    let definition: TemplateDefinition = template_definition(id);

    let fields_json: String =
        serde_json::to_string(&request.fields).map_err(|e| ApiError::Internal {
            message: format!("Failed to serialize field values: {e}"),
        })?;

    let event: NewGenerationEvent = NewGenerationEvent {
        template: request.template.clone(),
        template_type: definition.name.to_string(),
        fields_json,
        user_agent,
        created_at: Utc::now().to_rfc3339(),
    };

    let event_id: i64 = persistence.insert_generation_event(&event)?;
    info!(event_id, template = %request.template, "Recorded generation event");

    Ok(RecordGenerationResponse {
        event_id,
        message: format!("Recorded generation of '{}'", request.template),
    })
}

/// Lists recorded generation events, newest first.
///
/// Field values that fail to parse back from storage are surfaced as an
/// empty map rather than failing the whole listing.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_generations(
    persistence: &mut SqlitePersistence,
    limit: i64,
) -> Result<ListGenerationsResponse, ApiError> {
    let rows: Vec<GenerationEventRow> = persistence.list_generation_events(limit)?;

    let generations: Vec<GenerationInfo> = rows
        .into_iter()
        .map(|row| {
            let fields: BTreeMap<String, String> =
                serde_json::from_str(&row.fields_json).unwrap_or_default();
            GenerationInfo {
                event_id: row.event_id,
                template: row.template,
                template_type: row.template_type,
                fields,
                user_agent: row.user_agent,
                created_at: row.created_at,
            }
        })
        .collect();

    Ok(ListGenerationsResponse { generations })
}
