// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The validation and generation engine.
//!
//! One generic pipeline walks a template's field table against the
//! submitted values: visibility resolution, required-field check, anchored
//! pattern check, date sanity, start/end ordering, then generation. The
//! checks run in that order and short-circuit on the first failure.

use crate::registry::{TemplateDefinition, ValueMap};
use chrono::NaiveDate;
use coy_forms_domain::{FieldType, FormError, TemplateField, parse_value_date};
use regex::Regex;

/// Validates submitted values against a template and renders the final
/// text.
///
/// # Arguments
///
/// * `template` - The template definition to validate against
/// * `values` - The submitted field values, keyed by field key
/// * `today` - Today's date, for templates that embed it
///
/// # Returns
///
/// The rendered text on success.
///
/// # Errors
///
/// Returns the first failing check as a `FormError`:
/// - `MissingField` for an active required field with no/blank value
/// - `InvalidFormat` for an active value failing its declared pattern
/// - `InvalidDate` for a required date field that does not parse
/// - `DateRange` when a detected end date precedes its start date
/// - `Internal` when the template has no flat-form generator
pub fn generate(
    template: &TemplateDefinition,
    values: &ValueMap,
    today: NaiveDate,
) -> Result<String, FormError> {
    let Some(generate_fn) = template.generate else {
        return Err(FormError::Internal {
            message: format!("template \"{}\" requires a dedicated builder", template.name),
        });
    };

    // Keys are restricted to the declared field table; a key absent from
    // the submission falls back to the field's declared default. An
    // explicitly submitted empty string does not.
    let effective: ValueMap = template
        .fields
        .iter()
        .map(|field| {
            let field_value: &str = values
                .get(field.key)
                .map_or_else(|| field.default.unwrap_or(""), String::as_str);
            (field.key.to_string(), field_value.to_string())
        })
        .collect();

    // Step 1: visibility resolution. Inactive fields are excluded from
    // every subsequent check.
    let active: Vec<&TemplateField> = template
        .fields
        .iter()
        .filter(|field| is_active(field, &effective))
        .collect();

    // Step 2: required-field check, in declaration order.
    for field in &active {
        if field.required && submitted(&effective, field.key).trim().is_empty() {
            return Err(FormError::MissingField {
                label: field.label.to_string(),
            });
        }
    }

    // Step 3: anchored pattern check on non-empty values.
    for field in &active {
        let field_value: &str = submitted(&effective, field.key);
        if field_value.is_empty() {
            continue;
        }
        if let Some(pattern) = field.pattern {
            if !matches_fully(pattern, field_value)? {
                return Err(FormError::InvalidFormat {
                    label: field.label.to_string(),
                    message: field.error_message.map_or_else(
                        || format!("Invalid input in \"{}\".", field.label),
                        ToString::to_string,
                    ),
                });
            }
        }
    }

    // Step 4: date sanity for active required date fields.
    for field in &active {
        if field.field_type == FieldType::Date
            && field.required
            && parse_value_date(submitted(&effective, field.key)).is_none()
        {
            return Err(FormError::InvalidDate {
                label: field.label.to_string(),
            });
        }
    }

    // Step 5: start/end ordering, when the template declares exactly one
    // date field keyed "start" and exactly one keyed "end".
    check_date_range(template, &effective)?;

    // Step 6: generation over the reduced value map.
    Ok(generate_fn(&effective, today))
}

fn submitted<'a>(values: &'a ValueMap, key: &str) -> &'a str {
    values.get(key).map_or("", String::as_str)
}

/// A field is active iff it has no `show_if` or its referenced field's
/// current value equals the specified string.
fn is_active(field: &TemplateField, values: &ValueMap) -> bool {
    field
        .show_if
        .is_none_or(|dependency| submitted(values, dependency.key) == dependency.equals)
}

/// Checks a pattern in full-string (anchored) sense.
fn matches_fully(pattern: &str, value: &str) -> Result<bool, FormError> {
    let regex: Regex = Regex::new(pattern).map_err(|err| FormError::Internal {
        message: format!("invalid field pattern: {err}"),
    })?;
    Ok(regex
        .find(value)
        .is_some_and(|found| found.start() == 0 && found.end() == value.len()))
}

fn check_date_range(template: &TemplateDefinition, values: &ValueMap) -> Result<(), FormError> {
    let date_fields_with = |needle: &str| -> Vec<&TemplateField> {
        template
            .fields
            .iter()
            .filter(|field| field.field_type == FieldType::Date && field.key.contains(needle))
            .collect()
    };

    let starts: Vec<&TemplateField> = date_fields_with("start");
    let ends: Vec<&TemplateField> = date_fields_with("end");
    let (&[start_field], &[end_field]) = (starts.as_slice(), ends.as_slice()) else {
        return Ok(());
    };

    if let (Some(start), Some(end)) = (
        parse_value_date(submitted(values, start_field.key)),
        parse_value_date(submitted(values, end_field.key)),
    ) {
        if end < start {
            return Err(FormError::DateRange {
                start_label: start_field.label.to_string(),
                end_label: end_field.label.to_string(),
            });
        }
    }

    Ok(())
}
