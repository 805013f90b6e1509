// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use coy_forms_domain::FormError;
use coy_forms_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from core/domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A validation rule was violated by the submitted values.
    ValidationFailed {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValidationFailed { rule, message } => {
                write!(f, "Validation failed ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: format!("Persistence failure: {err}"),
        }
    }
}

/// Translates a form error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_form_error(err: FormError) -> ApiError {
    let message: String = err.to_string();
    match err {
        FormError::MissingField { .. } => ApiError::ValidationFailed {
            rule: String::from("required_field"),
            message,
        },
        FormError::InvalidFormat { .. } => ApiError::ValidationFailed {
            rule: String::from("field_pattern"),
            message,
        },
        FormError::InvalidDate { .. } => ApiError::ValidationFailed {
            rule: String::from("date_validity"),
            message,
        },
        FormError::DateRange { .. } => ApiError::ValidationFailed {
            rule: String::from("date_ordering"),
            message,
        },
        FormError::NoEntries => ApiError::ValidationFailed {
            rule: String::from("guard_duty_entries"),
            message,
        },
        FormError::DuplicateDate { .. } => ApiError::ValidationFailed {
            rule: String::from("unique_guard_duty_date"),
            message,
        },
        FormError::UnknownTemplate(key) => ApiError::ResourceNotFound {
            resource_type: String::from("Template"),
            message: format!("Template '{key}' does not exist"),
        },
        FormError::Internal { message } => ApiError::Internal { message },
    }
}
