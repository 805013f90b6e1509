// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during form validation and generation.
///
/// All variants except `Internal` are expected, user-correctable
/// conditions surfaced directly to the caller. `Internal` is the
/// last-resort boundary catch-all for anything outside the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// An active required field has no value or a blank value.
    MissingField {
        /// The display label of the offending field.
        label: String,
    },
    /// An active field's value fails its declared pattern.
    InvalidFormat {
        /// The display label of the offending field.
        label: String,
        /// The field's declared error message, or the default one.
        message: String,
    },
    /// A required date field is blank or unparseable.
    InvalidDate {
        /// The display label of the offending field.
        label: String,
    },
    /// A detected end date precedes its start date.
    DateRange {
        /// The display label of the start-date field.
        start_label: String,
        /// The display label of the end-date field.
        end_label: String,
    },
    /// Guard-duty generation was attempted with zero configured dates.
    NoEntries,
    /// A guard-duty date is already present in the collection.
    DuplicateDate {
        /// The duplicate calendar date.
        date: NaiveDate,
    },
    /// The named template does not exist in the registry.
    UnknownTemplate(String),
    /// An unexpected failure during generation. Reported generically.
    Internal {
        /// A description of the internal failure.
        message: String,
    },
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label } => {
                write!(f, "Please fill in \"{label}\"")
            }
            Self::InvalidFormat { message, .. } => write!(f, "{message}"),
            Self::InvalidDate { label } => {
                write!(f, "Please provide a valid date for \"{label}\"")
            }
            Self::DateRange {
                start_label,
                end_label,
            } => {
                write!(
                    f,
                    "\"{end_label}\" cannot be earlier than \"{start_label}\""
                )
            }
            Self::NoEntries => write!(f, "Add at least one guard duty date"),
            Self::DuplicateDate { date } => {
                write!(f, "A guard duty entry for {date} already exists")
            }
            Self::UnknownTemplate(id) => write!(f, "Unknown template: {id}"),
            Self::Internal { message } => {
                write!(f, "Something went wrong ({message}). Please try again")
            }
        }
    }
}

impl std::error::Error for FormError {}
