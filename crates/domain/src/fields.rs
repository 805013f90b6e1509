// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Declarative form-field specifications.
//!
//! Templates describe their inputs as ordered tables of [`TemplateField`]
//! values. The specifications are static configuration data: they are
//! defined once per template and never mutated at runtime. Only the
//! submitted value associated with a field key varies.

use serde::Serialize;

/// The input widget class of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    MultilineText,
    /// One choice from a fixed ordered option list.
    SingleSelect,
    /// A calendar date, submitted as an ISO 8601 string.
    Date,
    /// A boolean toggle, submitted as "true" or "false".
    Boolean,
}

/// A visibility dependency on another field in the same template.
///
/// A guarded field is active only while the referenced field's current
/// value equals the given string. The referenced key must belong to the
/// same template; dependency depth is 1 (no chains, no cycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowIf {
    /// The key of the controlling field.
    pub key: &'static str,
    /// The value the controlling field must currently hold.
    pub equals: &'static str,
}

/// One form input's specification within a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateField {
    /// Unique identifier within the template.
    pub key: &'static str,
    /// Display label, also used in validation messages.
    pub label: &'static str,
    /// The input widget class.
    pub field_type: FieldType,
    /// Optional placeholder text for empty inputs.
    pub placeholder: Option<&'static str>,
    /// Ordered option list. Non-empty only for single-select fields.
    pub options: &'static [&'static str],
    /// Whether the field must be filled while active. Defaults to true.
    pub required: bool,
    /// Optional regular expression the value must match in full.
    pub pattern: Option<&'static str>,
    /// Optional message shown when the pattern check fails.
    pub error_message: Option<&'static str>,
    /// Optional pre-filled value.
    pub default: Option<&'static str>,
    /// Optional visibility dependency.
    pub show_if: Option<ShowIf>,
}

impl TemplateField {
    /// Creates a required field with no options, pattern, or dependency.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            placeholder: None,
            options: &[],
            required: true,
            pattern: None,
            error_message: None,
            default: None,
            show_if: None,
        }
    }

    /// Sets the ordered option list for a single-select field.
    #[must_use]
    pub const fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    /// Marks the field as not required.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets a full-match pattern and an optional failure message.
    #[must_use]
    pub const fn with_pattern(
        mut self,
        pattern: &'static str,
        error_message: Option<&'static str>,
    ) -> Self {
        self.pattern = Some(pattern);
        self.error_message = error_message;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Sets a pre-filled default value.
    #[must_use]
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Guards the field behind another field's current value.
    #[must_use]
    pub const fn show_if(mut self, key: &'static str, equals: &'static str) -> Self {
        self.show_if = Some(ShowIf { key, equals });
        self
    }
}
