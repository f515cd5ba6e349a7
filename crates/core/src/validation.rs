//! Field validator for movie payloads.
//!
//! Rules are declared on [`MovieInput`] with `validator` derives; this module
//! turns the resulting [`ValidationErrors`] into ordered, human-readable
//! violation strings of the form `"<field>: <message>"`.

use std::borrow::Cow;
use std::collections::HashMap;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;
use crate::movie::MovieInput;

/// Fixed message per rule code.
const RULE_MESSAGES: [(&str, &str); 8] = [
    ("required", "This field is required"),
    ("email", "Invalid email format"),
    ("min", "Value is below the minimum allowed"),
    ("max", "Value exceeds the maximum allowed"),
    ("dive", "Invalid value in the list"),
    ("url", "Invalid URL format"),
    ("datetime", "Invalid date format, expected YYYY-MM-DD"),
    ("numeric", "This field must be a numeric value"),
];

/// Validates movie payloads.
///
/// Built once at startup and shared read-only between requests; holds no
/// interior mutability.
#[derive(Debug, Clone)]
pub struct MovieValidator {
    messages: HashMap<&'static str, &'static str>,
}

impl Default for MovieValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieValidator {
    pub fn new() -> Self {
        Self {
            messages: RULE_MESSAGES.into_iter().collect(),
        }
    }

    /// Validate a create/update payload.
    ///
    /// Returns [`CoreError::Validation`] carrying every violation found.
    pub fn validate(&self, input: &MovieInput) -> Result<(), CoreError> {
        match input.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(CoreError::Validation(
                self.violations(&errors, &MovieInput::FIELDS),
            )),
        }
    }

    /// Flatten `errors` into violation strings, walking `fields` in order.
    ///
    /// A plain field contributes the message of its first failing rule. A
    /// list field contributes one violation per failing element, named
    /// `field[index]`. Fields present in `errors` but missing from `fields`
    /// are appended afterwards in name order.
    pub fn violations(&self, errors: &ValidationErrors, fields: &[&str]) -> Vec<String> {
        let all = errors.errors();
        let mut names: Vec<&str> = fields
            .iter()
            .copied()
            .filter(|f| all.contains_key(*f))
            .collect();
        let mut extra: Vec<&str> = all
            .keys()
            .map(|k| &**k)
            .filter(|k| !fields.contains(k))
            .collect();
        extra.sort_unstable();
        names.extend(extra);

        let mut out = Vec::new();
        for name in names {
            let Some(kind) = all.get(name) else {
                continue;
            };
            self.push_kind(name, kind, &mut out);
        }
        out
    }

    /// Human-readable message for a rule code.
    pub fn message_for<'a>(&self, code: &'a str) -> Cow<'a, str> {
        match self.messages.get(code) {
            Some(msg) => Cow::Borrowed(*msg),
            None => Cow::Owned(format!("Validation failed on {code} rule")),
        }
    }

    fn push_kind(&self, path: &str, kind: &ValidationErrorsKind, out: &mut Vec<String>) {
        match kind {
            ValidationErrorsKind::Field(errors) => {
                if let Some(first) = errors.first() {
                    out.push(self.format(path, first));
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, item) in items {
                    let item_path = format!("{path}[{index}]");
                    if let Some(first) = first_error(item) {
                        out.push(self.format(&item_path, first));
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(first) = first_error(inner) {
                    out.push(self.format(path, first));
                }
            }
        }
    }

    fn format(&self, path: &str, error: &ValidationError) -> String {
        format!("{path}: {}", self.message_for(&error.code))
    }
}

/// First field-level error inside a nested element, in field name order.
fn first_error(errors: &ValidationErrors) -> Option<&ValidationError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields.into_iter().find_map(|(_, list)| list.first())
}
