//! Per-field error bookkeeping for form-style input.

use super::rules::{FieldValue, ValidationRule};
use super::schema::{validate_data, validate_field, FieldSource, ValidationSchema};
use std::collections::BTreeMap;

/// Tracks the current validation message of each field in a form.
///
/// Re-validating a single field sets or clears only that field's entry.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    schema: Option<ValidationSchema>,
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schema(schema: ValidationSchema) -> Self {
        Self {
            schema: Some(schema),
            errors: BTreeMap::new(),
        }
    }

    /// Validates a whole record, replacing every tracked message.
    ///
    /// Without a schema there is nothing to check and the record is valid.
    pub fn validate<R>(&mut self, record: &R) -> bool
    where
        R: FieldSource + ?Sized,
    {
        let Some(schema) = &self.schema else {
            return true;
        };
        let report = validate_data(record, schema);
        self.errors = report.errors;
        report.valid
    }

    /// Validates one field with explicit rules, or the schema's rules when `rules` is `None`.
    pub fn validate_single(
        &mut self,
        field: &str,
        value: &FieldValue,
        rules: Option<&[ValidationRule]>,
    ) -> bool {
        let rules = rules
            .or_else(|| self.schema.as_ref().and_then(|s| s.rules_for(field)))
            .unwrap_or_default();
        let outcome = validate_field(value, rules);

        match outcome.error {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
        outcome.valid
    }

    pub fn set_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn clear_field(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub const fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
