//! Schemas and the evaluation engine.
//!
//! [`validate_field`] evaluates rules in order and stops at the first failure.
//! [`validate_data`] runs it once per schema field against a [`FieldSource`]
//! and collects one message per failing field. Nothing here touches shared
//! state, so every function is safe to call from any number of callers.

use super::rules::{
    is_positive_number, is_valid_pokemon_id, is_valid_pokemon_name, max_length, required,
    FieldValue, ValidationRule,
};
use crate::domain::Entity;
use std::collections::{BTreeMap, HashMap};

/// Field name under which search input is validated.
pub const SEARCH_TERM_FIELD: &str = "searchTerm";

/// Longest accepted search term, in characters.
pub const SEARCH_MAX_LENGTH: usize = 50;

/// Outcome of validating a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub valid: bool,
    pub error: Option<String>,
}

impl FieldOutcome {
    const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }
}

/// Outcome of validating a whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    /// First failing rule's message per failing field.
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    /// All messages joined with `", "`, in field order.
    #[must_use]
    pub fn joined_messages(&self) -> String {
        self.errors.values().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Ordered mapping of field name to rules.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    fields: Vec<(String, Vec<ValidationRule>)>,
}

impl ValidationSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, or replaces its rules if it is already present.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: Vec<ValidationRule>) -> Self {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = rules;
        } else {
            self.fields.push((name, rules));
        }
        self
    }

    #[must_use]
    pub fn rules_for(&self, name: &str) -> Option<&[ValidationRule]> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationRule])> {
        self.fields.iter().map(|(n, r)| (n.as_str(), r.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Anything a schema can read field values from.
pub trait FieldSource {
    /// Returns the named field, or [`FieldValue::Missing`] if there is none.
    fn field_value(&self, field: &str) -> FieldValue;
}

impl FieldSource for BTreeMap<String, FieldValue> {
    fn field_value(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or(FieldValue::Missing)
    }
}

impl FieldSource for HashMap<String, FieldValue> {
    fn field_value(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or(FieldValue::Missing)
    }
}

/// Zero-valued numeric fields are unknown and read as missing.
impl FieldSource for Entity {
    fn field_value(&self, field: &str) -> FieldValue {
        let known = |n: u32| if n == 0 { FieldValue::Missing } else { FieldValue::from(n) };
        match field {
            "id" => known(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "height" => known(self.height),
            "weight" => known(self.weight),
            _ => FieldValue::Missing,
        }
    }
}

/// Evaluates `rules` in order, reporting the first failure.
///
/// # Examples
///
/// ```
/// use pokecatalog::validation::{max_length, required, validate_field, FieldValue};
///
/// let outcome = validate_field(&FieldValue::from(""), &[required(), max_length(3)]);
/// assert!(!outcome.valid);
/// assert_eq!(outcome.error.as_deref(), Some("This field is required"));
/// ```
#[must_use]
pub fn validate_field(value: &FieldValue, rules: &[ValidationRule]) -> FieldOutcome {
    rules
        .iter()
        .find(|rule| !rule.test(value))
        .map_or_else(FieldOutcome::ok, |rule| FieldOutcome {
            valid: false,
            error: Some(rule.message().to_string()),
        })
}

/// Validates every schema field of `record` independently.
#[must_use]
pub fn validate_data<R>(record: &R, schema: &ValidationSchema) -> ValidationReport
where
    R: FieldSource + ?Sized,
{
    let errors: BTreeMap<String, String> = schema
        .iter()
        .filter_map(|(field, rules)| {
            validate_field(&record.field_value(field), rules)
                .error
                .map(|message| (field.to_string(), message))
        })
        .collect();

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Rules applied to committed search input.
#[must_use]
pub fn search_rules() -> Vec<ValidationRule> {
    vec![
        max_length(SEARCH_MAX_LENGTH)
            .with_message(format!("Search term must be no more than {SEARCH_MAX_LENGTH} characters")),
        is_valid_pokemon_name().with_message("Search can only contain letters, numbers, and hyphens"),
    ]
}

/// Schema for search input, keyed by [`SEARCH_TERM_FIELD`].
#[must_use]
pub fn search_schema() -> ValidationSchema {
    ValidationSchema::new().field(SEARCH_TERM_FIELD, search_rules())
}

/// Schema applied to records entering the canonical collection.
#[must_use]
pub fn entity_schema() -> ValidationSchema {
    ValidationSchema::new()
        .field(
            "id",
            vec![required().with_message("Pokemon ID is required"), is_valid_pokemon_id()],
        )
        .field(
            "name",
            vec![required().with_message("Pokemon name is required"), is_valid_pokemon_name()],
        )
        .field(
            "height",
            vec![is_positive_number().with_message("Height must be a positive number")],
        )
        .field(
            "weight",
            vec![is_positive_number().with_message("Weight must be a positive number")],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_field_replaces_existing_rules() {
        let schema = ValidationSchema::new()
            .field("name", vec![required()])
            .field("name", vec![max_length(2), required()]);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.rules_for("name").map(<[_]>::len), Some(2));
    }

    #[test]
    fn entity_reads_zero_measurements_as_missing() {
        let entity = Entity::new(25, "pikachu", ["electric"]);
        assert_eq!(entity.field_value("height"), FieldValue::Missing);
        assert_eq!(entity.field_value("id"), FieldValue::Number(25.0));
        assert_eq!(entity.field_value("types"), FieldValue::Missing);
    }
}
