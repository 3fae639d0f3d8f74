//! Field-validation rule engine.
//!
//! Pure rule evaluation over field values and records. Validation failures are
//! returned as structured data ([`FieldOutcome`], [`ValidationReport`]) and are
//! never raised as errors.
//!
//! # Modules
//!
//! - `rules`: Individual predicates and their default messages
//! - `schema`: Ordered schemas, the evaluation engine, and the built-in schemas
//! - `tracker`: Per-field error bookkeeping for form-style input

pub mod rules;
pub mod schema;
pub mod tracker;

pub use rules::{
    is_number, is_positive_number, is_valid_pokemon_id, is_valid_pokemon_name, max_length,
    min_length, required, FieldValue, RuleCheck, ValidationRule, MAX_POKEMON_ID, MIN_POKEMON_ID,
};
pub use schema::{
    entity_schema, search_rules, search_schema, validate_data, validate_field, FieldOutcome,
    FieldSource, ValidationReport, ValidationSchema, SEARCH_MAX_LENGTH, SEARCH_TERM_FIELD,
};
pub use tracker::FieldErrors;
