//! Individual validation rules.
//!
//! A [`ValidationRule`] pairs a pure predicate over a single [`FieldValue`]
//! with the message reported when the predicate fails. Empty values (missing,
//! or an empty string) pass every rule except [`required`], so optional rules
//! only fire when a value is present.

use std::fmt;

/// Lowest accepted catalog id.
pub const MIN_POKEMON_ID: i64 = 1;

/// Highest accepted catalog id.
pub const MAX_POKEMON_ID: i64 = 1025;

/// A single value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Missing,
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Returns `true` for values that only [`required`] rejects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// The predicate half of a rule.
#[derive(Debug, Clone, Copy)]
pub enum RuleCheck {
    Required,
    MinLength(usize),
    MaxLength(usize),
    IsNumber,
    IsPositiveNumber,
    PokemonId,
    PokemonName,
    Custom(fn(&FieldValue) -> bool),
}

impl RuleCheck {
    /// Evaluates the predicate.
    #[must_use]
    pub fn test(self, value: &FieldValue) -> bool {
        if let Self::Required = self {
            return !value.is_empty();
        }
        if let Self::Custom(check) = self {
            return check(value);
        }
        if value.is_empty() {
            return true;
        }

        match (self, value) {
            (Self::MinLength(min), FieldValue::Text(s)) => s.chars().count() >= min,
            (Self::MaxLength(max), FieldValue::Text(s)) => s.chars().count() <= max,
            (Self::IsNumber, FieldValue::Text(s)) => parse_finite(s).is_some(),
            (Self::IsNumber, FieldValue::Number(n)) => n.is_finite(),
            (Self::IsPositiveNumber, FieldValue::Text(s)) => parse_finite(s).is_some_and(|n| n > 0.0),
            (Self::IsPositiveNumber, FieldValue::Number(n)) => n.is_finite() && *n > 0.0,
            (Self::PokemonId, FieldValue::Text(s)) => s
                .trim()
                .parse::<i64>()
                .is_ok_and(|id| (MIN_POKEMON_ID..=MAX_POKEMON_ID).contains(&id)),
            (Self::PokemonId, FieldValue::Number(n)) => {
                #[allow(clippy::cast_precision_loss)]
                let in_range = ((MIN_POKEMON_ID as f64)..=(MAX_POKEMON_ID as f64)).contains(n);
                n.fract() == 0.0 && in_range
            }
            (Self::PokemonName, FieldValue::Text(s)) => {
                s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            }
            _ => false,
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A predicate paired with its failure message.
#[derive(Clone)]
pub struct ValidationRule {
    check: RuleCheck,
    message: String,
}

impl ValidationRule {
    pub fn new(check: RuleCheck, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    /// Wraps an arbitrary pure predicate.
    pub fn custom(check: fn(&FieldValue) -> bool, message: impl Into<String>) -> Self {
        Self::new(RuleCheck::Custom(check), message)
    }

    /// Replaces the failure message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn test(&self, value: &FieldValue) -> bool {
        self.check.test(value)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn check(&self) -> RuleCheck {
        self.check
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("check", &self.check)
            .field("message", &self.message)
            .finish()
    }
}

#[must_use]
pub fn required() -> ValidationRule {
    ValidationRule::new(RuleCheck::Required, "This field is required")
}

#[must_use]
pub fn min_length(length: usize) -> ValidationRule {
    ValidationRule::new(
        RuleCheck::MinLength(length),
        format!("Must be at least {length} characters"),
    )
}

#[must_use]
pub fn max_length(length: usize) -> ValidationRule {
    ValidationRule::new(
        RuleCheck::MaxLength(length),
        format!("Must be no more than {length} characters"),
    )
}

#[must_use]
pub fn is_number() -> ValidationRule {
    ValidationRule::new(RuleCheck::IsNumber, "Must be a number")
}

#[must_use]
pub fn is_positive_number() -> ValidationRule {
    ValidationRule::new(RuleCheck::IsPositiveNumber, "Must be a positive number")
}

/// Integer in `[1, 1025]`.
#[must_use]
pub fn is_valid_pokemon_id() -> ValidationRule {
    ValidationRule::new(
        RuleCheck::PokemonId,
        format!("Pokemon ID must be between {MIN_POKEMON_ID} and {MAX_POKEMON_ID}"),
    )
}

/// ASCII letters, digits and hyphens only.
#[must_use]
pub fn is_valid_pokemon_name() -> ValidationRule {
    ValidationRule::new(
        RuleCheck::PokemonName,
        "Pokemon name can only contain letters, numbers, and hyphens",
    )
}
