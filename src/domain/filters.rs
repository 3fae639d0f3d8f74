//! Filter specification for the derived view.
//!
//! A [`FilterSpec`] is always fully populated; partial updates arrive as a
//! [`FilterPatch`] and are shallow-merged field by field.

use serde::{Deserialize, Serialize};

/// Ordering applied by the filter pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Locale-style comparison of names.
    Name,
    /// Ascending numeric id.
    #[default]
    Number,
}

impl SortBy {
    /// Parses a sort key, falling back to [`SortBy::Number`] for anything unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokecatalog::SortBy;
    ///
    /// assert_eq!(SortBy::parse_or_default("name"), SortBy::Name);
    /// assert_eq!(SortBy::parse_or_default("weight"), SortBy::Number);
    /// ```
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            _ => Self::Number,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
        }
    }
}

/// The `(type, sortBy, searchTerm)` tuple describing the desired derived view.
///
/// Defaults are an empty type (no type filter), [`SortBy::Number`], and an
/// empty search term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Exact type name to keep; empty means no type filter.
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub search_term: String,
}

impl FilterSpec {
    /// Shallow-merges a patch; fields absent from the patch are left untouched.
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(type_name) = patch.type_name {
            self.type_name = type_name;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(search_term) = patch.search_term {
            self.search_term = search_term;
        }
    }

    /// Returns the merged result without modifying `self`.
    #[must_use]
    pub fn merged(&self, patch: FilterPatch) -> Self {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

/// A partial [`FilterSpec`] update.
///
/// # Examples
///
/// ```
/// use pokecatalog::{FilterPatch, FilterSpec, SortBy};
///
/// let spec = FilterSpec::default().merged(FilterPatch::new().type_name("fire").sort_by(SortBy::Name));
/// assert_eq!(spec.type_name, "fire");
/// assert_eq!(spec.sort_by, SortBy::Name);
/// assert!(spec.search_term.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl FilterPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub const fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    #[must_use]
    pub fn search_term(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = Some(search_term.into());
        self
    }

    /// Returns `true` if the patch would not change any field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.type_name.is_none() && self.sort_by.is_none() && self.search_term.is_none()
    }
}
