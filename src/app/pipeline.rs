//! Filter/sort pipeline.
//!
//! [`apply`] is a pure, non-destructive transform from a collection and a
//! [`FilterSpec`] to the ordered view. Steps run in a fixed order:
//!
//! 1. **Type filter**: keep entities with a type exactly equal to `type_name`
//! 2. **Search filter**: keep entities whose name, decimal id, or `#NNN` id
//!    contains the trimmed term, case-insensitively
//! 3. **Sort**: stable, by name or by ascending id
//!
//! Empty constraint fields skip their step; the pipeline never fails.

use crate::domain::{Entity, FilterSpec, SortBy};
use std::cmp::Ordering;

/// Applies `filters` to `collection` and returns the ordered view.
///
/// # Examples
///
/// ```
/// use pokecatalog::{app::pipeline, Entity, FilterSpec};
///
/// let collection = vec![
///     Entity::new(4, "charmander", ["fire"]),
///     Entity::new(1, "bulbasaur", ["grass", "poison"]),
/// ];
/// let filters = FilterSpec { type_name: "fire".into(), ..FilterSpec::default() };
/// let view = pipeline::apply(&collection, &filters);
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].name, "charmander");
/// ```
#[must_use]
pub fn apply(collection: &[Entity], filters: &FilterSpec) -> Vec<Entity> {
    let _span = tracing::debug_span!("pipeline_apply",
        total = collection.len(),
        type_name = %filters.type_name,
        sort_by = filters.sort_by.as_str(),
        search_len = filters.search_term.len()
    )
    .entered();

    let type_name = filters.type_name.as_str();
    let term = filters.search_term.trim().to_lowercase();

    let mut view: Vec<Entity> = collection
        .iter()
        .filter(|entity| type_name.is_empty() || entity.has_type(type_name))
        .filter(|entity| term.is_empty() || matches_search(entity, &term))
        .cloned()
        .collect();

    match filters.sort_by {
        SortBy::Name => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortBy::Number => view.sort_by_key(|entity| entity.id),
    }

    tracing::debug!(filtered = view.len(), "pipeline applied");
    view
}

/// `term` must already be trimmed and lowercased.
fn matches_search(entity: &Entity, term: &str) -> bool {
    entity.name.to_lowercase().contains(term)
        || entity.id.to_string().contains(term)
        || entity.formatted_id().to_lowercase().contains(term)
}

/// Case- and accent-insensitive comparison.
///
/// Ties fall back to the lowercase form (unaccented first), then to the raw
/// strings, so the ordering stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    let lower = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let (a_lower, b_lower) = (lower(a), lower(b));

    a_lower
        .iter()
        .map(|&c| fold_accent(c))
        .cmp(b_lower.iter().map(|&c| fold_accent(c)))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| a.cmp(b))
}

/// Maps a lowercase accented Latin letter to its base letter.
const fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_compare_ignoring_case() {
        assert_eq!(compare_names("bulbasaur", "Charmander"), Ordering::Less);
        assert_eq!(compare_names("Pikachu", "charmander"), Ordering::Greater);
        assert_eq!(compare_names("abra", "abra"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letters() {
        assert_eq!(compare_names("Élan", "zubat"), Ordering::Less);
        assert_eq!(compare_names("flabébé", "flabezz"), Ordering::Less);
        assert_eq!(compare_names("flabébé", "flaaffy"), Ordering::Greater);
        assert_eq!(compare_names("elan", "élan"), Ordering::Less);
    }

    #[test]
    fn case_ties_break_deterministically() {
        assert_ne!(compare_names("Abra", "abra"), Ordering::Equal);
    }

    #[test]
    fn search_matches_padded_id() {
        let entity = Entity::new(7, "squirtle", ["water"]);
        assert!(matches_search(&entity, "#007"));
        assert!(matches_search(&entity, "00"));
        assert!(!matches_search(&entity, "#07"));
    }
}
