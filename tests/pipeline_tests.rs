use pokecatalog::app::pipeline::apply;
use pokecatalog::{Entity, FilterSpec, SortBy};
use proptest::prelude::*;

fn spec(type_name: &str, search_term: &str, sort_by: SortBy) -> FilterSpec {
    FilterSpec {
        type_name: type_name.to_string(),
        sort_by,
        search_term: search_term.to_string(),
    }
}

fn names(view: &[Entity]) -> Vec<&str> {
    view.iter().map(|e| e.name.as_str()).collect()
}

fn starters() -> Vec<Entity> {
    vec![
        Entity::new(1, "bulbasaur", ["grass", "poison"]),
        Entity::new(4, "charmander", ["fire"]),
    ]
}

#[test]
fn end_to_end_type_search_and_sort() {
    let collection = starters();

    let fire = apply(&collection, &spec("fire", "", SortBy::Number));
    assert_eq!(names(&fire), ["charmander"]);

    let bulba = apply(&collection, &spec("", "bulba", SortBy::Number));
    assert_eq!(names(&bulba), ["bulbasaur"]);

    let by_name = apply(&collection, &spec("", "", SortBy::Name));
    assert_eq!(names(&by_name), ["bulbasaur", "charmander"]);
}

#[test]
fn search_matches_name_id_and_padded_id() {
    let collection = vec![Entity::new(25, "pikachu", ["electric"])];

    for term in ["pika", "25", "#025", "PIKA", "  pika  "] {
        assert_eq!(
            apply(&collection, &spec("", term, SortBy::Number)).len(),
            1,
            "term {term:?} should match"
        );
    }
    assert!(apply(&collection, &spec("", "99", SortBy::Number)).is_empty());
}

#[test]
fn sorts_mixed_case_names_and_numbers() {
    let collection = vec![
        Entity::new(4, "Charmander", ["fire"]),
        Entity::new(1, "Bulbasaur", ["grass"]),
        Entity::new(25, "Pikachu", ["electric"]),
    ];

    let by_name = apply(&collection, &spec("", "", SortBy::Name));
    assert_eq!(names(&by_name), ["Bulbasaur", "Charmander", "Pikachu"]);

    let by_number = apply(&collection, &spec("", "", SortBy::Number));
    let ids: Vec<u32> = by_number.iter().map(|e| e.id).collect();
    assert_eq!(ids, [1, 4, 25]);
}

#[test]
fn unknown_type_matches_nothing() {
    assert!(apply(&starters(), &spec("shadow", "", SortBy::Number)).is_empty());
}

#[test]
fn type_filter_is_exact() {
    assert!(apply(&starters(), &spec("fir", "", SortBy::Number)).is_empty());
    assert!(apply(&starters(), &spec("Fire", "", SortBy::Number)).is_empty());
}

#[test]
fn empty_collection_yields_empty_view() {
    assert!(apply(&[], &spec("fire", "char", SortBy::Name)).is_empty());
}

#[test]
fn equal_names_keep_input_order() {
    let collection = vec![
        Entity::new(10, "ditto", ["normal"]),
        Entity::new(3, "ditto", ["normal"]),
    ];
    let view = apply(&collection, &spec("", "", SortBy::Name));
    let ids: Vec<u32> = view.iter().map(|e| e.id).collect();
    assert_eq!(ids, [10, 3]);
}

const TYPES: [&str; 5] = ["fire", "water", "grass", "electric", "poison"];

fn entity_strategy() -> impl Strategy<Value = Entity> {
    (
        1u32..300,
        "[a-z][a-z-]{0,9}",
        prop::sample::subsequence(TYPES.to_vec(), 1..=2),
    )
        .prop_map(|(id, name, types)| Entity::new(id, name, types))
}

fn spec_strategy() -> impl Strategy<Value = FilterSpec> {
    (
        prop_oneof![Just(String::new()), prop::sample::select(TYPES.to_vec()).prop_map(String::from)],
        prop_oneof![Just(String::new()), "[a-z0-9]{1,3}"],
        prop_oneof![Just(SortBy::Name), Just(SortBy::Number)],
    )
        .prop_map(|(type_name, search_term, sort_by)| FilterSpec {
            type_name,
            sort_by,
            search_term,
        })
}

proptest! {
    #[test]
    fn output_never_invents_or_duplicates(
        collection in prop::collection::vec(entity_strategy(), 0..40),
        filters in spec_strategy(),
    ) {
        let view = apply(&collection, &filters);
        prop_assert!(view.len() <= collection.len());

        let mut remaining = collection.clone();
        for entity in &view {
            let index = remaining.iter().position(|e| e == entity);
            prop_assert!(index.is_some(), "{entity:?} not in input");
            if let Some(index) = index {
                remaining.remove(index);
            }
        }
    }

    #[test]
    fn default_spec_returns_everything_sorted_by_id(
        collection in prop::collection::vec(entity_strategy(), 0..40),
    ) {
        let view = apply(&collection, &FilterSpec::default());
        prop_assert_eq!(view.len(), collection.len());

        let mut expected = collection.clone();
        expected.sort_by_key(|e| e.id);
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn reapplying_is_idempotent(
        collection in prop::collection::vec(entity_strategy(), 0..40),
        filters in spec_strategy(),
    ) {
        let once = apply(&collection, &filters);
        let twice = apply(&once, &filters);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn every_kept_entity_satisfies_the_filters(
        collection in prop::collection::vec(entity_strategy(), 0..40),
        filters in spec_strategy(),
    ) {
        let view = apply(&collection, &filters);
        for entity in &view {
            if !filters.type_name.is_empty() {
                prop_assert!(entity.has_type(&filters.type_name));
            }
            if !filters.search_term.is_empty() {
                let term = filters.search_term.to_lowercase();
                prop_assert!(
                    entity.name.contains(&term)
                        || entity.id.to_string().contains(&term)
                        || entity.formatted_id().contains(&term)
                );
            }
        }
        if filters.sort_by == SortBy::Number {
            prop_assert!(view.windows(2).all(|w| w[0].id <= w[1].id));
        }
    }

    #[test]
    fn input_is_left_untouched(
        collection in prop::collection::vec(entity_strategy(), 0..20),
        filters in spec_strategy(),
    ) {
        let before = collection.clone();
        let _ = apply(&collection, &filters);
        prop_assert_eq!(collection, before);
    }
}

#[test]
fn accented_names_sort_among_their_base_letters() {
    let collection = vec![
        Entity::new(669, "flabébé", ["fairy"]),
        Entity::new(136, "flareon", ["fire"]),
        Entity::new(180, "flaaffy", ["electric"]),
    ];
    let view = apply(&collection, &spec("", "", SortBy::Name));
    assert_eq!(names(&view), ["flaaffy", "flabébé", "flareon"]);
}
