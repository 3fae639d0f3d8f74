//! Headless entry point for the catalog engine.
//!
//! Reads `key=value` arguments, loads a JSON array of raw records, runs them
//! through validated loading and the filter/sort pipeline, and prints the
//! resulting view.
//!
//! # Usage
//!
//! ```text
//! pokecatalog records=pokemon.json type=fire sort=name search=char trace_level=debug
//! ```
//!
//! # Arguments
//!
//! - `records`: Path to a JSON array of records (required)
//! - `type`: Exact type filter, empty for all types
//! - `sort`: `number` (default) or `name`
//! - `search`: Search term, validated like interactive input
//! - `trace_level`, `data_dir`, `log_file`, `favorites_key`: See [`Config`]
//!
//! # Output
//!
//! One `#NNN name [type, type]` line per entity in the filtered view on
//! stdout. Rejected records and an invalid search term are reported on
//! stderr.

use pokecatalog::observability::init_tracing;
use pokecatalog::validation::{search_rules, validate_field, FieldValue};
use pokecatalog::{
    initialize, CatalogError, Command, Config, Entity, FilterPatch, RawEntity, Result, SortBy,
};
use std::collections::BTreeMap;
use std::process::ExitCode;

fn parse_args(args: impl Iterator<Item = String>) -> BTreeMap<String, String> {
    args.filter_map(|arg| {
        arg.split_once('=')
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
    })
    .collect()
}

fn filter_patch(args: &BTreeMap<String, String>) -> Result<FilterPatch> {
    let mut patch = FilterPatch::new();

    if let Some(type_name) = args.get("type") {
        patch = patch.type_name(type_name.trim().to_lowercase());
    }
    if let Some(sort) = args.get("sort") {
        patch = patch.sort_by(SortBy::parse_or_default(sort));
    }
    if let Some(search) = args.get("search") {
        let outcome = validate_field(&FieldValue::from(search.as_str()), &search_rules());
        if let Some(error) = outcome.error {
            return Err(CatalogError::Config(format!("invalid search term: {error}")));
        }
        patch = patch.search_term(search.clone());
    }

    Ok(patch)
}

fn render_line(entity: &Entity) -> String {
    format!(
        "{} {} [{}]",
        entity.formatted_id(),
        entity.name,
        entity.types.join(", ")
    )
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1));
    let config = Config::from_map(&args);
    init_tracing(&config);

    let records_path = args
        .get("records")
        .ok_or_else(|| CatalogError::Config("missing required argument: records=<path>".to_string()))?;

    let content = std::fs::read_to_string(records_path)?;
    let records: Vec<RawEntity> = serde_json::from_str(&content)?;
    tracing::info!(count = records.len(), path = %records_path, "loaded records");

    let mut catalog = initialize(&config);
    catalog.dispatch(Command::SetListValidated(
        records.into_iter().map(RawEntity::into_entity).collect(),
    ));
    catalog.dispatch(Command::SetFilters(filter_patch(&args)?));

    for (key, message) in catalog.state().validation_errors() {
        eprintln!("{key}: {message}");
    }
    for entity in catalog.state().filtered_view() {
        println!("{}", render_line(entity));
    }

    catalog.shutdown();
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "pokecatalog failed");
            eprintln!("pokecatalog: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_splits_on_first_equals() {
        let args = parse_args(
            ["records=a.json", "search=mr=mime", "ignored"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(args.get("records").map(String::as_str), Some("a.json"));
        assert_eq!(args.get("search").map(String::as_str), Some("mr=mime"));
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn render_line_formats_id_name_and_types() {
        let entity = Entity::new(6, "charizard", ["fire", "flying"]);
        assert_eq!(render_line(&entity), "#006 charizard [fire, flying]");
    }

    #[test]
    fn invalid_search_is_rejected() {
        let mut args = BTreeMap::new();
        args.insert("search".to_string(), "mr mime".to_string());
        assert!(matches!(filter_patch(&args), Err(CatalogError::Config(_))));
    }

    #[test]
    fn sort_argument_falls_back_to_number() {
        let mut args = BTreeMap::new();
        args.insert("sort".to_string(), "weight".to_string());
        let patch = filter_patch(&args).unwrap();
        assert_eq!(patch.sort_by, Some(SortBy::Number));
    }
}
