//! Catalogued entity model and its favorite projection.
//!
//! An [`Entity`] is a single Pokemon as held by the entity store. Entities are
//! immutable once accepted into the canonical collection; replacing the
//! collection replaces them wholesale. A [`FavoriteEntity`] is the small
//! projection persisted by the favorites store, with its own lifecycle.

use serde::{Deserialize, Serialize};

/// The canonical lowercase type vocabulary.
///
/// Type filters match entity type names exactly against these spellings.
pub const TYPE_VOCABULARY: [&str; 18] = [
    "bug", "dark", "dragon", "electric", "fairy", "fighting", "fire", "flying", "ghost", "normal",
    "grass", "ground", "ice", "poison", "psychic", "rock", "steel", "water",
];

/// Base URL for official artwork, keyed by numeric id.
const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home";

/// A named base-stat value (e.g. `hp: 45`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_stat: u32,
}

impl Stat {
    pub fn new(name: impl Into<String>, base_stat: u32) -> Self {
        Self {
            name: name.into(),
            base_stat,
        }
    }
}

/// A catalogued entity.
///
/// # Fields
///
/// - `id`: Identity, unique within a collection; `0` means unknown
/// - `name`: Lowercase display name
/// - `height`: Height in decimetres, `0` when unknown
/// - `weight`: Weight in hectograms, `0` when unknown
/// - `types`: Ordered type names from [`TYPE_VOCABULARY`]
/// - `stats`: Ordered base stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl Entity {
    /// Creates an entity with the given identity and types and no measurements.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokecatalog::Entity;
    ///
    /// let pikachu = Entity::new(25, "pikachu", ["electric"]);
    /// assert_eq!(pikachu.formatted_id(), "#025");
    /// assert_eq!(pikachu.height, 0);
    /// ```
    pub fn new<I, S>(id: u32, name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            height: 0,
            weight: 0,
            types: types.into_iter().map(Into::into).collect(),
            stats: Vec::new(),
        }
    }

    /// Returns the zero-padded `#NNN` form of the id.
    #[must_use]
    pub fn formatted_id(&self) -> String {
        format!("#{:03}", self.id)
    }

    /// Returns `true` if any of the entity's types is exactly `type_name`.
    #[must_use]
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Height converted from decimetres to metres.
    #[must_use]
    pub fn height_meters(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight converted from hectograms to kilograms.
    #[must_use]
    pub fn weight_kilograms(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    /// Human-readable height, e.g. `"0.4 m"`.
    #[must_use]
    pub fn display_height(&self) -> String {
        format!("{:.1} m", self.height_meters())
    }

    /// Human-readable weight, e.g. `"6.0 kg"`.
    #[must_use]
    pub fn display_weight(&self) -> String {
        format!("{:.1} kg", self.weight_kilograms())
    }

    /// Looks up a base stat by name.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.base_stat)
    }
}

/// Projection of an [`Entity`] kept in the favorites set.
///
/// Created on toggle, never mutated in place, removed on toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntity {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl FavoriteEntity {
    pub fn new<I, S>(id: u32, name: impl Into<String>, image: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Projects an entity, deriving the image reference from its id.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokecatalog::{Entity, FavoriteEntity};
    ///
    /// let fav = FavoriteEntity::from_entity(&Entity::new(4, "charmander", ["fire"]));
    /// assert_eq!(fav.id, 4);
    /// assert!(fav.image.ends_with("/4.png"));
    /// ```
    #[must_use]
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            image: image_url_for(entity.id),
            types: entity.types.clone(),
        }
    }
}

impl From<&Entity> for FavoriteEntity {
    fn from(entity: &Entity) -> Self {
        Self::from_entity(entity)
    }
}

/// Returns the artwork URL for an id.
#[must_use]
pub fn image_url_for(id: u32) -> String {
    format!("{ARTWORK_BASE_URL}/{id}.png")
}

/// Returns the short label for a base-stat name.
///
/// Unknown stat names are uppercased as-is.
///
/// # Examples
///
/// ```
/// use pokecatalog::stat_abbreviation;
///
/// assert_eq!(stat_abbreviation("special-attack"), "SATK");
/// assert_eq!(stat_abbreviation("accuracy"), "ACCURACY");
/// ```
#[must_use]
pub fn stat_abbreviation(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "ATK".to_string(),
        "defense" => "DEF".to_string(),
        "special-attack" => "SATK".to_string(),
        "special-defense" => "SDEF".to_string(),
        "speed" => "SPD".to_string(),
        other => other.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_id_pads_to_three_digits() {
        assert_eq!(Entity::new(1, "bulbasaur", ["grass"]).formatted_id(), "#001");
        assert_eq!(Entity::new(25, "pikachu", ["electric"]).formatted_id(), "#025");
        assert_eq!(Entity::new(1025, "pecharunt", ["poison"]).formatted_id(), "#1025");
    }

    #[test]
    fn measurements_convert_from_source_units() {
        let mut entity = Entity::new(25, "pikachu", ["electric"]);
        entity.height = 4;
        entity.weight = 60;
        assert_eq!(entity.display_height(), "0.4 m");
        assert_eq!(entity.display_weight(), "6.0 kg");
    }

    #[test]
    fn type_vocabulary_is_lowercase() {
        assert!(TYPE_VOCABULARY.iter().all(|t| t.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn stat_lookup_by_name() {
        let mut entity = Entity::new(1, "bulbasaur", ["grass", "poison"]);
        entity.stats = vec![Stat::new("hp", 45), Stat::new("speed", 45)];
        assert_eq!(entity.stat("hp"), Some(45));
        assert_eq!(entity.stat("attack"), None);
    }
}
