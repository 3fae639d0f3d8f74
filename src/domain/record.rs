//! Mapping of loosely-shaped inbound records into [`Entity`] values.
//!
//! The remote transport and its wire schema live outside this crate. Callers
//! deserialize whatever they receive into a [`RawEntity`], in which every field
//! is optional, and convert it with [`RawEntity::into_entity`]. Each nullable
//! field resolves through exactly one entry of the default table below; no
//! other code substitutes fallbacks.
//!
//! | field    | default when absent or out of range |
//! |----------|-------------------------------------|
//! | `id`     | `0` (unknown, rejected by validation) |
//! | `name`   | `""` (rejected by validation)       |
//! | `height` | `0` (unknown)                       |
//! | `weight` | `0` (unknown)                       |
//! | `types`  | empty list                          |
//! | `stats`  | empty list                          |
//!
//! Stat entries without a name are dropped; a missing base value is `0`.

use super::entity::{Entity, Stat};
use serde::{Deserialize, Serialize};

const DEFAULT_ID: u32 = 0;
const DEFAULT_MEASUREMENT: u32 = 0;
const DEFAULT_BASE_STAT: u32 = 0;

/// An inbound stat entry with optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStat {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_stat: Option<i64>,
}

/// An inbound entity record with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub stats: Option<Vec<RawStat>>,
}

fn non_negative(value: Option<i64>, default: u32) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or(default)
}

impl RawEntity {
    /// Resolves every field through the default table.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokecatalog::RawEntity;
    ///
    /// let raw: RawEntity = serde_json::from_str(r#"{"id": 7, "name": "squirtle"}"#).unwrap();
    /// let entity = raw.into_entity();
    /// assert_eq!(entity.id, 7);
    /// assert_eq!(entity.height, 0);
    /// assert!(entity.types.is_empty());
    /// ```
    #[must_use]
    pub fn into_entity(self) -> Entity {
        let stats = self
            .stats
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| {
                let name = raw.name?;
                Some(Stat {
                    name,
                    base_stat: non_negative(raw.base_stat, DEFAULT_BASE_STAT),
                })
            })
            .collect();

        Entity {
            id: non_negative(self.id, DEFAULT_ID),
            name: self.name.unwrap_or_default(),
            height: non_negative(self.height, DEFAULT_MEASUREMENT),
            weight: non_negative(self.weight, DEFAULT_MEASUREMENT),
            types: self.types.unwrap_or_default(),
            stats,
        }
    }
}

impl From<RawEntity> for Entity {
    fn from(raw: RawEntity) -> Self {
        raw.into_entity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_resolves_to_defaults() {
        let entity = RawEntity::default().into_entity();
        assert_eq!(entity.id, 0);
        assert_eq!(entity.name, "");
        assert_eq!(entity.height, 0);
        assert_eq!(entity.weight, 0);
        assert!(entity.types.is_empty());
        assert!(entity.stats.is_empty());
    }

    #[test]
    fn negative_values_fall_back() {
        let raw = RawEntity {
            id: Some(-3),
            height: Some(-1),
            ..RawEntity::default()
        };
        let entity = raw.into_entity();
        assert_eq!(entity.id, 0);
        assert_eq!(entity.height, 0);
    }

    #[test]
    fn unnamed_stats_are_dropped() {
        let raw = RawEntity {
            id: Some(1),
            stats: Some(vec![
                RawStat {
                    name: Some("hp".into()),
                    base_stat: Some(45),
                },
                RawStat {
                    name: None,
                    base_stat: Some(10),
                },
                RawStat {
                    name: Some("speed".into()),
                    base_stat: None,
                },
            ]),
            ..RawEntity::default()
        };
        let entity = raw.into_entity();
        assert_eq!(entity.stats, vec![Stat::new("hp", 45), Stat::new("speed", 0)]);
    }
}
