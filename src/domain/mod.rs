//! Domain layer for the catalog engine.
//!
//! This module contains the core domain types, independent of storage or
//! presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entity`]: Catalogued entities and their favorite projection
//! - [`filters`]: Filter specification driving the derived view
//! - [`record`]: Mapping of loosely-shaped remote records into entities

pub mod entity;
pub mod error;
pub mod filters;
pub mod record;

pub use entity::{image_url_for, stat_abbreviation, Entity, FavoriteEntity, Stat, TYPE_VOCABULARY};
pub use error::{CatalogError, Result};
pub use filters::{FilterPatch, FilterSpec, SortBy};
pub use record::{RawEntity, RawStat};
