//! Storage layer for durable key-value slots.
//!
//! This module provides the slot abstraction the favorites store persists
//! through, with a JSON file backend and an in-memory backend.
//!
//! # Modules
//!
//! - `backend`: Slot storage trait
//! - `json`: One JSON file per slot with atomic writes
//! - `memory`: Process-local map

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::SlotStorage;
pub use json::JsonFileStorage;
pub use memory::MemoryStorage;
