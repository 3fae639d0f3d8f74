//! Error types for the catalog engine.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Field validation failures are deliberately not represented here: they are
//! returned as structured data by [`crate::validation`] and never raised.

use thiserror::Error;

/// The main error type for catalog operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use pokecatalog::CatalogError;
///
/// fn read_slot() -> Result<(), CatalogError> {
///     Err(CatalogError::Storage("slot locked".to_string()))
/// }
///
/// assert!(read_slot().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to a durable slot fails for a reason
    /// other than plain I/O. The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed. The string describes
    /// the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
