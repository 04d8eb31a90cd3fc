//! Error types for the arena library

use thiserror::Error;

/// Errors raised by the catalog, rating and controller layers
#[derive(Error, Debug)]
pub enum ArenaError {
    /// Catalog JSON could not be parsed
    #[error("Failed to parse model catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog parsed but breaks a record invariant
    #[error("Invalid model catalog: {0}")]
    InvalidCatalog(String),

    /// No record with this id exists in the catalog
    #[error("Model not found: {0}")]
    ModelNotFound(u32),

    /// Attribute code is not part of the rating rubric
    #[error("Unknown rating attribute: {0}")]
    UnknownAttribute(String),

    /// Two keys of one rating name the same rubric attribute
    #[error("Rating attribute given more than once: {0}")]
    DuplicateAttribute(String),

    /// A rating action arrived while no rating session is open
    #[error("No rating in progress")]
    NoActiveRating,

    /// Filesystem error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
