//! Errors specific to the package catalog.

use thiserror::Error;

/// Errors raised by catalog parsing and catalog actions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry has this id
    #[error("No catalog entry with id {0}")]
    UnknownEntry(u32),

    /// Filter name not recognized
    #[error("Invalid filter '{0}': expected all, app, game, or popular")]
    InvalidFilter(String),

    /// Sort key not recognized
    #[error("Invalid sort key '{0}': expected relevance, popularity, or rating")]
    InvalidSort(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
