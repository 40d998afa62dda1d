//! Catalog loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Invalid catalog {origin}: {reason}")]
    DataFormat { origin: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub(crate) fn data_format(origin: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::DataFormat {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
