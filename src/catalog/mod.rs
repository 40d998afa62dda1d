//! Catalog ingestion: turning a list of works and their cast into a graph

mod error;
mod loader;
mod record;
mod scalar;

pub use error::{CatalogError, CatalogResult};
pub use loader::{CatalogFormat, CatalogLoader, LoadReport, LoadedCatalog};
pub use record::CatalogRecord;
