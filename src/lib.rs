//! Degrees: shortest-chain queries over a catalog of works and participants
//!
//! A catalog lists works (films, albums, papers) together with the people who
//! took part in them. Loading it yields a bipartite graph in which every edge
//! joins a work to a participant, and queries ask how two participants are
//! connected.
//!
//! # Core Concepts
//!
//! - **Vertices**: case-insensitive names, each either a Work or a Participant
//! - **Paths**: chains that alternate Participant, Work, Participant, ...
//! - **Degrees**: number of edges in a path, capped at six by default
//!
//! # Example
//!
//! ```
//! use degrees::{CatalogLoader, CatalogRecord, DegreesEngine};
//!
//! let loaded = CatalogLoader::from_records(vec![
//!     CatalogRecord::new("Movie1").with_cast("Alice").with_cast("Bob"),
//!     CatalogRecord::new("Movie2").with_cast("Bob").with_cast("Carol"),
//! ]);
//! let engine = DegreesEngine::new(loaded.graph);
//!
//! let path = engine.shortest_path("Alice", "Carol").unwrap();
//! assert_eq!(path.degrees(), 4);
//! ```

pub mod catalog;
mod graph;
pub mod query;

pub use catalog::{
    CatalogError, CatalogFormat, CatalogLoader, CatalogRecord, CatalogResult, LoadReport,
    LoadedCatalog,
};
pub use graph::{
    AdjacencyStore, DegreesEngine, EntityClassifier, Graph, GraphBuilder, GraphSummary,
    MissingEndpoints, VertexId, VertexKind,
};
pub use query::{
    AllPathsQuery, DecoratedPath, PathStep, SearchLimits, ShortestPathQuery, SuggestQuery,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
