//! Core graph data structures

mod bipartite;
mod builder;
mod engine;
mod kind;
mod store;


pub use bipartite::{Graph, GraphSummary};
pub use builder::GraphBuilder;
pub use engine::{DegreesEngine, MissingEndpoints};
pub use kind::{EntityClassifier, VertexKind};
pub use store::{AdjacencyStore, VertexId};

pub(crate) use store::fold_key;
