//! Graph: the read-only pairing of adjacency and classification

use super::kind::{EntityClassifier, VertexKind};
use super::store::{AdjacencyStore, VertexId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vertex and edge counts for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub work_count: usize,
    pub participant_count: usize,
    /// When the graph was built
    pub loaded_at: DateTime<Utc>,
}

impl std::fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "graph with {} vertices and {} edges",
            self.vertex_count, self.edge_count
        )
    }
}

/// A fully built bipartite graph of works and participants
///
/// Only [`GraphBuilder`](super::GraphBuilder) can produce a `Graph`, and a
/// `Graph` offers no mutation, so it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Graph {
    store: AdjacencyStore,
    classifier: EntityClassifier,
    loaded_at: DateTime<Utc>,
}

impl Graph {
    pub(crate) fn new(store: AdjacencyStore, classifier: EntityClassifier) -> Self {
        Self {
            store,
            classifier,
            loaded_at: Utc::now(),
        }
    }

    /// Underlying adjacency
    pub fn store(&self) -> &AdjacencyStore {
        &self.store
    }

    /// Underlying kind assignment
    pub fn classifier(&self) -> &EntityClassifier {
        &self.classifier
    }

    /// Resolve a name (any casing) to its vertex
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.store.lookup(name)
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.store.contains_vertex(name)
    }

    /// Canonical name of a vertex
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.store.name(id)
    }

    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.store.neighbors(id)
    }

    /// Kind of a vertex, or `None` for a handle this graph never issued
    pub fn kind(&self, id: VertexId) -> Option<VertexKind> {
        self.store.name(id).map(|_| self.classifier.kind(id))
    }

    /// Kind of a named vertex
    pub fn kind_of(&self, name: &str) -> Option<VertexKind> {
        self.lookup(name).and_then(|id| self.kind(id))
    }

    /// True only for known Participant-kind vertices
    pub fn is_participant(&self, id: VertexId) -> bool {
        self.kind(id) == Some(VertexKind::Participant)
    }

    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn summary(&self) -> GraphSummary {
        let vertex_count = self.vertex_count();
        let work_count = self.classifier.work_count();
        GraphSummary {
            vertex_count,
            edge_count: self.edge_count(),
            work_count,
            participant_count: vertex_count - work_count,
            loaded_at: self.loaded_at,
        }
    }
}
