//! Entity classification: which side of the bipartite graph a vertex is on

use super::store::VertexId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The two sides of the catalog graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    /// A catalog entry's own title (e.g. a film)
    Work,
    /// A name listed in a catalog entry (e.g. a cast member)
    Participant,
}

impl VertexKind {
    /// Label used when rendering decorated paths
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Participant => "Participant",
        }
    }
}

impl std::fmt::Display for VertexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of Work-kind vertices; every other known vertex is a Participant
#[derive(Debug, Clone, Default)]
pub struct EntityClassifier {
    works: HashSet<VertexId>,
}

impl EntityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a vertex as Work-kind
    pub fn mark_work(&mut self, id: VertexId) {
        self.works.insert(id);
    }

    pub fn is_work(&self, id: VertexId) -> bool {
        self.works.contains(&id)
    }

    pub fn is_participant(&self, id: VertexId) -> bool {
        !self.is_work(id)
    }

    pub fn kind(&self, id: VertexId) -> VertexKind {
        if self.is_work(id) {
            VertexKind::Work
        } else {
            VertexKind::Participant
        }
    }

    /// Number of Work-kind vertices
    pub fn work_count(&self) -> usize {
        self.works.len()
    }
}
