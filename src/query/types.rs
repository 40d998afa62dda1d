//! Query limits and result structures

use crate::graph::VertexKind;
use serde::{Deserialize, Serialize};

/// Default cap on edges per path ("six degrees")
pub const DEFAULT_MAX_EDGES: usize = 6;

/// Default number of suggestions for an unknown name
pub const DEFAULT_SUGGESTIONS: usize = 3;

/// Bounds shared by both path searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of edges in an accepted path
    pub max_edges: usize,
}

impl SearchLimits {
    /// Maximum number of vertices in an accepted path
    pub fn max_vertices(&self) -> usize {
        self.max_edges + 1
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_edges: DEFAULT_MAX_EDGES,
        }
    }
}

/// One vertex of a decorated path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub kind: VertexKind,
    pub name: String,
}

impl std::fmt::Display for PathStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.name)
    }
}

/// A path annotated with the kind of every vertex
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecoratedPath {
    pub steps: Vec<PathStep>,
}

impl DecoratedPath {
    /// Degrees of separation (edge count)
    pub fn degrees(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Vertex names in path order
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }
}

impl std::fmt::Display for DecoratedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
