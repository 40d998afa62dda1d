//! DegreesEngine: the main entry point for path queries

use super::bipartite::{Graph, GraphSummary};
use super::kind::VertexKind;
use crate::catalog::{CatalogLoader, CatalogResult};
use crate::query::{
    decorate, AllPathsQuery, DecoratedPath, SearchLimits, ShortestPathQuery, SuggestQuery,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Which query endpoints are unknown, with suggestions for each
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEndpoints {
    /// `Some(suggestions)` when the source is unknown
    pub source: Option<Vec<String>>,
    /// `Some(suggestions)` when the target is unknown
    pub target: Option<Vec<String>>,
}

/// The degrees-of-separation engine
///
/// Wraps an immutable [`Graph`] behind an `Arc`; clones are cheap and every
/// query takes `&self`, so one engine can serve many threads. Reloading
/// means building a new engine.
#[derive(Debug, Clone)]
pub struct DegreesEngine {
    graph: Arc<Graph>,
    limits: SearchLimits,
}

impl DegreesEngine {
    /// Create an engine over an already built graph
    pub fn new(graph: Graph) -> Self {
        Self::with_limits(graph, SearchLimits::default())
    }

    /// Create an engine with custom search bounds
    pub fn with_limits(graph: Graph, limits: SearchLimits) -> Self {
        Self {
            graph: Arc::new(graph),
            limits,
        }
    }

    /// Load a catalog file and build an engine over it
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let loaded = CatalogLoader::load_path(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            vertices = loaded.graph.vertex_count(),
            edges = loaded.graph.edge_count(),
            records = loaded.report.records_loaded,
            skipped = loaded.report.records_skipped,
            conflicts = loaded.report.conflicts,
            "catalog loaded"
        );
        Ok(Self::new(loaded.graph))
    }

    /// Read access to the graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Presence test, ignoring case and surrounding whitespace
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.graph.contains_vertex(name.trim())
    }

    pub fn kind_of(&self, name: &str) -> Option<VertexKind> {
        self.graph.kind_of(name.trim())
    }

    /// Shortest alternating path between two participants
    pub fn shortest_path(&self, source: &str, target: &str) -> Option<DecoratedPath> {
        let source_id = self.graph.lookup(source.trim())?;
        let target_id = self.graph.lookup(target.trim())?;

        let path = ShortestPathQuery::between(source_id, target_id)
            .limits(self.limits)
            .execute(&self.graph);

        match path {
            Some(path) => Some(decorate(&self.graph, &path)),
            None => {
                debug!(source, target, "no shortest path");
                None
            }
        }
    }

    /// Every simple alternating path within the edge cap
    pub fn all_paths(&self, source: &str, target: &str) -> Vec<DecoratedPath> {
        let (Some(source_id), Some(target_id)) = (
            self.graph.lookup(source.trim()),
            self.graph.lookup(target.trim()),
        ) else {
            return Vec::new();
        };

        let paths = AllPathsQuery::between(source_id, target_id)
            .limits(self.limits)
            .execute(&self.graph);
        debug!(source, target, count = paths.len(), "all paths");

        paths
            .iter()
            .map(|path| decorate(&self.graph, path))
            .collect()
    }

    /// Up to three known names containing `text`
    pub fn suggestions(&self, text: &str) -> Vec<String> {
        SuggestQuery::new(text.trim()).execute(&self.graph)
    }

    /// Up to `limit` known names containing `text`
    pub fn suggestions_limited(&self, text: &str, limit: usize) -> Vec<String> {
        SuggestQuery::new(text.trim()).limit(limit).execute(&self.graph)
    }

    /// Report unknown endpoints of a query, or `None` if both are known
    pub fn check_endpoints(&self, source: &str, target: &str) -> Option<MissingEndpoints> {
        let source_known = self.contains_vertex(source);
        let target_known = self.contains_vertex(target);
        if source_known && target_known {
            return None;
        }

        Some(MissingEndpoints {
            source: (!source_known).then(|| self.suggestions(source)),
            target: (!target_known).then(|| self.suggestions(target)),
        })
    }

    pub fn summary(&self) -> GraphSummary {
        self.graph.summary()
    }
}
