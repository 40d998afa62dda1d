//! Every simple alternating path within the edge cap

use super::types::SearchLimits;
use super::validate::is_alternating;
use crate::graph::{Graph, VertexId};
use std::collections::HashSet;

/// Query for all simple participant-to-participant paths
#[derive(Debug, Clone)]
pub struct AllPathsQuery {
    pub source: VertexId,
    pub target: VertexId,
    pub limits: SearchLimits,
}

/// One level of the depth-first walk: a vertex and the next neighbor to try
struct Frame {
    node: VertexId,
    cursor: usize,
}

impl AllPathsQuery {
    pub fn between(source: VertexId, target: VertexId) -> Self {
        Self {
            source,
            target,
            limits: SearchLimits::default(),
        }
    }

    /// Set maximum path length in edges
    pub fn max_edges(mut self, max_edges: usize) -> Self {
        self.limits.max_edges = max_edges;
        self
    }

    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Execute the query (iterative DFS)
    ///
    /// Paths are returned in discovery order. The visited set only covers the
    /// current branch, so a vertex left behind on one branch can appear again
    /// on a sibling branch.
    pub fn execute(&self, graph: &Graph) -> Vec<Vec<VertexId>> {
        let mut paths = Vec::new();
        if !graph.is_participant(self.source) || !graph.is_participant(self.target) {
            return paths;
        }

        if self.source == self.target {
            paths.push(vec![self.source]);
            return paths;
        }

        let mut path = vec![self.source];
        let mut on_path: HashSet<VertexId> = HashSet::from([self.source]);
        let mut stack = vec![Frame {
            node: self.source,
            cursor: 0,
        }];

        while let Some(top) = stack.last_mut() {
            let neighbors = graph.neighbors(top.node);
            let depth = path.len() - 1;

            if depth >= self.limits.max_edges || top.cursor >= neighbors.len() {
                stack.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(&done);
                }
                continue;
            }

            let next = neighbors[top.cursor];
            top.cursor += 1;

            if on_path.contains(&next) {
                continue;
            }

            path.push(next);
            if next == self.target {
                if path.len() <= self.limits.max_vertices() && is_alternating(graph, &path) {
                    paths.push(path.clone());
                }
                path.pop();
                continue;
            }

            on_path.insert(next);
            stack.push(Frame {
                node: next,
                cursor: 0,
            });
        }

        paths
    }
}
