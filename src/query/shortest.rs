//! Shortest alternating path between two participants

use super::types::SearchLimits;
use super::validate::is_alternating;
use crate::graph::{Graph, VertexId};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Query for the shortest participant-to-participant path
#[derive(Debug, Clone)]
pub struct ShortestPathQuery {
    /// Source vertex
    pub source: VertexId,
    /// Target vertex
    pub target: VertexId,
    /// Search bounds
    pub limits: SearchLimits,
}

impl ShortestPathQuery {
    /// Create a new shortest-path query between two vertices
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

    /// Apply a full set of limits
    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Execute the query (BFS in stored neighbor order)
    ///
    /// Returns `None` when either endpoint is not a Participant, when no path
    /// exists within the edge cap, or when the found path does not alternate.
    pub fn execute(&self, graph: &Graph) -> Option<Vec<VertexId>> {
        if !graph.is_participant(self.source) || !graph.is_participant(self.target) {
            return None;
        }

        if self.source == self.target {
            return Some(vec![self.source]);
        }

        let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();
        let mut predecessors: HashMap<VertexId, Option<VertexId>> = HashMap::new();

        predecessors.insert(self.source, None);
        queue.push_back((self.source, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= self.limits.max_edges {
                continue;
            }

            for &neighbor in graph.neighbors(current) {
                if predecessors.contains_key(&neighbor) {
                    continue;
                }
                predecessors.insert(neighbor, Some(current));

                if neighbor == self.target {
                    let path = self.reconstruct_path(&predecessors);
                    return self.accept(graph, path);
                }

                queue.push_back((neighbor, depth + 1));
            }
        }

        debug!(
            source = %self.source,
            target = %self.target,
            max_edges = self.limits.max_edges,
            "no path within edge cap"
        );
        None
    }

    /// Walk predecessors back from the target
    fn reconstruct_path(&self, predecessors: &HashMap<VertexId, Option<VertexId>>) -> Vec<VertexId> {
        let mut path = vec![self.target];
        let mut current = self.target;

        while let Some(&Some(pred)) = predecessors.get(&current) {
            path.push(pred);
            current = pred;
        }

        path.reverse();
        path
    }

    fn accept(&self, graph: &Graph, path: Vec<VertexId>) -> Option<Vec<VertexId>> {
        if path.len() <= self.limits.max_vertices() && is_alternating(graph, &path) {
            Some(path)
        } else {
            debug!(len = path.len(), "discarding path that fails validation");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    /// Chain of `n` participants P0 - W0 - P1 - W1 - ... - P(n-1)
    fn chain(n: usize) -> Graph {
        let mut builder = GraphBuilder::new();
        for i in 0..n.saturating_sub(1) {
            let work = builder.add_work(&format!("W{}", i)).unwrap();
            builder.link(work, &format!("P{}", i));
            builder.link(work, &format!("P{}", i + 1));
        }
        builder.build()
    }

    fn id(graph: &Graph, name: &str) -> VertexId {
        graph.lookup(name).unwrap()
    }

    fn names(graph: &Graph, path: &[VertexId]) -> Vec<String> {
        path.iter()
            .map(|&v| graph.name(v).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_path_same_node() {
        let graph = chain(2);
        let p0 = id(&graph, "P0");
        let path = ShortestPathQuery::between(p0, p0).execute(&graph).unwrap();
        assert_eq!(path, vec![p0]);
    }

    #[test]
    fn test_path_one_work_apart() {
        let graph = chain(2);
        let path = ShortestPathQuery::between(id(&graph, "P0"), id(&graph, "P1"))
            .execute(&graph)
            .unwrap();
        assert_eq!(names(&graph, &path), vec!["P0", "W0", "P1"]);
    }

    #[test]
    fn test_path_at_edge_cap() {
        // P0..P3 are 6 edges apart
        let graph = chain(4);
        let path = ShortestPathQuery::between(id(&graph, "P0"), id(&graph, "P3"))
            .execute(&graph)
            .unwrap();
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn test_path_beyond_edge_cap() {
        // P0..P4 are 8 edges apart
        let graph = chain(5);
        let result = ShortestPathQuery::between(id(&graph, "P0"), id(&graph, "P4"))
            .execute(&graph);
        assert!(result.is_none());
    }

    #[test]
    fn test_path_with_max_edges() {
        let graph = chain(3);
        let (p0, p2) = (id(&graph, "P0"), id(&graph, "P2"));

        assert!(ShortestPathQuery::between(p0, p2).max_edges(3).execute(&graph).is_none());
        assert!(ShortestPathQuery::between(p0, p2).max_edges(4).execute(&graph).is_some());
    }

    #[test]
    fn test_path_rejects_work_endpoints() {
        let graph = chain(3);
        let result = ShortestPathQuery::between(id(&graph, "W0"), id(&graph, "P2"))
            .execute(&graph);
        assert!(result.is_none());

        let w0 = id(&graph, "W0");
        assert!(ShortestPathQuery::between(w0, w0).execute(&graph).is_none());
    }

    #[test]
    fn test_path_disconnected() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_work("A").unwrap();
        builder.link(a, "Alice");
        let b = builder.add_work("B").unwrap();
        builder.link(b, "Bob");
        let graph = builder.build();

        let result = ShortestPathQuery::between(id(&graph, "Alice"), id(&graph, "Bob"))
            .execute(&graph);
        assert!(result.is_none());
    }

    #[test]
    fn test_path_prefers_first_discovered_route() {
        let mut builder = GraphBuilder::new();
        let first = builder.add_work("First").unwrap();
        builder.link(first, "Alice");
        builder.link(first, "Bob");
        let second = builder.add_work("Second").unwrap();
        builder.link(second, "Alice");
        builder.link(second, "Bob");
        let graph = builder.build();

        let path = ShortestPathQuery::between(id(&graph, "Alice"), id(&graph, "Bob"))
            .execute(&graph)
            .unwrap();
        assert_eq!(names(&graph, &path), vec!["Alice", "First", "Bob"]);
    }
}
