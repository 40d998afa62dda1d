//! Alternation check for query paths

use crate::graph::{Graph, VertexId, VertexKind};

/// Whether `path` is a valid query path
///
/// Both endpoints must be Participants and kinds must alternate
/// Participant, Work, Participant, ... along the path.
pub fn is_alternating(graph: &Graph, path: &[VertexId]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    if !graph.is_participant(first) || !graph.is_participant(last) {
        return false;
    }

    path.iter().enumerate().all(|(i, &id)| {
        let expected = if i % 2 == 0 {
            VertexKind::Participant
        } else {
            VertexKind::Work
        };
        graph.kind(id) == Some(expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn graph() -> (Graph, Vec<VertexId>) {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Movie1").unwrap();
        builder.link(movie, "Alice");
        builder.link(movie, "Bob");
        let graph = builder.build();
        let ids = ["Alice", "Movie1", "Bob"]
            .iter()
            .map(|n| graph.lookup(n).unwrap())
            .collect();
        (graph, ids)
    }

    #[test]
    fn test_accepts_alternating_path() {
        let (graph, ids) = graph();
        assert!(is_alternating(&graph, &ids));
        assert!(is_alternating(&graph, &ids[..1]));
    }

    #[test]
    fn test_rejects_empty_path() {
        let (graph, _) = graph();
        assert!(!is_alternating(&graph, &[]));
    }

    #[test]
    fn test_rejects_work_endpoints() {
        let (graph, ids) = graph();
        assert!(!is_alternating(&graph, &ids[1..]));
        assert!(!is_alternating(&graph, &ids[..2]));
    }

    #[test]
    fn test_rejects_broken_alternation() {
        let (graph, ids) = graph();
        assert!(!is_alternating(&graph, &[ids[0], ids[2]]));
    }
}
