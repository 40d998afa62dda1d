//! Path decoration: attach each vertex's kind and canonical name

use super::types::{DecoratedPath, PathStep};
use crate::graph::{Graph, VertexId};

/// Annotate a raw path with kinds, preserving order
///
/// Handles the graph never issued are skipped.
pub fn decorate(graph: &Graph, path: &[VertexId]) -> DecoratedPath {
    let steps = path
        .iter()
        .filter_map(|&id| {
            let name = graph.name(id)?;
            let kind = graph.kind(id)?;
            Some(PathStep {
                kind,
                name: name.to_string(),
            })
        })
        .collect();

    DecoratedPath { steps }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, VertexKind};

    #[test]
    fn test_decorate_labels_each_vertex() {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Movie1").unwrap();
        builder.link(movie, "Alice");
        builder.link(movie, "Bob");
        let graph = builder.build();

        let path: Vec<_> = ["alice", "MOVIE1", "Bob"]
            .iter()
            .map(|n| graph.lookup(n).unwrap())
            .collect();
        let decorated = decorate(&graph, &path);

        assert_eq!(decorated.names(), vec!["Alice", "Movie1", "Bob"]);
        assert_eq!(decorated.steps[1].kind, VertexKind::Work);
        assert_eq!(decorated.degrees(), 2);
        assert_eq!(
            decorated.to_string(),
            "[Participant] Alice -> [Work] Movie1 -> [Participant] Bob"
        );
    }

    #[test]
    fn test_decorate_empty_path() {
        let graph = GraphBuilder::new().build();
        let decorated = decorate(&graph, &[]);
        assert!(decorated.is_empty());
        assert_eq!(decorated.degrees(), 0);
    }

    #[test]
    fn test_decorated_path_serializes_kind_and_name() {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Movie1").unwrap();
        builder.link(movie, "Alice");
        let graph = builder.build();
        let alice = graph.lookup("Alice").unwrap();

        let json = serde_json::to_value(decorate(&graph, &[alice])).unwrap();
        assert_eq!(json["steps"][0]["kind"], "participant");
        assert_eq!(json["steps"][0]["name"], "Alice");
    }
}
