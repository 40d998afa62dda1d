//! GraphBuilder: the only way to populate a graph
//!
//! Keeps the graph bipartite while it grows: a name may be a Work or a
//! Participant but never both, and edges only join a Work to a Participant.

use super::bipartite::Graph;
use super::kind::{EntityClassifier, VertexKind};
use super::store::{fold_key, AdjacencyStore, VertexId};
use tracing::warn;

/// Mutable staging area for a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    store: AdjacencyStore,
    classifier: EntityClassifier,
    conflicts: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a Work-kind vertex
    ///
    /// Returns `None` for blank names and for names already registered as a
    /// Participant (a kind conflict).
    pub fn add_work(&mut self, title: &str) -> Option<VertexId> {
        if let Some(existing) = self.store.lookup(title) {
            if self.classifier.is_participant(existing) {
                self.record_conflict(title, VertexKind::Participant, VertexKind::Work);
                return None;
            }
            return Some(existing);
        }

        let id = self.store.add_vertex(title)?;
        self.classifier.mark_work(id);
        Some(id)
    }

    /// Register a Participant-kind vertex
    ///
    /// Returns `None` for blank names and for names already registered as a
    /// Work (a kind conflict).
    pub fn add_participant(&mut self, name: &str) -> Option<VertexId> {
        if let Some(existing) = self.store.lookup(name) {
            if self.classifier.is_work(existing) {
                self.record_conflict(name, VertexKind::Work, VertexKind::Participant);
                return None;
            }
            return Some(existing);
        }

        self.store.add_vertex(name)
    }

    /// Link a Work to a participant by name, registering the participant
    ///
    /// A participant spelled like the work itself would be a self-loop and is
    /// dropped. Returns `true` when a new edge was inserted.
    pub fn link(&mut self, work: VertexId, participant: &str) -> bool {
        if !self.classifier.is_work(work) {
            return false;
        }
        if let Some(title) = self.store.name(work) {
            if fold_key(title) == fold_key(participant) {
                return false;
            }
        }

        match self.add_participant(participant) {
            Some(participant) => self.store.connect(work, participant),
            None => false,
        }
    }

    /// Number of kind conflicts seen so far
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    /// Get the number of vertices registered so far
    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    /// Freeze into an immutable graph
    pub fn build(self) -> Graph {
        Graph::new(self.store, self.classifier)
    }

    fn record_conflict(&mut self, name: &str, existing: VertexKind, requested: VertexKind) {
        self.conflicts += 1;
        warn!(
            vertex = name,
            %existing,
            %requested,
            "name already registered with the other kind; ignoring"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_builds_work_participant_edges() {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Movie1").unwrap();
        assert!(builder.link(movie, "Alice"));
        assert!(builder.link(movie, "Bob"));

        let graph = builder.build();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.kind_of("movie1"), Some(VertexKind::Work));
        assert_eq!(graph.kind_of("ALICE"), Some(VertexKind::Participant));
    }

    #[test]
    fn test_add_work_rejects_known_participant() {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Movie1").unwrap();
        builder.link(movie, "Alice");

        assert_eq!(builder.add_work("alice"), None);
        assert_eq!(builder.conflicts(), 1);
        assert_eq!(builder.build().kind_of("Alice"), Some(VertexKind::Participant));
    }

    #[test]
    fn test_link_rejects_known_work() {
        let mut builder = GraphBuilder::new();
        let first = builder.add_work("Movie1").unwrap();
        builder.add_work("Movie2").unwrap();

        assert!(!builder.link(first, "Movie2"));
        assert_eq!(builder.conflicts(), 1);
        assert_eq!(builder.build().edge_count(), 0);
    }

    #[test]
    fn test_link_drops_self_reference() {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Cher").unwrap();

        assert!(!builder.link(movie, "CHER"));
        assert_eq!(builder.conflicts(), 0);

        let graph = builder.build();
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.neighbors(movie).is_empty());
    }

    #[test]
    fn test_link_from_participant_is_ignored() {
        let mut builder = GraphBuilder::new();
        let actor = builder.add_participant("Alice").unwrap();

        assert!(!builder.link(actor, "Bob"));
        assert_eq!(builder.vertex_count(), 1);
    }

    #[test]
    fn test_repeated_work_returns_same_vertex() {
        let mut builder = GraphBuilder::new();
        let first = builder.add_work("Heat").unwrap();
        let second = builder.add_work("HEAT").unwrap();

        assert_eq!(first, second);
        assert_eq!(builder.conflicts(), 0);
    }
}
