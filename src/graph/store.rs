//! Adjacency store: an undirected, simple graph over case-insensitive names

use std::collections::HashMap;

/// Dense handle of a vertex inside an [`AdjacencyStore`]
///
/// Handles are assigned in insertion order and are only meaningful for the
/// store that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Case-folded lookup key for a vertex name
pub(crate) fn fold_key(name: &str) -> String {
    name.to_lowercase()
}

fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Undirected adjacency structure keyed by case-insensitive names
///
/// Two names that differ only in case denote the same vertex; the spelling
/// used on first insertion is kept as the canonical name. Adjacency lists
/// keep insertion order, which is the neighbor order every search follows.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyStore {
    /// Canonical names, indexed by `VertexId`
    names: Vec<String>,
    /// Folded name -> vertex
    index: HashMap<String, VertexId>,
    /// Neighbors of each vertex, indexed by `VertexId`
    adjacency: Vec<Vec<VertexId>>,
}

impl AdjacencyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a vertex exists for `name`
    ///
    /// Blank names are ignored and yield `None`. Adding a known name (in any
    /// casing) returns the existing handle.
    pub fn add_vertex(&mut self, name: &str) -> Option<VertexId> {
        if is_blank(name) {
            return None;
        }

        let key = fold_key(name);
        if let Some(&id) = self.index.get(&key) {
            return Some(id);
        }

        let id = VertexId(self.names.len());
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        self.index.insert(key, id);
        Some(id)
    }

    /// Connect two vertices, creating them if needed
    ///
    /// Ignored when either name is blank or both names denote the same
    /// vertex. Returns `true` only when a new edge was inserted.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if is_blank(a) || is_blank(b) || fold_key(a) == fold_key(b) {
            return false;
        }

        match (self.add_vertex(a), self.add_vertex(b)) {
            (Some(a), Some(b)) => self.connect(a, b),
            _ => false,
        }
    }

    /// Connect two existing vertices by handle
    pub(crate) fn connect(&mut self, a: VertexId, b: VertexId) -> bool {
        if a == b || a.0 >= self.names.len() || b.0 >= self.names.len() {
            return false;
        }

        let mut inserted = false;
        if !self.adjacency[a.0].contains(&b) {
            self.adjacency[a.0].push(b);
            inserted = true;
        }
        if !self.adjacency[b.0].contains(&a) {
            self.adjacency[b.0].push(a);
            inserted = true;
        }
        inserted
    }

    /// Presence test, ignoring case
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Resolve a name (any casing) to its vertex
    pub fn lookup(&self, name: &str) -> Option<VertexId> {
        self.index.get(&fold_key(name)).copied()
    }

    /// Canonical name of a vertex
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Neighbors of a vertex in insertion order (empty for unknown handles)
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (VertexId(i), name.as_str()))
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Get the number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}
