//! Name suggestions for unknown vertices

use super::types::DEFAULT_SUGGESTIONS;
use crate::graph::{fold_key, Graph};

/// Query for known names containing a fragment, ignoring case
#[derive(Debug, Clone)]
pub struct SuggestQuery {
    /// Text to look for
    pub fragment: String,
    /// Maximum number of results
    pub limit: usize,
}

impl SuggestQuery {
    /// Create a new suggestion query with the default limit
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            limit: DEFAULT_SUGGESTIONS,
        }
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Execute the query, returning canonical names in insertion order
    pub fn execute(&self, graph: &Graph) -> Vec<String> {
        if self.fragment.trim().is_empty() {
            return Vec::new();
        }

        let needle = fold_key(&self.fragment);
        graph
            .store()
            .vertices()
            .filter(|(_, name)| fold_key(name).contains(&needle))
            .take(self.limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn graph() -> Graph {
        let mut builder = GraphBuilder::new();
        let movie = builder.add_work("Alien").unwrap();
        for name in ["Sigourney Weaver", "Tom Skerritt", "John Hurt", "Ian Holm"] {
            builder.link(movie, name);
        }
        builder.build()
    }

    #[test]
    fn test_suggest_matches_substring_ignoring_case() {
        let found = SuggestQuery::new("HURT").execute(&graph());
        assert_eq!(found, vec!["John Hurt"]);
    }

    #[test]
    fn test_suggest_keeps_insertion_order_and_limit() {
        let found = SuggestQuery::new("i").execute(&graph());
        assert_eq!(found, vec!["Alien", "Sigourney Weaver", "Tom Skerritt"]);

        let found = SuggestQuery::new("i").limit(1).execute(&graph());
        assert_eq!(found, vec!["Alien"]);
    }

    #[test]
    fn test_suggest_blank_input_is_empty() {
        assert!(SuggestQuery::new("").execute(&graph()).is_empty());
        assert!(SuggestQuery::new("  ").execute(&graph()).is_empty());
    }

    #[test]
    fn test_suggest_no_match() {
        assert!(SuggestQuery::new("Ripley").execute(&graph()).is_empty());
    }
}
