//! Query system for the catalog graph
//!
//! Provides the two participant-to-participant path searches, path
//! decoration, and name suggestions.

mod all_paths;
mod decorate;
mod shortest;
mod suggest;
mod types;
mod validate;

pub use all_paths::AllPathsQuery;
pub use decorate::decorate;
pub use shortest::ShortestPathQuery;
pub use suggest::SuggestQuery;
pub use types::{DecoratedPath, PathStep, SearchLimits, DEFAULT_MAX_EDGES, DEFAULT_SUGGESTIONS};
pub use validate::is_alternating;
