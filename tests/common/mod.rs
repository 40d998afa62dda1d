//! Shared catalog fixtures for integration tests

use std::io::Write;
use tempfile::NamedTempFile;

/// The two-film catalog used throughout the scenarios
pub const TWO_MOVIES: &str = r#"[
    {"title": "Movie1", "cast": ["Alice", "Bob"]},
    {"title": "Movie2", "cast": ["Bob", "Carol"]}
]"#;

/// Write catalog text to a temporary file with the given extension
pub fn catalog_file(text: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .expect("Failed to create temp catalog");
    file.write_all(text.as_bytes())
        .expect("Failed to write temp catalog");
    file
}

#[allow(dead_code)]
/// A chain of `n` participants P0 .. P(n-1), each pair sharing one work
pub fn chain_catalog(n: usize) -> String {
    let records: Vec<serde_json::Value> = (0..n.saturating_sub(1))
        .map(|i| {
            serde_json::json!({
                "title": format!("W{}", i),
                "cast": [format!("P{}", i), format!("P{}", i + 1)],
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}
