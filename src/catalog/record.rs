//! Typed catalog record shape

use super::scalar;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// One catalog entry: a work and the names that took part in it
///
/// A missing or `null` title deserializes to `None` and a missing cast to an
/// empty list. Numeric or boolean names are read as their text. `null` and
/// nested cast entries are kept as `None` and skipped on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(default, deserialize_with = "scalar::title")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar::cast")]
    pub cast: Vec<Option<String>>,
}

impl CatalogRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            cast: Vec::new(),
        }
    }

    /// Add a cast member
    pub fn with_cast(mut self, name: impl Into<String>) -> Self {
        self.cast.push(Some(name.into()));
        self
    }

    /// Title with surrounding whitespace removed, if not blank
    pub fn trimmed_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Non-blank cast names, trimmed, in listed order
    pub fn cast_names(&self) -> impl Iterator<Item = &str> {
        self.cast
            .iter()
            .flatten()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
    }
}

/// An element of the top-level catalog list
///
/// Elements that do not fit [`CatalogRecord`] are kept as `Malformed` so one
/// bad entry does not fail the whole document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RecordEntry {
    Record(CatalogRecord),
    Malformed(#[allow(dead_code)] IgnoredAny),
}
