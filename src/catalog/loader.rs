//! Loader: builds a graph from a catalog document

use super::error::{CatalogError, CatalogResult};
use super::record::{CatalogRecord, RecordEntry};
use crate::graph::{Graph, GraphBuilder};
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Serialization format of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension (JSON when there is none)
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());

        match ext.as_deref() {
            None | Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some(other) => Err(CatalogError::data_format(
                path.display().to_string(),
                format!("unsupported catalog extension '.{}'", other),
            )),
        }
    }
}

/// Counters describing a completed load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Elements in the top-level list
    pub records_read: usize,
    /// Records that contributed a work to the graph
    pub records_loaded: usize,
    /// Malformed, untitled, or conflicting records
    pub records_skipped: usize,
    /// Names that appeared as both a work and a participant
    pub conflicts: usize,
}

/// A freshly built graph plus its load report
#[derive(Debug)]
pub struct LoadedCatalog {
    pub graph: Graph,
    pub report: LoadReport,
}

/// Turns catalog records into a [`Graph`]
///
/// Titles become Work vertices and each non-blank cast name becomes a
/// Participant linked to its title. Individual bad records are skipped; only
/// a document that is not a list at all is an error.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    builder: GraphBuilder,
    report: LoadReport,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file, choosing the format from its extension
    pub fn load_path(path: &Path) -> CatalogResult<LoadedCatalog> {
        if !path.exists() {
            return Err(CatalogError::SourceNotFound(path.to_path_buf()));
        }
        let format = CatalogFormat::from_path(path)?;

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::SourceNotFound(path.to_path_buf()),
            _ => CatalogError::Io(e),
        })?;

        Self::parse(&text, format, &path.display().to_string())
    }

    /// Load a catalog from any reader
    pub fn load_reader(mut reader: impl Read, format: CatalogFormat) -> CatalogResult<LoadedCatalog> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text, format, "<reader>")
    }

    /// Load a catalog held in memory
    pub fn load_str(text: &str, format: CatalogFormat) -> CatalogResult<LoadedCatalog> {
        Self::parse(text, format, "<memory>")
    }

    /// Build a graph from already typed records
    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> LoadedCatalog {
        let mut loader = Self::new();
        for record in records {
            loader.ingest(&record);
        }
        loader.finish()
    }

    fn parse(text: &str, format: CatalogFormat, origin: &str) -> CatalogResult<LoadedCatalog> {
        let entries: Vec<RecordEntry> = match format {
            CatalogFormat::Json => {
                serde_json::from_str(text).map_err(|e| CatalogError::data_format(origin, e))?
            }
            CatalogFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|e| CatalogError::data_format(origin, e))?
            }
        };

        let mut loader = Self::new();
        for (position, entry) in entries.into_iter().enumerate() {
            match entry {
                RecordEntry::Record(record) => loader.ingest(&record),
                RecordEntry::Malformed(_) => {
                    loader.report.records_read += 1;
                    loader.report.records_skipped += 1;
                    warn!(origin, position, "skipping malformed catalog record");
                }
            }
        }
        Ok(loader.finish())
    }

    /// Add one record to the graph under construction
    pub fn ingest(&mut self, record: &CatalogRecord) {
        self.report.records_read += 1;

        let Some(title) = record.trimmed_title() else {
            self.report.records_skipped += 1;
            return;
        };
        let Some(work) = self.builder.add_work(title) else {
            self.report.records_skipped += 1;
            return;
        };

        for name in record.cast_names() {
            self.builder.link(work, name);
        }
        self.report.records_loaded += 1;
    }

    /// Freeze the graph and hand back the report
    pub fn finish(mut self) -> LoadedCatalog {
        self.report.conflicts = self.builder.conflicts();
        LoadedCatalog {
            graph: self.builder.build(),
            report: self.report,
        }
    }
}
