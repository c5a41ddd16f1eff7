//! Data models for the question/answer dataset

use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One stored question/answer pair with its subject tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    pub subject: String,
    pub question: String,
    pub answer: String,
}

/// Role of a source file in the manifest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceRole {
    /// Loaded into the record collection
    Primary,
    /// Present in the dataset directory but never loaded
    Excluded,
}

/// One declared source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    pub path: PathBuf,
    pub role: SourceRole,
}

/// Declared loading contract: every source file and its role
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub sources: Vec<SourceSpec>,
}

impl DatasetManifest {
    /// Build a manifest by scanning a directory for CSV files
    ///
    /// Files are sorted by name so load order (and therefore record
    /// order) is deterministic. The file matching `excluded_file` is
    /// carried with the `Excluded` role.
    pub fn scan(dir: &Path, excluded_file: &str) -> Result<Self> {
        if !dir.is_dir() {
            return Err(LookupError::DatasetMissing(dir.display().to_string()));
        }

        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let sources = paths
            .into_iter()
            .map(|path| {
                let role = if path.file_name().and_then(|n| n.to_str()) == Some(excluded_file) {
                    SourceRole::Excluded
                } else {
                    SourceRole::Primary
                };
                SourceSpec { path, role }
            })
            .collect();

        Ok(Self { sources })
    }
}

/// Outcome of loading one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReport {
    pub file: String,
    pub role: SourceRole,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

/// The immutable, loaded dataset
///
/// Built once at startup and shared read-only for the process
/// lifetime; the matcher receives it by reference at call time.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub sources: Vec<SourceReport>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Number of source files skipped due to read or parse errors
    pub fn skipped_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|s| s.role == SourceRole::Primary && s.skipped.is_some())
            .count()
    }
}
