//! Question/answer dataset
//!
//! Loads a directory of per-subject CSV files into an immutable
//! in-memory record collection:
//! - Manifest-driven source selection (loaded vs. excluded files)
//! - Per-file skip-and-continue on malformed input
//! - Subject identifiers derived from file stems

pub mod loader;
pub mod models;

pub use loader::load_dataset;
pub use models::{Dataset, DatasetManifest, Record, SourceReport, SourceRole, SourceSpec};
