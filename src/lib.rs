//! Campus Answers
//!
//! Question-answer lookup over an academic dataset:
//! - Manifest-driven CSV loading into an immutable record set
//! - Word-overlap and fuzzy matching with 0-100 scores
//! - Syllabus catalog lookup by subject name containment
//! - One-page HTTP frontend plus a JSON ask API

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod matcher;
pub mod metrics;
pub mod syllabus;

pub use config::Config;
pub use dataset::{load_dataset, Dataset, DatasetManifest, Record};
pub use error::{LookupError, Result};
pub use matcher::{Matcher, MatchResult, SimilarityScorer};
pub use syllabus::{SyllabusCatalog, SyllabusEntry};
