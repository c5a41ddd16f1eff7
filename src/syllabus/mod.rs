//! Syllabus catalog and locator
//!
//! A static mapping from subject name to a retrievable document
//! reference. Lookup is exact substring containment, no fuzzy
//! tolerance: a subject qualifies when its name appears in the query
//! or the query appears in the subject name (case-insensitive).

use crate::error::{LookupError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyllabusEntry {
    pub subject_name: String,
    pub file_reference: String,
}

/// Static subject-to-document catalog, read-only after construction
///
/// Backed by an ordered map so lookup results always come back in
/// catalog order.
#[derive(Debug, Clone, Default)]
pub struct SyllabusCatalog {
    entries: IndexMap<String, String>,
}

impl SyllabusCatalog {
    pub fn from_entries(entries: Vec<SyllabusEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.subject_name, e.file_reference))
            .collect();
        Self { entries }
    }

    /// Load a catalog from a JSON file (array of entries)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let entries: Vec<SyllabusEntry> = serde_json::from_str(&contents)
            .map_err(|e| LookupError::Catalog(format!("{}: {}", path.display(), e)))?;

        info!("Syllabus catalog loaded: {} entries", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// The built-in catalog: the seven-semester subject list of the
    /// source dataset, each subject pointing at its semester's
    /// preprocessed syllabus file.
    pub fn builtin() -> Self {
        let semesters: [(&str, &[&str]); 6] = [
            ("Semester_1", &[
                "Engineering Mathematics I",
                "Environmental Science",
                "Foundations of Electronics Engineering",
                "Fundamentals of Computational Biology",
                "Language and Writing Skills",
                "Learning Programming Concepts With C",
                "Professional Ethics and Life Skills",
            ]),
            ("Semester_2", &[
                "Data Structure Using C",
                "Digital Logic and Design",
                "Engineering Mathematics II",
                "Entrepreneurship",
                "Object-Oriented Programming",
                "Python for Data Science",
            ]),
            ("Semester_3", &[
                "Analysis and Design of Algorithm",
                "Computer Organization and Architecture",
                "Database Management System",
                "Discrete Structure",
                "Independent Project",
                "Probability and Statistics",
            ]),
            ("Semester_4", &[
                "Artificial Intelligence Principles and Applications",
                "Computer Network",
                "Data Visualization",
                "Operating System",
                "R for Data Science",
                "Theory of Computation",
            ]),
            ("Semester_5", &[
                "Computational Complexity",
                "Cryptography and Network Security",
                "Intelligent Data Analysis",
                "Natural Language Processing",
                "Pattern Recognition and Machine Learning",
                "Vocational Training",
            ]),
            ("Semester_7", &[
                "Software Engineering",
                "Big Data Analytics",
                "Image Processing",
                "Data Wrangling",
            ]),
        ];

        let mut entries = IndexMap::new();
        for (semester, subjects) in semesters {
            let file = format!("Preprocessed_{}_Syllabus_Question_Answer.csv", semester);
            for subject in subjects {
                entries.insert(subject.to_string(), file.clone());
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find catalog entries relevant to a query
    ///
    /// Exact containment either way on lowercased strings. A bare
    /// "syllabus" keyword with no subject hit returns every distinct
    /// file reference in the catalog.
    pub fn locate(&self, query: &str) -> Vec<SyllabusEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let hits: Vec<SyllabusEntry> = self
            .entries
            .iter()
            .filter(|(subject, _)| {
                let subject = subject.to_lowercase();
                query.contains(&subject) || subject.contains(&query)
            })
            .map(|(subject, file)| SyllabusEntry {
                subject_name: subject.clone(),
                file_reference: file.clone(),
            })
            .collect();

        if !hits.is_empty() {
            return hits;
        }

        // Keyword-only query: point at every syllabus file once
        if crate::matcher::tokenize(&query).iter().any(|t| t == "syllabus") {
            let mut seen = Vec::new();
            return self
                .entries
                .iter()
                .filter(|(_, file)| {
                    if seen.contains(*file) {
                        false
                    } else {
                        seen.push((*file).clone());
                        true
                    }
                })
                .map(|(subject, file)| SyllabusEntry {
                    subject_name: subject.clone(),
                    file_reference: file.clone(),
                })
                .collect();
        }

        Vec::new()
    }
}
