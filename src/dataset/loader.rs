//! Dataset loader
//!
//! Loads every `Primary` source from a manifest into one record
//! collection. A file that cannot be read or parsed contributes no
//! rows and is reported as skipped; the load continues with the
//! remaining files.

use super::models::{Dataset, DatasetManifest, Record, SourceRole, SourceReport};
use crate::error::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the record collection described by the manifest
pub fn load_dataset(manifest: &DatasetManifest) -> Result<Dataset> {
    let mut records = Vec::new();
    let mut sources = Vec::new();

    for spec in &manifest.sources {
        let file = spec
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if spec.role == SourceRole::Excluded {
            debug!("Skipping excluded source: {}", file);
            sources.push(SourceReport {
                file,
                role: SourceRole::Excluded,
                rows: 0,
                skipped: None,
            });
            continue;
        }

        match load_file(&spec.path) {
            Ok(mut file_records) => {
                let rows = file_records.len();
                debug!("Loaded {} rows from {}", rows, file);
                records.append(&mut file_records);
                sources.push(SourceReport {
                    file,
                    role: SourceRole::Primary,
                    rows,
                    skipped: None,
                });
            }
            Err(e) => {
                warn!("Failed to read {}: {}", file, e);
                sources.push(SourceReport {
                    file,
                    role: SourceRole::Primary,
                    rows: 0,
                    skipped: Some(e.to_string()),
                });
            }
        }
    }

    if records.is_empty() {
        warn!("Dataset loaded with zero records");
    } else {
        info!(
            "Dataset loaded: {} records from {} sources",
            records.len(),
            sources.len()
        );
    }

    Ok(Dataset { records, sources })
}

/// Load one CSV file, all-or-nothing
///
/// Column mapping: a header row naming `Question` and `Answer`
/// (case-insensitive) selects those columns; otherwise the first two
/// columns are used and the first row is treated as data. Rows with
/// an empty question are dropped.
fn load_file(path: &Path) -> std::result::Result<Vec<Record>, csv::Error> {
    let subject = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        rows.push(result?);
    }

    let (question_idx, answer_idx, data_start) = match rows.first() {
        Some(header) => match header_columns(header) {
            Some((q, a)) => (q, a, 1),
            None => (0, 1, 0),
        },
        None => return Ok(Vec::new()),
    };

    let records = rows[data_start..]
        .iter()
        .filter_map(|row| {
            let question = row.get(question_idx)?.trim();
            let answer = row.get(answer_idx).unwrap_or_default().trim();
            if question.is_empty() {
                return None;
            }
            Some(Record {
                subject: subject.clone(),
                question: question.to_string(),
                answer: answer.to_string(),
            })
        })
        .collect();

    Ok(records)
}

/// Find `Question`/`Answer` column positions in a header row
fn header_columns(header: &csv::StringRecord) -> Option<(usize, usize)> {
    let position = |name: &str| {
        header
            .iter()
            .position(|field| field.trim().eq_ignore_ascii_case(name))
    };
    Some((position("question")?, position("answer")?))
}
