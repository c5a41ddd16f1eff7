//! Ask API handlers
//!
//! The ask handler is the presenter: it owns the only precedence
//! policy in the system. Word matches win, then fuzzy matches, then
//! syllabus references, then the fixed no-result message — a plain
//! ordered short-circuit, not a scoring fusion.

use super::models::*;
use crate::config::PageConfig;
use crate::dataset::Dataset;
use crate::matcher::Matcher;
use crate::metrics::METRICS;
use crate::syllabus::SyllabusCatalog;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Fallback message when no result class applies
pub const NO_RESULT_MESSAGE: &str = "Sorry, no relevant answers found.";

/// Shared read-only application state
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub matcher: Arc<Matcher>,
    pub catalog: Arc<SyllabusCatalog>,
    pub page: PageConfig,
}

/// Ask a question
///
/// POST /api/v1/ask
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ApiError>)> {
    answer_query(&state, &request.query).map(Json)
}

/// Ask a question via query string
///
/// GET /api/v1/ask?q=...
pub async fn ask_get(
    State(state): State<AppState>,
    Query(params): Query<AskParams>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ApiError>)> {
    answer_query(&state, &params.q).map(Json)
}

/// Resolve one query against the dataset and catalog
fn answer_query(
    state: &AppState,
    query: &str,
) -> Result<AskResponse, (StatusCode, Json<ApiError>)> {
    let started = Instant::now();

    if query.len() > state.matcher.config().max_query_len {
        METRICS.record_ask("rejected", started.elapsed().as_secs_f64());
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(
                "VALIDATION_ERROR",
                format!(
                    "Query cannot exceed {} bytes",
                    state.matcher.config().max_query_len
                ),
            )),
        ));
    }

    let response = resolve(state, query);

    METRICS.record_ask(response.outcome.as_str(), started.elapsed().as_secs_f64());
    info!(
        "Ask resolved: outcome={}, query_len={}",
        response.outcome.as_str(),
        query.len()
    );

    Ok(response)
}

/// The presenter's ordered short-circuit
fn resolve(state: &AppState, query: &str) -> AskResponse {
    let top_n = state.matcher.config().top_n;

    let mut word_matches = state.matcher.word_matches(query, &state.dataset);
    if !word_matches.is_empty() {
        word_matches.truncate(top_n);
        debug!("Word match hit: {} results", word_matches.len());
        return AskResponse::matches(word_matches);
    }

    let fuzzy_matches = state.matcher.fuzzy_matches(query, &state.dataset);
    if !fuzzy_matches.is_empty() {
        debug!("Fuzzy match hit: {} results", fuzzy_matches.len());
        return AskResponse::matches(fuzzy_matches);
    }

    let syllabus = state.catalog.locate(query);
    if !syllabus.is_empty() {
        debug!("Syllabus hit: {} files", syllabus.len());
        return AskResponse::syllabus(syllabus);
    }

    AskResponse::no_result(NO_RESULT_MESSAGE)
}

/// Liveness and dataset summary
///
/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: state.dataset.len(),
        catalog_entries: state.catalog.len(),
    })
}

/// Prometheus text-format metrics
///
/// GET /metrics
pub async fn metrics() -> String {
    METRICS.export_prometheus()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;
    use crate::dataset::Record;
    use crate::syllabus::SyllabusEntry;

    fn state() -> AppState {
        let dataset = Dataset {
            records: vec![
                Record {
                    subject: "general".to_string(),
                    question: "What is the syllabus for semester 3?".to_string(),
                    answer: "See attached document.".to_string(),
                },
                Record {
                    subject: "ds".to_string(),
                    question: "Data Structures syllabus".to_string(),
                    answer: "Stacks, queues, trees.".to_string(),
                },
            ],
            sources: Vec::new(),
        };
        let catalog = SyllabusCatalog::from_entries(vec![SyllabusEntry {
            subject_name: "Computer Networks".to_string(),
            file_reference: "cn_syllabus.pdf".to_string(),
        }]);

        AppState {
            dataset: Arc::new(dataset),
            matcher: Arc::new(Matcher::new(MatcherConfig::default())),
            catalog: Arc::new(catalog),
            page: PageConfig::default(),
        }
    }

    #[test]
    fn test_word_match_takes_precedence() {
        let response = resolve(&state(), "syllabus semester 3");
        assert_eq!(response.outcome, AskOutcome::Matches);
        assert_eq!(
            response.matches[0].question,
            "What is the syllabus for semester 3?"
        );
        assert_eq!(response.matches[0].score, 100);
    }

    #[test]
    fn test_fuzzy_fallback_on_misspelling() {
        let response = resolve(&state(), "Dat Structur");
        assert_eq!(response.outcome, AskOutcome::Matches);
        assert_eq!(response.matches[0].question, "Data Structures syllabus");
        assert!(response.matches[0].score >= 60);
    }

    #[test]
    fn test_syllabus_fallback_when_no_record_matches() {
        let response = resolve(&state(), "computer networks syllabus");
        // "syllabus" appears in stored questions, so force a dataset miss
        let mut state = state();
        state.dataset = Arc::new(Dataset::default());
        let response_missed = resolve(&state, "computer networks syllabus");

        assert_eq!(response_missed.outcome, AskOutcome::Syllabus);
        assert_eq!(response_missed.syllabus[0].file_reference, "cn_syllabus.pdf");

        // With records present the word matcher wins on shared tokens
        assert_eq!(response.outcome, AskOutcome::Matches);
    }

    #[test]
    fn test_empty_query_renders_fallback_message() {
        let response = resolve(&state(), "");
        assert_eq!(response.outcome, AskOutcome::NoResult);
        assert_eq!(response.message.as_deref(), Some(NO_RESULT_MESSAGE));
    }

    #[test]
    fn test_unmatchable_query_renders_fallback_message() {
        let response = resolve(&state(), "xyzzy plugh");
        assert_eq!(response.outcome, AskOutcome::NoResult);
    }

    #[test]
    fn test_over_long_query_rejected() {
        let state = state();
        let query = "a".repeat(state.matcher.config().max_query_len + 1);
        let result = answer_query(&state, &query);
        assert!(result.is_err());
        let (status, _) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_matches_truncated_to_top_n() {
        let records = (0..10)
            .map(|i| Record {
                subject: "dup".to_string(),
                question: "repeated question".to_string(),
                answer: format!("answer {}", i),
            })
            .collect();
        let mut state = state();
        state.dataset = Arc::new(Dataset {
            records,
            sources: Vec::new(),
        });

        let response = resolve(&state, "repeated question");
        assert_eq!(response.matches.len(), state.matcher.config().top_n);
    }
}
