//! Request/response models for the ask API

use crate::matcher::MatchResult;
use crate::syllabus::SyllabusEntry;
use serde::{Deserialize, Serialize};

/// Ask request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Query-string form of the ask request
#[derive(Debug, Clone, Deserialize)]
pub struct AskParams {
    #[serde(default)]
    pub q: String,
}

/// Which result class the presenter settled on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AskOutcome {
    Matches,
    Syllabus,
    NoResult,
}

impl AskOutcome {
    /// Label used for the per-outcome request counter
    pub fn as_str(&self) -> &'static str {
        match self {
            AskOutcome::Matches => "matches",
            AskOutcome::Syllabus => "syllabus",
            AskOutcome::NoResult => "no_result",
        }
    }
}

/// Ask response: exactly one result class is populated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub outcome: AskOutcome,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syllabus: Vec<SyllabusEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AskResponse {
    pub fn matches(matches: Vec<MatchResult>) -> Self {
        Self {
            outcome: AskOutcome::Matches,
            matches,
            syllabus: Vec::new(),
            message: None,
        }
    }

    pub fn syllabus(entries: Vec<SyllabusEntry>) -> Self {
        Self {
            outcome: AskOutcome::Syllabus,
            matches: Vec::new(),
            syllabus: entries,
            message: None,
        }
    }

    pub fn no_result(message: impl Into<String>) -> Self {
        Self {
            outcome: AskOutcome::NoResult,
            matches: Vec::new(),
            syllabus: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
    pub catalog_entries: usize,
}

/// API error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_constructors() {
        let response = AskResponse::no_result("Sorry, no relevant answers found.");
        assert_eq!(response.outcome, AskOutcome::NoResult);
        assert!(response.matches.is_empty());
        assert!(response.message.is_some());

        let response = AskResponse::syllabus(vec![SyllabusEntry {
            subject_name: "Computer Networks".to_string(),
            file_reference: "cn_syllabus.pdf".to_string(),
        }]);
        assert_eq!(response.outcome, AskOutcome::Syllabus);
        assert_eq!(response.syllabus.len(), 1);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(AskOutcome::Matches.as_str(), "matches");
        assert_eq!(AskOutcome::NoResult.as_str(), "no_result");
    }

    #[test]
    fn test_empty_classes_not_serialized() {
        let response = AskResponse::no_result("nothing");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"matches\""));
        assert!(!json.contains("\"syllabus\""));
        assert!(json.contains("no_result"));
    }
}
