//! Query matching over the loaded dataset
//!
//! Two independent strategies, ordered by the presenter:
//! - Word match: token overlap between query and stored question
//! - Fuzzy match: approximate similarity score in [0, 100] with a
//!   configurable threshold and ranking limit
//!
//! Both are deterministic: results are sorted by score descending
//! with ties kept in original record order.

pub mod fuzzy;
pub mod models;
pub mod tokens;

pub use fuzzy::{LevenshteinScorer, SimilarityScorer};
pub use models::{Confidence, MatchResult, MatchStrategy};
pub use tokens::tokenize;

use crate::config::MatcherConfig;
use crate::dataset::Dataset;
use std::collections::BTreeSet;

/// Base score for a partial word match
const PARTIAL_MATCH_BASE: u8 = 70;

/// Matcher over an immutable dataset
///
/// Holds tuning knobs and the similarity scorer; the dataset itself
/// is passed in at call time.
pub struct Matcher {
    config: MatcherConfig,
    scorer: Box<dyn SimilarityScorer>,
}

impl Matcher {
    /// Create a matcher with the default Levenshtein scorer
    pub fn new(config: MatcherConfig) -> Self {
        Self::with_scorer(config, Box::new(LevenshteinScorer))
    }

    /// Create a matcher with a custom similarity scorer
    pub fn with_scorer(config: MatcherConfig, scorer: Box<dyn SimilarityScorer>) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Word matches: records whose question tokens overlap the query tokens
    ///
    /// A record containing every query token scores 100; a record
    /// containing at least `min_overlap` of them scores 70 plus a
    /// bonus proportional to the overlap, always below 100.
    pub fn word_matches(&self, query: &str, dataset: &Dataset) -> Vec<MatchResult> {
        let query_tokens: BTreeSet<String> = tokenize(query).into_iter().collect();
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<MatchResult> = dataset
            .records
            .iter()
            .filter_map(|record| {
                let question_tokens: BTreeSet<String> =
                    tokenize(&record.question).into_iter().collect();
                let overlap = query_tokens
                    .iter()
                    .filter(|t| question_tokens.contains(*t))
                    .count();

                let score = if overlap == query_tokens.len() {
                    100
                } else if overlap >= self.config.min_overlap {
                    PARTIAL_MATCH_BASE + (30 * overlap / query_tokens.len()) as u8
                } else {
                    return None;
                };

                Some(MatchResult {
                    subject: record.subject.clone(),
                    question: record.question.clone(),
                    answer: record.answer.clone(),
                    score,
                    strategy: MatchStrategy::Word,
                    confidence: Confidence::from_score(score),
                })
            })
            .collect();

        // Stable sort keeps original record order on equal scores
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    /// Fuzzy matches: top-N records scoring at or above the threshold
    pub fn fuzzy_matches(&self, query: &str, dataset: &Dataset) -> Vec<MatchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<MatchResult> = dataset
            .records
            .iter()
            .filter_map(|record| {
                let score = self.scorer.score(query, &record.question);
                if score < self.config.fuzzy_threshold {
                    return None;
                }
                Some(MatchResult {
                    subject: record.subject.clone(),
                    question: record.question.clone(),
                    answer: record.answer.clone(),
                    score,
                    strategy: MatchStrategy::Fuzzy,
                    confidence: Confidence::from_score(score),
                })
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(self.config.top_n);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;

    fn dataset(questions: &[(&str, &str)]) -> Dataset {
        Dataset {
            records: questions
                .iter()
                .map(|(q, a)| Record {
                    subject: "test".to_string(),
                    question: q.to_string(),
                    answer: a.to_string(),
                })
                .collect(),
            sources: Vec::new(),
        }
    }

    fn matcher() -> Matcher {
        Matcher::new(MatcherConfig::default())
    }

    #[test]
    fn test_word_match_full_containment() {
        let data = dataset(&[
            ("What is the syllabus for semester 3?", "See attached document."),
            ("What is an operating system?", "System software."),
        ]);

        let matches = matcher().word_matches("syllabus semester 3", &data);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].question, "What is the syllabus for semester 3?");
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn test_word_match_partial_scores_below_full() {
        let data = dataset(&[
            ("What is the syllabus for semester 3?", "See attached document."),
        ]);

        let matches = matcher().word_matches("syllabus of semester 5 please", &data);
        assert_eq!(matches.len(), 1);
        assert!(matches[0].score >= 70);
        assert!(matches[0].score < 100);
    }

    #[test]
    fn test_word_match_empty_query() {
        let data = dataset(&[("Some question?", "Some answer.")]);
        assert!(matcher().word_matches("", &data).is_empty());
        assert!(matcher().word_matches("   ", &data).is_empty());
    }

    #[test]
    fn test_word_match_empty_dataset() {
        let data = dataset(&[]);
        assert!(matcher().word_matches("anything", &data).is_empty());
    }

    #[test]
    fn test_word_match_misses_misspelling() {
        let data = dataset(&[("Data Structures syllabus", "See unit list.")]);
        assert!(matcher().word_matches("Dat Structur", &data).is_empty());
    }

    #[test]
    fn test_fuzzy_match_catches_misspelling() {
        let data = dataset(&[
            ("Data Structures syllabus", "See unit list."),
            ("Operating Systems basics", "Processes and memory."),
        ]);

        let matches = matcher().fuzzy_matches("Dat Structur", &data);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].question, "Data Structures syllabus");
        assert!(matches[0].score >= 60);
    }

    #[test]
    fn test_fuzzy_exact_question_scores_100() {
        let data = dataset(&[("What is the syllabus for semester 3?", "See attached.")]);
        let matches = matcher().fuzzy_matches("What is the syllabus for semester 3?", &data);
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn test_fuzzy_ranking_is_non_increasing_and_bounded() {
        let data = dataset(&[
            ("database management system", "DBMS."),
            ("database management systems overview", "DBMS overview."),
            ("database systems", "Storage."),
            ("discrete structures", "Maths."),
        ]);

        let matches = matcher().fuzzy_matches("database management system", &data);
        assert!(!matches.is_empty());
        assert!(matches.len() <= 3);
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(matches.iter().all(|m| m.score <= 100));
    }

    #[test]
    fn test_fuzzy_tie_break_keeps_record_order() {
        // Duplicate questions are retained and tie on score
        let data = dataset(&[
            ("What is a stack?", "First copy."),
            ("What is a stack?", "Second copy."),
        ]);

        let matches = matcher().fuzzy_matches("What is a stack?", &data);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].answer, "First copy.");
        assert_eq!(matches[1].answer, "Second copy.");
    }

    #[test]
    fn test_fuzzy_threshold_filters() {
        let data = dataset(&[("library opening hours", "n/a")]);
        let matches = matcher().fuzzy_matches("xyz xyz xyz", &data);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_custom_scorer_is_used() {
        struct Fixed(u8);
        impl SimilarityScorer for Fixed {
            fn score(&self, _a: &str, _b: &str) -> u8 {
                self.0
            }
        }

        let data = dataset(&[("q", "a")]);
        let matcher = Matcher::with_scorer(MatcherConfig::default(), Box::new(Fixed(75)));
        let matches = matcher.fuzzy_matches("query", &data);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 75);
        assert_eq!(matches[0].confidence, Confidence::Low);
    }
}
