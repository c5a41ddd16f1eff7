//! Data models for query matching

use serde::{Deserialize, Serialize};

/// Strategy that produced a match
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Token-overlap match against the stored question
    Word,
    /// Approximate string-similarity match
    Fuzzy,
}

/// Confidence band derived from a match score, used for result styling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Weak,
}

impl Confidence {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Confidence::High,
            80..=89 => Confidence::Medium,
            70..=79 => Confidence::Low,
            _ => Confidence::Weak,
        }
    }
}

/// One ranked match for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub subject: String,
    pub question: String,
    pub answer: String,
    /// Match score in [0, 100]
    pub score: u8,
    pub strategy: MatchStrategy,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bands() {
        assert_eq!(Confidence::from_score(100), Confidence::High);
        assert_eq!(Confidence::from_score(90), Confidence::High);
        assert_eq!(Confidence::from_score(85), Confidence::Medium);
        assert_eq!(Confidence::from_score(72), Confidence::Low);
        assert_eq!(Confidence::from_score(60), Confidence::Weak);
    }
}
