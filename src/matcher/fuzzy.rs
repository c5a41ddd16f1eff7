//! Approximate string similarity
//!
//! The scoring algorithm sits behind the `SimilarityScorer` trait so
//! the matcher never depends on a particular metric. The default
//! implementation is a normalized Levenshtein ratio over the
//! lowercased full strings.

/// Narrow interface for approximate string comparison
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of `a` and `b` as an integer in [0, 100]
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Levenshtein-based similarity scorer
///
/// score = 100 * (|a| + |b| - distance) / (|a| + |b|), computed over
/// lowercased character sequences. Identical strings score 100,
/// fully dissimilar strings score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a: Vec<char> = a.to_lowercase().chars().collect();
        let b: Vec<char> = b.to_lowercase().chars().collect();

        let total = a.len() + b.len();
        if total == 0 {
            return 100;
        }

        let distance = levenshtein(&a, &b);
        ((total - distance) * 100 / total) as u8
    }
}

/// Classic two-row Levenshtein edit distance
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
