//! Query and question tokenization
//!
//! Both sides of a word match are tokenized identically: lowercase,
//! split on non-alphanumeric characters, empty tokens dropped.

/// Tokenize free text for word matching
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("What is the Syllabus for Semester 3?");
        assert_eq!(
            tokens,
            vec!["what", "is", "the", "syllabus", "for", "semester", "3"]
        );
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("data-structures, algorithms!");
        assert_eq!(tokens, vec!["data", "structures", "algorithms"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!  ").is_empty());
    }
}
