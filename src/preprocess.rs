// Text normalization: raw text -> token sequence.
use std::collections::HashSet;

/// Default stopword set: function words plus "committee", which dominates
/// FOMC statements without carrying signal.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "will",
    "would", "committee",
];

/// Pure, deterministic tokenizer. Same input text always yields the same
/// token sequence; no external state.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    stopwords: HashSet<String>,
    min_token_len: usize,
}

impl Preprocessor {
    pub fn new(extra_stopwords: &[String], min_token_len: usize) -> Self {
        let mut stopwords: HashSet<String> =
            DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect();
        stopwords.extend(extra_stopwords.iter().map(|w| w.to_lowercase()));
        Self {
            stopwords,
            min_token_len,
        }
    }

    /// Casefolds, replaces non-alphabetic characters with spaces and splits
    /// on whitespace. No stopword or length filtering.
    pub fn raw_tokens(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphabetic() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }

    /// `raw_tokens` minus stopwords and tokens shorter than the minimum
    /// length.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.raw_tokens(text)
            .into_iter()
            .filter(|t| t.chars().count() >= self.min_token_len)
            .filter(|t| !self.stopwords.contains(t.as_str()))
            .collect()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(&[], 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_digits_are_stripped() {
        let pre = Preprocessor::default();
        let tokens = pre.raw_tokens("Inflation rose 2.5%, unemployment fell!");
        assert_eq!(tokens, ["inflation", "rose", "unemployment", "fell"]);
    }

    #[test]
    fn stopwords_and_short_tokens_are_filtered() {
        let pre = Preprocessor::default();
        let tokens = pre.tokens("The Committee will act on the data it sees");
        assert_eq!(tokens, ["data", "sees"]);
    }

    #[test]
    fn extra_stopwords_extend_the_default_set() {
        let pre = Preprocessor::new(&["data".to_string()], 4);
        let tokens = pre.tokens("The Committee will act on the data");
        assert!(tokens.is_empty());
    }

    #[test]
    fn tokenization_is_idempotent() {
        let pre = Preprocessor::default();
        let first = pre.tokens("Monetary policy remains accommodative; risks are balanced.");
        let rejoined = first.join(" ");
        assert_eq!(pre.tokens(&rejoined), first);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        let pre = Preprocessor::default();
        assert!(pre.raw_tokens("").is_empty());
        assert!(pre.tokens("  \n\t ").is_empty());
    }
}
