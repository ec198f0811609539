// Text complexity metrics over the unfiltered token sequence.

/// Unique tokens over total tokens. Empty documents score 0.0 rather than
/// dividing by zero.
pub fn vocabulary_diversity(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: std::collections::HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
    unique.len() as f64 / tokens.len() as f64
}

/// Mean character length of tokens; 0.0 for empty documents.
pub fn average_word_length(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let total_chars: usize = tokens.iter().map(|t| t.chars().count()).sum();
    total_chars as f64 / tokens.len() as f64
}
