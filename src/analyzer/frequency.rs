use std::collections::HashMap;

/// Counts token occurrences, returned in order of first appearance in the
/// stream. That ordering is what makes `top_n` ties deterministic.
pub fn word_frequency(tokens: &[String]) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for token in tokens {
        let entry = counts.entry(token.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(token.as_str());
        }
        *entry += 1;
    }
    order
        .into_iter()
        .map(|word| (word.to_string(), counts[word]))
        .collect()
}

/// The `n` most frequent entries; equal counts keep first-seen order.
pub fn top_n(frequencies: &[(String, u64)], n: usize) -> Vec<(String, u64)> {
    let mut sorted = frequencies.to_vec();
    // stable sort, so first-seen order survives among equal counts
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn occurrences_are_counted() {
        let freq = word_frequency(&toks(&["rate", "path", "rate", "rate", "path", "hike"]));
        assert_eq!(
            freq,
            vec![
                ("rate".to_string(), 3),
                ("path".to_string(), 2),
                ("hike".to_string(), 1)
            ]
        );
    }

    #[test]
    fn top_n_breaks_ties_by_first_appearance() {
        let freq = word_frequency(&toks(&["alpha", "beta", "gamma", "beta", "alpha", "gamma"]));
        let top = top_n(&freq, 2);
        assert_eq!(top[0].0, "alpha");
        assert_eq!(top[1].0, "beta");
    }

    #[test]
    fn empty_stream_has_no_frequencies() {
        assert!(word_frequency(&[]).is_empty());
        assert!(top_n(&[], 10).is_empty());
    }
}
