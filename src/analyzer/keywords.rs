use crate::model::KeywordSpec;
use std::collections::HashSet;

/// Counts exact-match keyword occurrences per statement. Every configured
/// keyword gets a slot in the output, so zero counts are explicit.
pub struct KeywordTracker {
    labels: Vec<String>,
    form_sets: Vec<HashSet<String>>,
}

impl KeywordTracker {
    pub fn new(specs: &[KeywordSpec]) -> Self {
        let labels = specs.iter().map(|s| s.label.clone()).collect();
        let form_sets = specs
            .iter()
            .map(|s| s.forms.iter().map(|f| f.to_lowercase()).collect())
            .collect();
        Self { labels, form_sets }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Occurrence counts for one statement's tokens, aligned with `labels`.
    pub fn count(&self, tokens: &[String]) -> Vec<u64> {
        let mut counts = vec![0u64; self.form_sets.len()];
        for token in tokens {
            for (slot, forms) in counts.iter_mut().zip(&self.form_sets) {
                if forms.contains(token.as_str()) {
                    *slot += 1;
                }
            }
        }
        counts
    }

    /// Corpus-wide totals: the element-wise sum of per-statement counts.
    pub fn totals<'a>(&self, rows: impl IntoIterator<Item = &'a Vec<u64>>) -> Vec<u64> {
        let mut totals = vec![0u64; self.labels.len()];
        for row in rows {
            for (total, count) in totals.iter_mut().zip(row) {
                *total += count;
            }
        }
        totals
    }
}
