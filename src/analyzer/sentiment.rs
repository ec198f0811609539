// Lexicon-based sentiment scoring.
use crate::model::LexiconError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only word -> polarity weight table.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    weights: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Built-in lexicon tuned for monetary policy language. Outright
    /// positive/negative words carry full weight, hedging and confidence
    /// markers half weight.
    pub fn builtin() -> Self {
        let mut weights = HashMap::new();
        let entries: [(&[&str], f64); 4] = [
            (POSITIVE_WORDS, 1.0),
            (NEGATIVE_WORDS, -1.0),
            (CONFIDENCE_WORDS, 0.5),
            (HEDGING_WORDS, -0.5),
        ];
        for (words, weight) in entries {
            for word in words {
                weights.insert(word.to_string(), weight);
            }
        }
        Self { weights }
    }

    /// Lexicon with no entries; every document scores neutral.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a word -> weight table from a JSON object file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        let weights = serde_json::from_str(&content).map_err(|source| LexiconError::Malformed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { weights })
    }

    pub fn weight(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Scores one statement's token sequence against a lexicon.
pub struct SentimentScorer {
    lexicon: SentimentLexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Sum of lexicon weights over the tokens, normalized by token count
    /// and clamped to [-1, 1]. Documents with no matching tokens score
    /// exactly 0.0, as do empty documents.
    pub fn score(&self, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let sum: f64 = tokens
            .iter()
            .filter_map(|t| self.lexicon.weight(t))
            .sum();
        (sum / tokens.len() as f64).clamp(-1.0, 1.0)
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "growth", "growing", "grew", "increase", "increased", "increasing", "improve", "improved",
    "improvement", "improving", "strong", "stronger", "strength", "strengthened", "robust",
    "solid", "expansion", "expanded", "expanding", "gains", "favorable", "resilient",
    "stability", "stable", "progress", "momentum", "recovery", "recovered", "positive",
    "healthy", "upside", "accommodative",
];

const NEGATIVE_WORDS: &[&str] = &[
    "decline", "declined", "declining", "decrease", "decreased", "weak", "weaker", "weakness",
    "weakened", "risk", "risks", "uncertainty", "uncertain", "concern", "concerns", "stress",
    "strain", "slowdown", "slowing", "contraction", "contracted", "deterioration",
    "deteriorated", "downturn", "recession", "crisis", "volatile", "volatility", "downside",
    "turmoil", "disruption", "shortfall",
];

const CONFIDENCE_WORDS: &[&str] = &[
    "confident", "committed", "expects", "anticipates", "certainly", "firmly", "assured",
];

const HEDGING_WORDS: &[&str] = &[
    "might", "could", "possibly", "perhaps", "appears", "somewhat", "potentially", "unclear",
];
