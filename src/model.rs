// Core structs: Institution, Statement, Corpus, KeywordSpec, StatementMetrics
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// One of the two central banks covered by the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Institution {
    Fed,
    #[serde(rename = "RBNZ")]
    Rbnz,
}

impl Institution {
    pub fn label(&self) -> &'static str {
        match self {
            Institution::Fed => "Fed",
            Institution::Rbnz => "RBNZ",
        }
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One policy communication document, immutable after load.
#[derive(Debug, Clone)]
pub struct Statement {
    pub institution: Institution,
    pub date: NaiveDate,
    pub text: String,
    pub word_count: usize,
    pub filename: String,
}

/// The full in-memory collection of statements for a run.
///
/// Insertion order is chronological per institution, not globally.
#[derive(Debug, Default)]
pub struct Corpus {
    pub statements: Vec<Statement>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_all(&mut self, batch: Vec<Statement>) {
        self.statements.extend(batch);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Earliest and latest statement date across all institutions.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.statements.iter().map(|s| s.date).min()?;
        let max = self.statements.iter().map(|s| s.date).max()?;
        Some((min, max))
    }

    /// Distinct institutions in first-seen order.
    pub fn institutions(&self) -> Vec<Institution> {
        let mut seen = Vec::new();
        for statement in &self.statements {
            if !seen.contains(&statement.institution) {
                seen.push(statement.institution);
            }
        }
        seen
    }

    pub fn by_institution(
        &self,
        institution: Institution,
    ) -> impl Iterator<Item = &Statement> {
        self.statements
            .iter()
            .filter(move |s| s.institution == institution)
    }
}

/// A set of surface forms tracked under one human-readable label.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordSpec {
    pub label: String,
    pub forms: Vec<String>,
}

impl KeywordSpec {
    /// A spec whose label is its only surface form.
    pub fn single(word: &str) -> Self {
        Self {
            label: word.to_string(),
            forms: vec![word.to_string()],
        }
    }
}

/// Derived per-statement numbers; always a pure function of
/// (statement text, configuration).
#[derive(Debug, Clone)]
pub struct StatementMetrics {
    pub sentiment: f64,
    pub keyword_counts: Vec<u64>,
    pub vocabulary_diversity: f64,
    pub average_word_length: f64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("statement directory not found: {path}")]
    DirectoryMissing { path: String },
    #[error("failed to read directory {path}: {source}")]
    DirectoryUnreadable {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse lexicon file {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("no statements found in any configured directory")]
    EmptyCorpus,
    #[error(transparent)]
    Render(#[from] RenderError),
}
