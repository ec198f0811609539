// Analyzer module: stateless metric calculators over the corpus.
// Each calculator is a pure function of a statement's tokens plus the
// configuration passed in; none of them mutates the corpus.

pub mod complexity;
pub mod frequency;
pub mod keywords;
pub mod sentiment;

pub use keywords::KeywordTracker;
pub use sentiment::{SentimentLexicon, SentimentScorer};
