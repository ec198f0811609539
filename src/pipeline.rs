// End-to-end batch run: load -> preprocess -> metrics -> report -> charts.
use crate::analyzer::{KeywordTracker, SentimentLexicon, SentimentScorer, complexity, frequency};
use crate::config::AppConfig;
use crate::model::{Corpus, PipelineError, StatementMetrics};
use crate::preprocess::Preprocessor;
use crate::{loader, render, report};
use std::path::PathBuf;
use tracing::{info, warn};

const TOP_WORDS: usize = 10;

#[derive(Debug)]
pub struct RunSummary {
    pub statements: usize,
    pub image_path: PathBuf,
}

/// Runs the whole pipeline once. Stages are strictly sequential and every
/// metric is recomputed from scratch; nothing survives between runs.
pub fn run(config: &AppConfig) -> Result<RunSummary, PipelineError> {
    let mut corpus = Corpus::new();
    for institution_cfg in &config.institutions {
        let batch = loader::load_statements(&institution_cfg.directory, institution_cfg.institution)?;
        info!(
            "Loaded {} statements from {}",
            batch.len(),
            institution_cfg.institution
        );
        corpus.push_all(batch);
    }
    if corpus.is_empty() {
        return Err(PipelineError::EmptyCorpus);
    }
    info!("Total: {} statements loaded", corpus.len());

    let preprocessor = Preprocessor::new(&config.extra_stopwords, config.min_token_len);
    let lexicon = match &config.lexicon_path {
        Some(path) => match SentimentLexicon::from_file(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!("Sentiment lexicon unavailable, all scores will be neutral: {e}");
                SentimentLexicon::empty()
            }
        },
        None => SentimentLexicon::builtin(),
    };
    let scorer = SentimentScorer::new(lexicon);
    let tracker = KeywordTracker::new(&config.keywords);

    let mut metrics = Vec::with_capacity(corpus.len());
    let mut corpus_tokens: Vec<String> = Vec::new();
    for statement in &corpus.statements {
        let raw = preprocessor.raw_tokens(&statement.text);
        metrics.push(StatementMetrics {
            sentiment: scorer.score(&raw),
            keyword_counts: tracker.count(&raw),
            vocabulary_diversity: complexity::vocabulary_diversity(&raw),
            average_word_length: complexity::average_word_length(&raw),
        });
        corpus_tokens.extend(preprocessor.tokens(&statement.text));
    }

    let frequencies = frequency::word_frequency(&corpus_tokens);
    let top_words = frequency::top_n(&frequencies, TOP_WORDS);
    let keyword_totals = tracker.totals(metrics.iter().map(|m| &m.keyword_counts));

    report::print_summary(
        &corpus,
        &metrics,
        tracker.labels(),
        &keyword_totals,
        &top_words,
    );

    render::render_charts(
        &config.output_path,
        &corpus,
        &metrics,
        tracker.labels(),
        &keyword_totals,
    )?;
    info!("Chart grid saved to {}", config.output_path.display());

    Ok(RunSummary {
        statements: corpus.len(),
        image_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstitutionConfig;
    use crate::model::{Institution, KeywordSpec};
    use std::fs;
    use std::path::Path;

    fn config_for(dir: &Path, output: &Path) -> AppConfig {
        AppConfig {
            institutions: vec![InstitutionConfig {
                institution: Institution::Fed,
                directory: dir.to_path_buf(),
            }],
            keywords: vec![KeywordSpec::single("inflation")],
            extra_stopwords: Vec::new(),
            min_token_len: 4,
            lexicon_path: None,
            output_path: output.to_path_buf(),
        }
    }

    #[test]
    fn keyword_series_follows_chronological_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("2015-01-01.txt"),
            "Inflation remains low. The outlook for inflation is stable.",
        )
        .unwrap();
        fs::write(
            dir.path().join("2015-03-18.txt"),
            "Employment continued to improve this quarter.",
        )
        .unwrap();
        fs::write(
            dir.path().join("2015-04-29.txt"),
            "Inflation, inflation expectations and core inflation all moved; \
             headline inflation and services inflation diverged.",
        )
        .unwrap();

        let statements = loader::load_statements(dir.path(), Institution::Fed).unwrap();
        let preprocessor = Preprocessor::default();
        let tracker = KeywordTracker::new(&[KeywordSpec::single("inflation")]);

        let counts: Vec<u64> = statements
            .iter()
            .map(|s| tracker.count(&preprocessor.raw_tokens(&s.text))[0])
            .collect();
        assert_eq!(counts, vec![2, 0, 5]);

        let rows: Vec<Vec<u64>> = statements
            .iter()
            .map(|s| tracker.count(&preprocessor.raw_tokens(&s.text)))
            .collect();
        assert_eq!(tracker.totals(rows.iter()), vec![7]);
    }

    #[test]
    fn full_run_writes_the_chart_image() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(
            data.path().join("2015-01-01.txt"),
            "The committee sees solid growth and stable inflation.",
        )
        .unwrap();
        fs::write(
            data.path().join("2015-06-17.txt"),
            "Downside risks and uncertainty weigh on the outlook.",
        )
        .unwrap();

        let output = out.path().join("charts.svg");
        let config = config_for(data.path(), &output);
        let summary = run(&config).unwrap();

        assert_eq!(summary.statements, 2);
        assert!(output.exists());
    }

    #[test]
    fn empty_corpus_is_fatal_and_writes_no_image() {
        let data = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let output = out.path().join("charts.svg");
        let config = config_for(data.path(), &output);

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyCorpus));
        assert!(!output.exists());
    }

    #[test]
    fn missing_directory_is_fatal() {
        let out = tempfile::tempdir().unwrap();
        let config = config_for(Path::new("no-such-directory"), &out.path().join("c.svg"));
        let err = run(&config).unwrap_err();
        assert!(matches!(err, PipelineError::Load(_)));
    }
}
