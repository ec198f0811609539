// Console summary report. This is product output, not logging, so it goes
// straight to stdout.
use crate::model::{Corpus, Statement, StatementMetrics};

pub fn print_summary(
    corpus: &Corpus,
    metrics: &[StatementMetrics],
    keyword_labels: &[String],
    keyword_totals: &[u64],
    top_words: &[(String, u64)],
) {
    let line = "=".repeat(80);
    println!("{line}");
    println!("CENTRAL BANK COMMUNICATION ANALYTICS - SUMMARY REPORT");
    println!("{line}");

    println!("\n📊 Dataset overview:");
    println!("   Total statements: {}", corpus.len());
    if let Some((first, last)) = corpus.date_range() {
        println!("   Date range: {first} to {last}");
    }
    let names: Vec<&str> = corpus
        .institutions()
        .iter()
        .map(|i| i.label())
        .collect();
    println!("   Institutions: {}", names.join(", "));

    println!("\n📈 Statistics by institution:");
    for institution in corpus.institutions() {
        let rows: Vec<(&Statement, &StatementMetrics)> = corpus
            .statements
            .iter()
            .zip(metrics)
            .filter(|(s, _)| s.institution == institution)
            .collect();
        let n = rows.len() as f64;
        let avg_words = rows.iter().map(|(s, _)| s.word_count as f64).sum::<f64>() / n;
        let avg_sentiment = rows.iter().map(|(_, m)| m.sentiment).sum::<f64>() / n;
        println!("\n   {institution}:");
        println!("      Statements: {}", rows.len());
        println!("      Avg words: {avg_words:.0}");
        println!("      Avg sentiment: {avg_sentiment:.3}");
        if let (Some(first), Some(last)) = (
            rows.iter().map(|(s, _)| s.date).min(),
            rows.iter().map(|(s, _)| s.date).max(),
        ) {
            println!("      Date range: {first} to {last}");
        }
    }

    if !metrics.is_empty() {
        let n = metrics.len() as f64;
        let avg_words =
            corpus.statements.iter().map(|s| s.word_count as f64).sum::<f64>() / n;
        let avg_sentiment = metrics.iter().map(|m| m.sentiment).sum::<f64>() / n;
        let avg_diversity = metrics.iter().map(|m| m.vocabulary_diversity).sum::<f64>() / n;
        let avg_word_len = metrics.iter().map(|m| m.average_word_length).sum::<f64>() / n;

        println!("\n💡 Overall insights:");
        println!("   Average statement length: {avg_words:.0} words");
        println!("   Average sentiment score: {avg_sentiment:.3}");
        println!("   Average vocabulary diversity: {avg_diversity:.3}");
        println!("   Average word length: {avg_word_len:.1} chars");
        if let Some((idx, m)) = metrics
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.sentiment.total_cmp(&b.1.sentiment))
        {
            println!(
                "   Most positive statement: {} ({:.3})",
                corpus.statements[idx].date, m.sentiment
            );
        }
        if let Some((idx, m)) = metrics
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.sentiment.total_cmp(&b.1.sentiment))
        {
            println!(
                "   Most negative statement: {} ({:.3})",
                corpus.statements[idx].date, m.sentiment
            );
        }
    }

    println!("\n🔑 Keyword mentions (total):");
    for (label, total) in keyword_labels.iter().zip(keyword_totals) {
        let per_statement = *total as f64 / corpus.len().max(1) as f64;
        println!("   {label:15}: {total:4} total ({per_statement:.1} per statement)");
    }

    println!("\n📝 Most common words:");
    for (word, count) in top_words {
        println!("   {word:15}: {count:4}");
    }
    println!();
}
