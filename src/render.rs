// Chart-grid rendering via plotters (pure-Rust SVG backend).
//
// Each panel renders independently: a panel whose data is empty or whose
// drawing fails becomes a placeholder, the rest of the grid still renders.
use crate::model::{Corpus, Institution, RenderError, StatementMetrics};
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::warn;

const CANVAS: (u32, u32) = (1500, 1000);
const HISTOGRAM_BINS: usize = 15;
const BAR_COLOR: RGBColor = RGBColor(70, 130, 180);

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type PanelResult = Result<(), Box<dyn std::error::Error>>;

fn series_color(institution: Institution) -> RGBColor {
    match institution {
        Institution::Fed => RGBColor(31, 119, 180),
        Institution::Rbnz => RGBColor(214, 39, 40),
    }
}

pub fn render_charts(
    path: &Path,
    corpus: &Corpus,
    metrics: &[StatementMetrics],
    keyword_labels: &[String],
    keyword_totals: &[u64],
) -> Result<(), RenderError> {
    let root = SVGBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let panels = root.split_evenly((2, 2));

    draw_or_placeholder(&panels[0], "Sentiment Over Time", |p| {
        sentiment_panel(p, corpus, metrics)
    });
    draw_or_placeholder(&panels[1], "Statement Length Over Time", |p| {
        length_panel(p, corpus)
    });
    draw_or_placeholder(&panels[2], "Sentiment Distribution", |p| {
        distribution_panel(p, corpus, metrics)
    });
    draw_or_placeholder(&panels[3], "Total Keyword Mentions", |p| {
        keyword_panel(p, keyword_labels, keyword_totals)
    });

    root.present().map_err(draw_err)
}

fn draw_err<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

fn draw_or_placeholder<'a, F>(panel: &Panel<'a>, title: &str, draw: F)
where
    F: FnOnce(&Panel<'a>) -> PanelResult,
{
    if let Err(e) = draw(panel) {
        warn!("Panel '{title}' not rendered, substituting placeholder: {e}");
        if let Err(e) = placeholder(panel, title) {
            warn!("Placeholder for '{title}' failed as well: {e}");
        }
    }
}

fn placeholder(panel: &Panel, title: &str) -> PanelResult {
    panel.fill(&WHITE)?;
    panel.draw(&Text::new(
        format!("{title} (no data)"),
        (40, 40),
        ("sans-serif", 20),
    ))?;
    Ok(())
}

/// Date axis padded by a day on each side when the corpus spans a single
/// date, so the coordinate range is never degenerate.
fn padded_date_range(corpus: &Corpus) -> Option<(NaiveDate, NaiveDate)> {
    let (min, max) = corpus.date_range()?;
    if min == max {
        Some((min - Duration::days(1), max + Duration::days(1)))
    } else {
        Some((min, max))
    }
}

fn sentiment_panel(
    panel: &Panel,
    corpus: &Corpus,
    metrics: &[StatementMetrics],
) -> PanelResult {
    let (from, to) = padded_date_range(corpus).ok_or("empty corpus")?;
    let mut chart = ChartBuilder::on(panel)
        .caption("Sentiment Over Time", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(from..to, -1.05f64..1.05f64)?;
    chart
        .configure_mesh()
        .x_labels(6)
        .y_desc("Sentiment score")
        .draw()?;

    // neutral guide line
    chart.draw_series(LineSeries::new(
        [(from, 0.0), (to, 0.0)],
        BLACK.mix(0.4).stroke_width(1),
    ))?;

    for institution in corpus.institutions() {
        let color = series_color(institution);
        let points: Vec<(NaiveDate, f64)> = corpus
            .statements
            .iter()
            .zip(metrics)
            .filter(|(s, _)| s.institution == institution)
            .map(|(s, m)| (s.date, m.sentiment))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(institution.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart.draw_series(
            points
                .iter()
                .map(|&(date, value)| Circle::new((date, value), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4).stroke_width(1))
        .background_style(WHITE.mix(0.8).filled())
        .draw()?;
    Ok(())
}

fn length_panel(panel: &Panel, corpus: &Corpus) -> PanelResult {
    let (from, to) = padded_date_range(corpus).ok_or("empty corpus")?;
    let max_words = corpus
        .statements
        .iter()
        .map(|s| s.word_count)
        .max()
        .unwrap_or(0) as f64;
    let mut chart = ChartBuilder::on(panel)
        .caption("Statement Length Over Time", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(from..to, 0f64..(max_words * 1.1).max(1.0))?;
    chart
        .configure_mesh()
        .x_labels(6)
        .y_desc("Word count")
        .draw()?;

    for institution in corpus.institutions() {
        let color = series_color(institution);
        let points: Vec<(NaiveDate, f64)> = corpus
            .by_institution(institution)
            .map(|s| (s.date, s.word_count as f64))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))?
            .label(institution.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
        chart.draw_series(
            points
                .iter()
                .map(|&(date, value)| Circle::new((date, value), 3, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4).stroke_width(1))
        .background_style(WHITE.mix(0.8).filled())
        .draw()?;
    Ok(())
}

fn distribution_panel(
    panel: &Panel,
    corpus: &Corpus,
    metrics: &[StatementMetrics],
) -> PanelResult {
    if metrics.is_empty() {
        return Err("no sentiment scores".into());
    }
    let institutions = corpus.institutions();
    let bin_width = 2.0 / HISTOGRAM_BINS as f64;
    let mut bins: Vec<Vec<u32>> = vec![vec![0; HISTOGRAM_BINS]; institutions.len()];
    for (statement, metric) in corpus.statements.iter().zip(metrics) {
        let Some(series) = institutions
            .iter()
            .position(|&i| i == statement.institution)
        else {
            continue;
        };
        let bin = (((metric.sentiment + 1.0) / bin_width) as usize).min(HISTOGRAM_BINS - 1);
        bins[series][bin] += 1;
    }

    let y_max = bins.iter().flatten().copied().max().unwrap_or(0).max(1) + 1;
    let mut chart = ChartBuilder::on(panel)
        .caption("Sentiment Distribution", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(-1.0f64..1.0f64, 0u32..y_max)?;
    chart
        .configure_mesh()
        .y_desc("Statements")
        .draw()?;

    for (series, institution) in institutions.iter().enumerate() {
        let color = series_color(*institution);
        chart
            .draw_series(bins[series].iter().enumerate().filter(|&(_, &c)| c > 0).map(
                |(bin, &count)| {
                    let x0 = -1.0 + bin as f64 * bin_width;
                    Rectangle::new([(x0, 0), (x0 + bin_width, count)], color.mix(0.5).filled())
                },
            ))?
            .label(institution.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.5).filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.4).stroke_width(1))
        .background_style(WHITE.mix(0.8).filled())
        .draw()?;
    Ok(())
}

fn keyword_panel(panel: &Panel, labels: &[String], totals: &[u64]) -> PanelResult {
    if labels.is_empty() {
        return Err("no keywords configured".into());
    }
    let y_max = totals.iter().copied().max().unwrap_or(0).max(1) + 1;
    let mut chart = ChartBuilder::on(panel)
        .caption("Total Keyword Mentions", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d((0usize..labels.len()).into_segmented(), 0u64..y_max)?;
    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .y_desc("Total mentions")
        .draw()?;

    chart.draw_series(totals.iter().enumerate().map(|(i, &total)| {
        Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), total)],
            BAR_COLOR.filled(),
        )
    }))?;
    Ok(())
}
