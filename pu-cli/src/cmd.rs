//! Subcommand implementations.

use anyhow::Context;
use clap::Subcommand;
use pu_model::filter::{filter_papers, FilterCriterion};
use pu_model::paper::{Language, Paper, PaperCollection};
use pu_model::statistics::{ChartData, Statistics};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum Command {
    /// Decode both data files and report anything suspicious
    Validate {
        /// Path to papers.json
        #[arg(short = 'p', long, default_value = "site/data/papers.json")]
        papers: PathBuf,

        /// Path to statistics.json
        #[arg(short = 's', long, default_value = "site/data/statistics.json")]
        statistics: PathBuf,
    },

    /// List papers, optionally filtered by language
    Papers {
        /// Path to papers.json
        #[arg(short = 'p', long, default_value = "site/data/papers.json")]
        papers: PathBuf,

        /// all, chinese or english
        #[arg(short = 'f', long, default_value = "all")]
        filter: FilterCriterion,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate { papers, statistics } => {
            let collection = read_papers(&papers)?;
            let stats = read_statistics(&statistics)?;
            for line in validation_report(&collection, &stats) {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Papers { papers, filter } => {
            let collection = read_papers(&papers)?;
            for paper in filter_papers(&collection.papers, filter) {
                println!("{}", paper_line(&paper));
            }
            Ok(())
        }
    }
}

fn read_papers(path: &Path) -> anyhow::Result<PaperCollection> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let collection = PaperCollection::from_json(&body)
        .with_context(|| format!("decoding {}", path.display()))?;
    log::info!("{}: {} papers", path.display(), collection.papers.len());
    Ok(collection)
}

fn read_statistics(path: &Path) -> anyhow::Result<Statistics> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Statistics::from_json(&body).with_context(|| format!("decoding {}", path.display()))
}

/// `year  language  title`
fn paper_line(paper: &Paper) -> String {
    format!("{:>4}  {:<7}  {}", paper.year, paper.language, paper.title)
}

fn chart_report(name: &str, chart: &ChartData) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {} labels, {} datasets",
        name,
        chart.labels.len(),
        chart.datasets.len()
    )];
    for m in chart.length_mismatches() {
        lines.push(format!(
            "  warning: dataset '{}' has {} values for {} labels",
            m.dataset, m.values, m.labels
        ));
    }
    lines
}

/// Human-readable summary of both files.
fn validation_report(collection: &PaperCollection, stats: &Statistics) -> Vec<String> {
    let papers = &collection.papers;
    let mut lines = vec![format!(
        "papers: {} total, {} chinese, {} english",
        papers.len(),
        collection.count_language(Language::Chinese),
        collection.count_language(Language::English)
    )];
    let other = collection.count_language(Language::Other);
    if other > 0 {
        lines.push(format!("  warning: {} papers with an unrecognised language", other));
    }
    let no_pdf = papers.iter().filter(|p| p.links().len() == 1).count();
    if no_pdf > 0 {
        lines.push(format!("  note: {} papers without a PDF link", no_pdf));
    }
    lines.extend(chart_report("agePressureUlcerData", &stats.age_pressure_ulcer_data));
    lines.extend(chart_report(
        "interventionComparisonData",
        &stats.intervention_comparison_data,
    ));
    lines
}
