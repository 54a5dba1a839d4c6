// Full analysis pipeline.
//
// Sectors run one after another. A sector with no readable documents is
// skipped with a warning; a document that fails scoring is dropped inside
// the analyzer. Only output write failures abort the run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::analysis::{
    cross_sector_summary, distinctive_terms, summarize, table_from_records, Analyzer,
    ResultTable,
};
use crate::config::Config;
use crate::corpus::{load_documents, Sector};
use crate::output::charts::{self, ChartConfig};
use crate::output::csv_export::write_table_csv;
use crate::output::markdown::{self, SectorReportInput};
use crate::output::terminal;

use super::OutputPaths;

/// Number of TF-IDF terms listed per sector report.
const DISTINCTIVE_TERMS: usize = 15;

/// Result of a full run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Sectors that produced at least one row, in run order
    pub sectors: Vec<Sector>,
    /// Concatenation of every sector table
    pub combined: ResultTable,
}

/// Run the full pipeline over the configured sectors and write all outputs.
pub fn run(config: &Config, analyzer: &Analyzer, date: NaiveDate) -> Result<RunSummary> {
    let paths = OutputPaths::new(&config.results_dir);
    let chart_config = ChartConfig::default();
    let mut sector_tables: Vec<ResultTable> = Vec::new();
    let mut summary = RunSummary::default();

    for &sector in &config.sectors {
        println!("\nAnalyzing {sector}...");

        let docs = match load_documents(&config.data_dir, sector) {
            Ok(docs) => docs,
            Err(e) => {
                warn!(sector = %sector, error = format!("{e:#}"), "Failed to load sector, skipping");
                continue;
            }
        };
        if docs.is_empty() {
            warn!(sector = %sector, "No documents found, skipping sector");
            continue;
        }

        let records = analyzer.analyze_records(&docs);
        let table = table_from_records(&records);
        if table.is_empty() {
            warn!(sector = %sector, "Every document failed analysis, skipping sector");
            continue;
        }

        write_table_csv(&table, &paths.sector_csv(sector))?;

        let sector_summary = summarize(&table);
        let patterns = analyzer.scheme().sector_patterns(sector.pattern_key());
        let terms = distinctive_terms(&docs, DISTINCTIVE_TERMS);

        let report = markdown::render_sector_report(&SectorReportInput {
            sector,
            date,
            summary: &sector_summary,
            records: &records,
            patterns: &patterns,
            distinctive_terms: &terms,
        });
        write_text(&paths.sector_report(sector), &report)?;

        let intensities: Vec<f64> = records.iter().map(|r| r.manipulation_intensity).collect();
        charts::save_chart(
            &charts::intensity_chart(&intensities, &chart_config),
            &paths.sector_intensity_chart(sector),
        )?;
        charts::save_chart(
            &charts::strategy_heatmap(&charts::strategy_matrix(&table), &chart_config),
            &paths.sector_heatmap(sector),
        )?;
        charts::save_chart(
            &charts::emotion_chart(&sector_summary.emotion_means, &chart_config),
            &paths.sector_emotion_chart(sector),
        )?;
        charts::save_chart(
            &charts::sentiment_chart(&sector_summary.sentiment_means, &chart_config),
            &paths.sector_sentiment_chart(sector),
        )?;

        terminal::display_sector_summary(sector, &sector_summary, &records);
        info!(sector = %sector, brands = table.len(), "Sector complete");

        summary.sectors.push(sector);
        sector_tables.push(table);
    }

    if sector_tables.is_empty() {
        warn!("No sector produced results; skipping cross-sector outputs");
        return Ok(summary);
    }

    let combined = ResultTable::concat(&sector_tables);
    write_table_csv(&combined, &paths.all_csv())?;

    let cross = cross_sector_summary(&combined);
    write_text(
        &paths.cross_report(),
        &markdown::render_cross_sector_report(&cross, date),
    )?;
    charts::save_chart(
        &charts::cross_sector_chart(&cross, &chart_config),
        &paths.cross_chart(),
    )?;
    terminal::display_cross_sector(&cross);

    summary.combined = combined;
    Ok(summary)
}

/// Write a text report, creating parent directories.
pub(crate) fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote report");
    Ok(())
}
