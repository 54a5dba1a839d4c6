// Quick analysis: keyword counts only, no sentiment or linguistic features.
//
// Strategies count distinct keywords present; emotions count distinct plain
// markers (intensity indicators are ignored here).

use anyhow::Result;
use tracing::warn;

use crate::config::Config;
use crate::corpus::{load_documents, Document};
use crate::lexicon::CodingScheme;
use crate::output::markdown::{render_quick_report, QuickProfile};
use crate::scoring::{score_categories, score_emotions};

use super::analyze::write_text;
use super::OutputPaths;

/// Keyword counts for one document.
pub fn quick_profile(doc: &Document, scheme: &CodingScheme, context_window: usize) -> QuickProfile {
    let strategies = score_categories(&doc.text, scheme.manipulation(), context_window)
        .into_iter()
        .map(|s| (s.name, s.hits))
        .collect();
    let emotions = score_emotions(&doc.text, scheme.emotions(), 0.0)
        .into_iter()
        .map(|e| (e.name, e.marker_count))
        .collect();
    QuickProfile {
        brand: doc.brand.clone(),
        text_length: doc.text.chars().count(),
        strategies,
        emotions,
    }
}

/// Write per-sector quick reports and the combined report. Returns the
/// combined report text (empty when no sector had documents).
pub fn run(config: &Config, scheme: &CodingScheme) -> Result<String> {
    let paths = OutputPaths::new(&config.results_dir);
    let mut reports = Vec::new();

    for &sector in &config.sectors {
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

        let profiles: Vec<QuickProfile> = docs
            .iter()
            .map(|d| quick_profile(d, scheme, config.scoring.context_window))
            .collect();
        let report = render_quick_report(sector, &profiles);
        println!("{report}");
        write_text(&paths.sector_quick(sector), &report)?;
        reports.push(report);
    }

    if reports.is_empty() {
        return Ok(String::new());
    }

    let combined = format!(
        "\nCOMBINED ANALYSIS REPORT\n{}\n{}",
        "=".repeat(60),
        reports.join("\n")
    );
    write_text(&paths.all_quick(), &combined)?;
    Ok(combined)
}
