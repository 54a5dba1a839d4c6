// Pipelines: the batch drivers behind the CLI subcommands.
//
// analyze: per sector load, score, aggregate and render, then build the
//          cross-sector outputs from the concatenated tables.
// quick:   keyword-count-only pass producing the plain-text quick reports.

pub mod analyze;
pub mod quick;

use std::path::{Path, PathBuf};

use crate::corpus::Sector;

/// Output file locations under the results directory.
pub struct OutputPaths<'a> {
    dir: &'a Path,
}

impl<'a> OutputPaths<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    pub fn sector_csv(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_emotion_manipulation_results.csv"))
    }

    pub fn sector_report(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_detailed_report.md"))
    }

    pub fn sector_intensity_chart(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_intensity.png"))
    }

    pub fn sector_heatmap(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_strategy_heatmap.png"))
    }

    pub fn sector_emotion_chart(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_emotions.png"))
    }

    pub fn sector_sentiment_chart(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_sentiment.png"))
    }

    pub fn sector_quick(&self, sector: Sector) -> PathBuf {
        self.dir.join(format!("{sector}_quick_analysis.txt"))
    }

    pub fn all_csv(&self) -> PathBuf {
        self.dir.join("all_sectors_emotion_manipulation.csv")
    }

    pub fn cross_report(&self) -> PathBuf {
        self.dir.join("cross_sector_report.md")
    }

    pub fn cross_chart(&self) -> PathBuf {
        self.dir.join("cross_sector_comparison.png")
    }

    pub fn all_quick(&self) -> PathBuf {
        self.dir.join("all_sectors_quick_analysis.txt")
    }
}
