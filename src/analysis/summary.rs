// Sector and cross-sector summary statistics over a result table.
//
// Everything here reads the table by column name, so summaries work the same
// on a single sector's table and on the concatenated cross-sector table.
// Rankings use stable sorts: ties keep table (brand) order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::scoring::IntensityTier;
use crate::sentiment;

use super::table::ResultTable;

pub const TOP_STRATEGIES: usize = 5;
pub const TOP_EMOTIONS: usize = 5;
pub const TOP_BRANDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Descending,
    Ascending,
}

/// Brands per intensity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    pub fn from_intensities<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut counts = Self::default();
        for v in values {
            match IntensityTier::from_intensity(v) {
                IntensityTier::High => counts.high += 1,
                IntensityTier::Medium => counts.medium += 1,
                IntensityTier::Low => counts.low += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyRank {
    pub name: String,
    /// Sum of hit counts across brands
    pub total_hits: f64,
    /// total_hits / brand count
    pub per_brand: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorSummary {
    pub brand_count: usize,
    pub mean_intensity: f64,
    pub tiers: TierCounts,
    /// Mean of every numeric column, in column order
    pub column_means: Vec<(String, f64)>,
    pub top_strategies: Vec<StrategyRank>,
    /// How often each strategy was a brand's dominant one; count descending,
    /// first appearance on ties
    pub dominant_strategy_counts: Vec<(String, usize)>,
    /// Mean score per emotion, in coding-scheme order
    pub emotion_means: Vec<(String, f64)>,
    /// Emotions by mean score, highest first
    pub top_emotions: Vec<(String, f64)>,
    pub sentiment_means: Vec<(String, f64)>,
    pub most_intense: Vec<(String, f64)>,
    pub least_intense: Vec<(String, f64)>,
}

/// Per-sector slice of the cross-sector summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorProfile {
    pub sector: String,
    pub brand_count: usize,
    pub mean_intensity: f64,
    pub tiers: TierCounts,
    pub dominant_strategy_counts: Vec<(String, usize)>,
    /// Mean per emotion column, in column order; emotions the sector never
    /// scored are left out
    pub emotion_means: Vec<(String, f64)>,
    pub sentiment_means: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSectorSummary {
    /// Sectors in first-appearance order
    pub sectors: Vec<SectorProfile>,
}

/// Strategy names, derived from `strat_<name>` columns that have a matching
/// `strat_<name>_weighted` column.
pub fn strategy_names(table: &ResultTable) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter_map(|c| c.strip_prefix("strat_"))
        .filter(|name| table.has_column(&format!("strat_{name}_weighted")))
        .map(str::to_string)
        .collect()
}

/// Emotion names, from `emotion_<name>` columns.
pub fn emotion_names(table: &ResultTable) -> Vec<String> {
    table
        .columns()
        .iter()
        .filter_map(|c| c.strip_prefix("emotion_"))
        .map(str::to_string)
        .collect()
}

/// Top `n` brands by a numeric column. Rows without a numeric value are
/// skipped; ties keep table order.
pub fn top_n(table: &ResultTable, column: &str, n: usize, order: Order) -> Vec<(String, f64)> {
    let (Some(values), Some(brands)) = (table.numeric_column(column), table.text_column("brand"))
    else {
        return Vec::new();
    };

    let mut ranked: Vec<(String, f64)> = brands
        .into_iter()
        .zip(values)
        .filter_map(|(brand, v)| Some((brand.unwrap_or_default().to_string(), v?)))
        .collect();
    ranked.sort_by(|a, b| compare(a.1, b.1, order));
    ranked.truncate(n);
    ranked
}

fn compare(a: f64, b: f64, order: Order) -> Ordering {
    match order {
        Order::Descending => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        Order::Ascending => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Value counts of a text column: count descending, first appearance on ties.
fn value_counts(values: &[Option<&str>]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for v in values.iter().flatten() {
        match counts.iter_mut().find(|(name, _)| name == v) {
            Some((_, c)) => *c += 1,
            None => counts.push((v.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn means_for(table: &ResultTable, columns: &[String]) -> Vec<(String, f64)> {
    columns
        .iter()
        .filter_map(|c| table.mean(c).map(|m| (c.clone(), m)))
        .collect()
}

/// (emotion name, mean score) for each emotion with any numeric cells.
fn emotion_means(table: &ResultTable, emotions: &[String]) -> Vec<(String, f64)> {
    emotions
        .iter()
        .filter_map(|e| table.mean(&format!("emotion_{e}")).map(|m| (e.clone(), m)))
        .collect()
}

fn sentiment_means(table: &ResultTable) -> Vec<(String, f64)> {
    let columns: Vec<String> = sentiment::column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    means_for(table, &columns)
}

/// Summary statistics for one sector's table.
pub fn summarize(table: &ResultTable) -> SectorSummary {
    let brand_count = table.len();
    let intensities: Vec<f64> = table
        .numeric_column("manipulation_intensity")
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect();

    let column_means: Vec<(String, f64)> = table
        .columns()
        .iter()
        .filter_map(|c| table.mean(c).map(|m| (c.clone(), m)))
        .collect();

    let mut top_strategies: Vec<StrategyRank> = strategy_names(table)
        .into_iter()
        .map(|name| {
            let total_hits: f64 = table
                .numeric_column(&format!("strat_{name}"))
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .sum();
            StrategyRank {
                name,
                total_hits,
                per_brand: if brand_count > 0 {
                    total_hits / brand_count as f64
                } else {
                    0.0
                },
            }
        })
        .collect();
    top_strategies.sort_by(|a, b| compare(a.total_hits, b.total_hits, Order::Descending));
    top_strategies.truncate(TOP_STRATEGIES);

    let dominant_strategy_counts =
        value_counts(&table.text_column("dominant_strategy").unwrap_or_default());

    let all_emotion_means = emotion_means(table, &emotion_names(table));
    let mut top_emotions = all_emotion_means.clone();
    top_emotions.sort_by(|a, b| compare(a.1, b.1, Order::Descending));
    top_emotions.truncate(TOP_EMOTIONS);

    SectorSummary {
        brand_count,
        mean_intensity: table.mean("manipulation_intensity").unwrap_or(0.0),
        tiers: TierCounts::from_intensities(intensities),
        column_means,
        top_strategies,
        dominant_strategy_counts,
        emotion_means: all_emotion_means,
        top_emotions,
        sentiment_means: sentiment_means(table),
        most_intense: top_n(table, "manipulation_intensity", TOP_BRANDS, Order::Descending),
        least_intense: top_n(table, "manipulation_intensity", TOP_BRANDS, Order::Ascending),
    }
}

/// Rows of `table` whose `sector` cell equals `sector`, as a new table.
pub fn filter_sector(table: &ResultTable, sector: &str) -> ResultTable {
    let mut out = ResultTable::new();
    for row in table.rows() {
        let in_sector = table
            .columns()
            .iter()
            .zip(row)
            .any(|(c, cell)| c == "sector" && cell.as_text() == Some(sector));
        if in_sector {
            out.push_row(table.columns().iter().cloned().zip(row.iter().cloned()));
        }
    }
    out
}

/// Group the concatenated table by sector.
pub fn cross_sector_summary(table: &ResultTable) -> CrossSectorSummary {
    let mut sector_order: Vec<String> = Vec::new();
    for s in table.text_column("sector").unwrap_or_default().into_iter().flatten() {
        if !sector_order.iter().any(|o| o == s) {
            sector_order.push(s.to_string());
        }
    }

    let emotions = emotion_names(table);

    let sectors = sector_order
        .into_iter()
        .map(|sector| {
            let sub = filter_sector(table, &sector);
            let intensities = sub
                .numeric_column("manipulation_intensity")
                .unwrap_or_default()
                .into_iter()
                .flatten();
            SectorProfile {
                brand_count: sub.len(),
                mean_intensity: sub.mean("manipulation_intensity").unwrap_or(0.0),
                tiers: TierCounts::from_intensities(intensities),
                dominant_strategy_counts: value_counts(
                    &sub.text_column("dominant_strategy").unwrap_or_default(),
                ),
                emotion_means: emotion_means(&sub, &emotions),
                sentiment_means: sentiment_means(&sub),
                sector,
            }
        })
        .collect();

    CrossSectorSummary { sectors }
}
