// Analysis: per-document records, result tables, and summaries.
//
// Analyzer turns documents into BrandAnalysis records and a ResultTable.
// summarize and cross_sector_summary read tables by column name, so they
// work on a single sector and on the concatenated cross-sector table.

pub mod analyzer;
pub mod record;
pub mod summary;
pub mod table;
pub mod terms;

pub use analyzer::{table_from_records, Analyzer};
pub use record::BrandAnalysis;
pub use summary::{
    cross_sector_summary, summarize, top_n, CrossSectorSummary, Order, SectorProfile,
    SectorSummary, StrategyRank, TierCounts,
};
pub use table::{Cell, ResultTable};
pub use terms::distinctive_terms;
