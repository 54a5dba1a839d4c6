// The per-brand analysis record and its flattening into table cells.

use serde::Serialize;

use crate::corpus::Sector;
use crate::linguistic::LinguisticFeatures;
use crate::scoring::{CategoryScore, EmotionScore, IntensityTier};
use crate::sentiment::SentimentScores;

use super::table::Cell;

/// Everything computed for one (brand, sector) document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandAnalysis {
    pub brand: String,
    pub sector: Sector,
    /// Length of the raw text in characters
    pub text_length: usize,
    /// Normalized weighted-score total, always in [0, 1]
    pub manipulation_intensity: f64,
    pub intensity_tier: IntensityTier,
    /// Highest weighted strategy, first declared on ties
    pub dominant_strategy: Option<String>,
    /// Highest scoring emotion; None when the scheme has no emotions
    pub dominant_emotion: Option<String>,
    pub strategies: Vec<CategoryScore>,
    pub emotions: Vec<EmotionScore>,
    pub sentiment: SentimentScores,
    pub linguistic: LinguisticFeatures,
    pub sector_markers: Vec<(String, u32)>,
    /// Model emotion probabilities, empty without a classifier
    pub model_emotions: Vec<(String, f64)>,
}

impl BrandAnalysis {
    /// Strategies with at least one hit, strongest first. Ties keep
    /// declaration order.
    pub fn top_strategies(&self, n: usize) -> Vec<&CategoryScore> {
        let mut hit: Vec<&CategoryScore> = self.strategies.iter().filter(|s| s.hits > 0).collect();
        hit.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
        hit.truncate(n);
        hit
    }

    /// Flatten into named cells in table column order.
    pub fn cells(&self) -> Vec<(String, Cell)> {
        let mut cells = vec![
            ("brand".to_string(), Cell::Text(self.brand.clone())),
            ("sector".to_string(), Cell::Text(self.sector.as_str().to_string())),
            ("text_length".to_string(), Cell::Int(self.text_length as i64)),
            (
                "manipulation_intensity".to_string(),
                Cell::Float(self.manipulation_intensity),
            ),
            (
                "intensity_tier".to_string(),
                Cell::Text(self.intensity_tier.as_str().to_string()),
            ),
            (
                "dominant_strategy".to_string(),
                Cell::from(self.dominant_strategy.clone()),
            ),
            (
                "dominant_emotion".to_string(),
                Cell::from(self.dominant_emotion.clone()),
            ),
        ];

        for s in &self.strategies {
            cells.push((format!("strat_{}", s.name), Cell::Int(s.hits as i64)));
            cells.push((format!("strat_{}_weighted", s.name), Cell::Float(s.weighted_score)));
        }

        for e in &self.emotions {
            cells.push((format!("emotion_{}", e.name), Cell::Float(e.total_score)));
        }

        for (name, value) in self.sentiment.columns() {
            cells.push((name.to_string(), Cell::Float(value)));
        }

        let l = &self.linguistic;
        for (name, value) in l.columns() {
            let cell = if name == "avg_sentence_length" {
                Cell::Float(value)
            } else {
                Cell::Int(value as i64)
            };
            cells.push((name.to_string(), cell));
        }

        for (marker, count) in &self.sector_markers {
            cells.push((format!("marker_{marker}"), Cell::Int(*count as i64)));
        }

        for (label, p) in &self.model_emotions {
            cells.push((format!("model_{label}"), Cell::Float(*p)));
        }

        cells
    }
}
