// Manipulation intensity: one scalar per document.
//
// intensity = clamp(sum(weighted scores) / normalization, 0, 1)
//
// The normalization constant is an empirical choice ("a heavily manipulative
// page scores around 50 weighted hits"), not something derived from the
// corpus, so it lives in ScoringSettings and can be tuned per run.

use serde::{Deserialize, Serialize};

use super::categories::CategoryScore;

/// Tunable constants for document scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSettings {
    /// Weighted-score total that maps to intensity 1.0 (default 50.0)
    pub intensity_normalization: f64,
    /// Characters of context kept on each side of a keyword match (default 30)
    pub context_window: usize,
    /// Multiplier for emotion intensity indicators (default 1.5)
    pub indicator_weight: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            intensity_normalization: 50.0,
            context_window: 30,
            indicator_weight: 1.5,
        }
    }
}

/// Compute the normalized manipulation intensity for one document.
///
/// Always returns a value in [0.0, 1.0]. A non-positive normalization
/// constant yields 0.0.
pub fn manipulation_intensity(scores: &[CategoryScore], normalization: f64) -> f64 {
    if normalization <= 0.0 || !normalization.is_finite() {
        return 0.0;
    }
    let total: f64 = scores.iter().map(|s| s.weighted_score).sum();
    let intensity = total / normalization;
    if intensity.is_nan() {
        return 0.0;
    }
    intensity.clamp(0.0, 1.0)
}

/// Intensity buckets used in reports and charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityTier {
    Low,
    Medium,
    High,
}

impl IntensityTier {
    pub const HIGH_THRESHOLD: f64 = 0.66;
    pub const MEDIUM_THRESHOLD: f64 = 0.33;

    /// High above 0.66, Medium above 0.33, otherwise Low.
    pub fn from_intensity(intensity: f64) -> Self {
        match intensity {
            i if i > Self::HIGH_THRESHOLD => IntensityTier::High,
            i if i > Self::MEDIUM_THRESHOLD => IntensityTier::Medium,
            _ => IntensityTier::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityTier::Low => "Low",
            IntensityTier::Medium => "Medium",
            IntensityTier::High => "High",
        }
    }
}

impl std::fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
