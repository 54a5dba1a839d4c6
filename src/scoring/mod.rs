// Scoring: keyword detection, weighted counts, and intensity.
//
// Everything here is a pure function of (text, lexicon, settings), so a
// document can be scored without touching any other document.

pub mod categories;
pub mod emotions;
pub mod intensity;

pub use categories::{dominant, score_categories, sector_marker_counts, CategoryScore};
pub use emotions::{score_emotions, EmotionScore};
pub use intensity::{manipulation_intensity, IntensityTier, ScoringSettings};
