// Lexicon store: the coding scheme that drives keyword detection.
//
// A coding scheme declares manipulation categories (keywords + intensity
// weight), emotion categories (markers + intensity indicators), and optional
// per-sector patterns. It is loaded once and shared read-only by every
// document analysis.

pub mod builtin;
pub mod scheme;

pub use scheme::{
    CodingScheme, EmotionCategory, LexiconError, ManipulationCategory, SectorPatterns,
};
