// Copyscope: emotion-based manipulation analysis of marketing copy
//
// This is the library root. Each module corresponds to a stage of the
// corpus analysis pipeline, leaves first.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod emotion;
pub mod lexicon;
pub mod linguistic;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
