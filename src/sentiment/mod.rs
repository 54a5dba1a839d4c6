// Sentiment: two independent lexicon scorers merged into one record.
//
// ValenceAnalyzer produces a neg/neu/pos distribution plus a compound score
// (rule-based valence with boosters, negation, and emphasis). ToneAnalyzer
// produces polarity and subjectivity from an adjective lexicon. The scorers
// don't share state; their outputs are kept under distinct prefixes so the
// flattened table never has colliding column names.

pub mod tone;
pub mod valence;

use serde::{Deserialize, Serialize};

pub use tone::{ToneAnalyzer, ToneScores};
pub use valence::{ValenceAnalyzer, ValenceScores};

/// Merged output of both sentiment scorers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub valence: ValenceScores,
    pub tone: ToneScores,
}

impl SentimentScores {
    /// Flattened (column name, value) pairs with `valence_` / `tone_` prefixes.
    pub fn columns(&self) -> [(&'static str, f64); 6] {
        [
            ("valence_neg", self.valence.neg),
            ("valence_neu", self.valence.neu),
            ("valence_pos", self.valence.pos),
            ("valence_compound", self.valence.compound),
            ("tone_polarity", self.tone.polarity),
            ("tone_subjectivity", self.tone.subjectivity),
        ]
    }
}

/// Runs both scorers over the same text.
#[derive(Debug, Default)]
pub struct SentimentAnalyzer {
    valence: ValenceAnalyzer,
    tone: ToneAnalyzer,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, text: &str) -> SentimentScores {
        SentimentScores {
            valence: self.valence.polarity_scores(text),
            tone: self.tone.score(text),
        }
    }
}

/// Column names produced by `SentimentScores::columns`, in order.
pub fn column_names() -> Vec<&'static str> {
    SentimentScores::default()
        .columns()
        .iter()
        .map(|(name, _)| *name)
        .collect()
}
