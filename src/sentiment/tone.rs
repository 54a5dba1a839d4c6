// Polarity / subjectivity scorer.
//
// Averages (polarity, subjectivity) pairs for every lexicon word found in
// the text. An intensifier directly before a word scales both values; a
// negation within the two preceding words flips and halves the polarity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const NEGATION_SCALAR: f64 = -0.5;

/// polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ToneScores {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone)]
pub struct ToneAnalyzer {
    /// word -> (polarity, subjectivity)
    lexicon: HashMap<&'static str, (f64, f64)>,
    /// word -> multiplier
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for ToneAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: TONE_LEXICON.iter().map(|(w, p, s)| (*w, (*p, *s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    pub fn score(&self, text: &str) -> ToneScores {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();

        let mut assessments: Vec<(f64, f64)> = Vec::new();
        for (i, word) in words.iter().enumerate() {
            let Some(&(mut polarity, mut subjectivity)) = self.lexicon.get(word.as_str()) else {
                continue;
            };

            if i > 0 {
                if let Some(&factor) = self.intensifiers.get(words[i - 1].as_str()) {
                    polarity *= factor;
                    subjectivity *= factor;
                }
            }

            let negated = (1..=2.min(i)).any(|d| is_negation(&words[i - d]));
            if negated {
                polarity *= NEGATION_SCALAR;
            }

            assessments.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
        }

        if assessments.is_empty() {
            return ToneScores::default();
        }

        let n = assessments.len() as f64;
        ToneScores {
            polarity: assessments.iter().map(|(p, _)| p).sum::<f64>() / n,
            subjectivity: assessments.iter().map(|(_, s)| s).sum::<f64>() / n,
        }
    }
}

fn is_negation(word: &str) -> bool {
    matches!(word, "not" | "no" | "never" | "without") || word.ends_with("n't")
}

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.6),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.4),
    ("totally", 1.4),
    ("truly", 1.3),
    ("ultra", 1.4),
    ("very", 1.3),
    ("quite", 1.1),
    ("slightly", 0.6),
    ("somewhat", 0.7),
];

const TONE_LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("bad", -0.7, 0.667),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("bold", 0.333, 0.667),
    ("boring", -1.0, 1.0),
    ("bright", 0.7, 0.9),
    ("cheap", 0.4, 0.7),
    ("clean", 0.367, 0.683),
    ("clinical", 0.0, 0.3),
    ("comfortable", 0.4, 0.75),
    ("confident", 0.5, 0.667),
    ("dangerous", -0.6, 0.9),
    ("delicate", 0.2, 0.6),
    ("dull", -0.3, 0.5),
    ("easy", 0.433, 0.833),
    ("effective", 0.6, 0.8),
    ("elegant", 0.5, 0.75),
    ("essential", 0.0, 0.3),
    ("exceptional", 0.667, 1.0),
    ("exclusive", 0.0, 0.8),
    ("expensive", -0.5, 0.7),
    ("extraordinary", 0.333, 0.667),
    ("fabulous", 0.4, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("fresh", 0.3, 0.5),
    ("gentle", 0.4, 0.6),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("harmful", -0.5, 0.6),
    ("healthy", 0.5, 0.5),
    ("ideal", 0.9, 0.9),
    ("incredible", 0.9, 0.9),
    ("innovative", 0.5, 0.75),
    ("iconic", 0.3, 0.6),
    ("lightweight", 0.2, 0.4),
    ("limited", -0.071, 0.143),
    ("lovely", 0.5, 0.75),
    ("luxurious", 0.5, 0.8),
    ("modern", 0.2, 0.3),
    ("natural", 0.1, 0.4),
    ("new", 0.136, 0.455),
    ("nice", 0.6, 1.0),
    ("old", 0.1, 0.2),
    ("perfect", 1.0, 1.0),
    ("powerful", 0.3, 1.0),
    ("premium", 0.3, 0.6),
    ("proven", 0.2, 0.4),
    ("pure", 0.214, 0.5),
    ("radiant", 0.5, 0.8),
    ("rare", 0.3, 0.9),
    ("sad", -0.5, 1.0),
    ("safe", 0.5, 0.5),
    ("sensitive", 0.1, 0.5),
    ("simple", 0.0, 0.357),
    ("smooth", 0.4, 0.7),
    ("soft", 0.1, 0.3),
    ("special", 0.357, 0.571),
    ("strong", 0.433, 0.733),
    ("stunning", 0.5, 1.0),
    ("stylish", 0.4, 0.7),
    ("terrible", -1.0, 1.0),
    ("timeless", 0.2, 0.5),
    ("tired", -0.4, 0.7),
    ("ugly", -0.7, 1.0),
    ("unique", 0.375, 1.0),
    ("weak", -0.375, 0.625),
    ("wonderful", 1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
];
