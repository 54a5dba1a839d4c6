// Rule-based valence scorer.
//
// Each lexicon word carries a valence on a -4..4 scale. Word valences are
// adjusted by preceding boosters/dampeners, flipped by nearby negations,
// emphasized when written in caps, and re-weighted around "but". The sum is
// squashed into a compound score in [-1, 1]; the per-word contributions are
// also split into neg/neu/pos proportions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Increment added by a booster word ("very") and removed by a dampener ("slightly").
const BOOSTER_INCR: f64 = 0.293;
/// Extra valence for an all-caps sentiment word in mixed-case text.
const CAPS_INCR: f64 = 0.733;
/// Multiplier applied to a word preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Compound normalization constant.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Emphasis per exclamation mark, counted up to four.
const EXCLAMATION_INCR: f64 = 0.292;
/// How many preceding tokens are inspected for boosters and negations.
const LOOKBACK: usize = 3;

/// neg/neu/pos proportions (summing to 1 when any token was scored) and the
/// normalized compound score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValenceScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone)]
pub struct ValenceAnalyzer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for ValenceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ValenceAnalyzer {
    pub fn new() -> Self {
        let lexicon = VALENCE_LEXICON
            .iter()
            .map(|(w, v)| (w.to_string(), *v))
            .collect();

        let boosters = BOOSTERS
            .iter()
            .map(|w| (w.to_string(), BOOSTER_INCR))
            .chain(DAMPENERS.iter().map(|w| (w.to_string(), -BOOSTER_INCR)))
            .collect();

        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self {
            lexicon,
            boosters,
            negations,
        }
    }

    /// Score a text. Empty or sentiment-free text scores all zeros except
    /// `neu`, which is 1.0 when there were tokens and 0.0 when there were none.
    pub fn polarity_scores(&self, text: &str) -> ValenceScores {
        let raw_tokens: Vec<&str> = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|t| !t.is_empty())
            .collect();

        if raw_tokens.is_empty() {
            return ValenceScores::default();
        }

        let lowered: Vec<String> = raw_tokens.iter().map(|t| t.to_lowercase()).collect();
        let mixed_case = has_mixed_case(&raw_tokens);

        let mut sentiments: Vec<f64> = Vec::with_capacity(lowered.len());
        for (i, word) in lowered.iter().enumerate() {
            if self.boosters.contains_key(word) {
                sentiments.push(0.0);
                continue;
            }
            let Some(&base) = self.lexicon.get(word) else {
                sentiments.push(0.0);
                continue;
            };

            let mut valence = base;
            if mixed_case && is_shouted(raw_tokens[i]) {
                valence += CAPS_INCR * valence.signum();
            }

            for distance in 1..=LOOKBACK.min(i) {
                let prev = &lowered[i - distance];
                if let Some(&incr) = self.boosters.get(prev) {
                    let damping = match distance {
                        1 => 1.0,
                        2 => 0.95,
                        _ => 0.9,
                    };
                    valence += incr * damping * valence.signum();
                }
            }

            if (1..=LOOKBACK.min(i)).any(|d| self.is_negation(&lowered[i - d])) {
                valence *= NEGATION_SCALAR;
            }

            sentiments.push(valence);
        }

        apply_but_shift(&lowered, &mut sentiments);

        let mut sum: f64 = sentiments.iter().sum();
        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(4) as f64;
            sum += exclamations * EXCLAMATION_INCR * sum.signum();
        }

        let compound = normalize(sum);
        let (neg, neu, pos) = proportions(&sentiments);

        ValenceScores {
            neg: round3(neg),
            neu: round3(neu),
            pos: round3(pos),
            compound: round4(compound),
        }
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }
}

/// Words before "but" are halved, words after are amplified.
fn apply_but_shift(words: &[String], sentiments: &mut [f64]) {
    if let Some(but_idx) = words.iter().position(|w| w == "but") {
        for (i, s) in sentiments.iter_mut().enumerate() {
            if i < but_idx {
                *s *= 0.5;
            } else if i > but_idx {
                *s *= 1.5;
            }
        }
    }
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

fn proportions(sentiments: &[f64]) -> (f64, f64, f64) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    let total = pos_sum + neg_sum.abs() + neu_count;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    (neg_sum.abs() / total, neu_count / total, pos_sum / total)
}

fn has_mixed_case(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_shouted(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn is_shouted(token: &str) -> bool {
    token.chars().filter(|c| c.is_alphabetic()).count() > 1
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}

const BOOSTERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fully",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "most",
    "more",
    "particularly",
    "purely",
    "really",
    "remarkably",
    "so",
    "super",
    "thoroughly",
    "totally",
    "truly",
    "ultra",
    "utterly",
    "very",
];

const DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
];

const NEGATIONS: &[&str] = &[
    "aint", "cannot", "cant", "dont", "doesnt", "didnt", "isnt", "arent", "wasnt", "werent",
    "never", "neither", "nor", "no", "nobody", "none", "nope", "not", "nothing", "nowhere",
    "without", "wont", "wouldnt", "shouldnt", "couldnt",
];

const VALENCE_LEXICON: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bold", 1.1),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charming", 2.8),
    ("clean", 1.7),
    ("comfort", 1.5),
    ("comfortable", 2.3),
    ("confidence", 2.3),
    ("confident", 2.2),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("dream", 1.0),
    ("easy", 1.9),
    ("effective", 2.1),
    ("elegant", 2.1),
    ("empower", 1.9),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("exceptional", 2.3),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("free", 2.3),
    ("fresh", 1.3),
    ("fun", 2.3),
    ("gentle", 1.9),
    ("glow", 1.5),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("health", 1.2),
    ("healthy", 1.7),
    ("hope", 1.9),
    ("ideal", 2.4),
    ("incredible", 2.5),
    ("inspire", 2.4),
    ("inspired", 2.2),
    ("joy", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("luxurious", 2.0),
    ("luxury", 2.0),
    ("nice", 1.8),
    ("nourish", 1.4),
    ("perfect", 2.7),
    ("pleasure", 2.7),
    ("powerful", 1.8),
    ("premium", 1.2),
    ("pride", 1.4),
    ("proud", 2.1),
    ("pure", 1.6),
    ("radiant", 2.1),
    ("recommended", 1.5),
    ("refresh", 1.6),
    ("reliable", 1.8),
    ("safe", 1.9),
    ("smooth", 1.1),
    ("soft", 1.0),
    ("special", 1.7),
    ("strong", 2.3),
    ("stunning", 2.9),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("timeless", 1.3),
    ("transform", 1.4),
    ("trust", 2.3),
    ("trusted", 2.1),
    ("unique", 1.7),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("youthful", 1.3),
    // negative
    ("afraid", -2.0),
    ("aging", -0.9),
    ("anxiety", -2.3),
    ("anxious", -1.0),
    ("ashamed", -2.1),
    ("bad", -2.5),
    ("damage", -2.2),
    ("damaged", -1.9),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dull", -1.7),
    ("embarrassed", -1.5),
    ("fail", -2.5),
    ("failure", -2.3),
    ("fear", -2.2),
    ("flaw", -1.6),
    ("guilt", -2.2),
    ("guilty", -1.8),
    ("harm", -2.5),
    ("harmful", -2.3),
    ("hate", -2.7),
    ("imperfection", -1.2),
    ("insecure", -1.8),
    ("irritation", -1.8),
    ("lose", -1.3),
    ("loss", -1.3),
    ("miss", -0.6),
    ("pain", -2.3),
    ("problem", -1.7),
    ("regret", -1.8),
    ("risk", -1.1),
    ("sad", -2.1),
    ("shame", -2.1),
    ("stress", -1.8),
    ("struggle", -1.4),
    ("threat", -2.4),
    ("tired", -1.9),
    ("toxic", -2.4),
    ("ugly", -3.1),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrinkles", -0.8),
];
