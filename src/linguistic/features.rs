// Per-document linguistic statistics.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pos::{PosTagger, Tag};
use super::tokenize;

/// Second-person and inclusive first-person pronouns counted as reader address.
const PERSONAL_PRONOUNS: &[&str] = &["you", "your", "we", "our", "us"];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinguisticFeatures {
    pub sentence_count: usize,
    pub word_count: usize,
    /// word_count / sentence_count, 0.0 for empty text
    pub avg_sentence_length: f64,
    pub adjective_count: usize,
    pub adverb_count: usize,
    pub verb_count: usize,
    pub exclamation_count: usize,
    pub question_count: usize,
    pub personal_pronoun_count: usize,
}

impl LinguisticFeatures {
    /// Flattened (column name, value) pairs in table order.
    pub fn columns(&self) -> [(&'static str, f64); 9] {
        [
            ("sentence_count", self.sentence_count as f64),
            ("word_count", self.word_count as f64),
            ("avg_sentence_length", self.avg_sentence_length),
            ("adjective_count", self.adjective_count as f64),
            ("adverb_count", self.adverb_count as f64),
            ("verb_count", self.verb_count as f64),
            ("exclamation_count", self.exclamation_count as f64),
            ("question_count", self.question_count as f64),
            ("personal_pronoun_count", self.personal_pronoun_count as f64),
        ]
    }
}

/// Column names produced by `LinguisticFeatures::columns`, in order.
pub fn column_names() -> Vec<&'static str> {
    LinguisticFeatures::default()
        .columns()
        .iter()
        .map(|(name, _)| *name)
        .collect()
}

/// Compute linguistic statistics for one document.
///
/// Never fails: tokenizer errors switch to naive splitting, tagger errors
/// leave the POS counts at zero.
pub fn linguistic_features(text: &str, tagger: &dyn PosTagger) -> LinguisticFeatures {
    let sentences = tokenize::sentences(text).unwrap_or_else(|e| {
        debug!(error = %e, "Sentence tokenizer failed, using naive split");
        tokenize::naive_sentences(text)
    });
    let words = tokenize::words(text).unwrap_or_else(|e| {
        debug!(error = %e, "Word tokenizer failed, using naive split");
        tokenize::naive_words(text)
    });

    let (mut adjective_count, mut adverb_count, mut verb_count) = (0, 0, 0);
    match tagger.tag(&words) {
        Ok(tags) => {
            for tag in tags {
                match tag {
                    Tag::Adjective => adjective_count += 1,
                    Tag::Adverb => adverb_count += 1,
                    Tag::Verb => verb_count += 1,
                    _ => {}
                }
            }
        }
        Err(e) => debug!(error = %e, "POS tagging failed, reporting zero tag counts"),
    }

    let personal_pronoun_count = words
        .iter()
        .filter(|w| PERSONAL_PRONOUNS.contains(&w.to_lowercase().as_str()))
        .count();

    let avg_sentence_length = if sentences.is_empty() {
        0.0
    } else {
        words.len() as f64 / sentences.len() as f64
    };

    LinguisticFeatures {
        sentence_count: sentences.len(),
        word_count: words.len(),
        avg_sentence_length,
        adjective_count,
        adverb_count,
        verb_count,
        exclamation_count: text.matches('!').count(),
        question_count: text.matches('?').count(),
        personal_pronoun_count,
    }
}
