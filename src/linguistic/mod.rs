// Linguistic feature extraction.
//
// Tokenization and part-of-speech tagging are both fallible. When the
// preferred tokenizer rejects a text we fall back to naive splitting; when the
// tagger fails the POS counts are reported as zero. Neither failure is
// propagated to the caller.

pub mod features;
pub mod pos;
pub mod tokenize;

pub use features::{linguistic_features, LinguisticFeatures};
pub use pos::{HeuristicTagger, PosTagger, Tag, TagError};
pub use tokenize::{naive_sentences, naive_words, sentences, words, TokenizeError};
