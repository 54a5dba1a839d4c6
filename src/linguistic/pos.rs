// Part-of-speech tagging.
//
// PosTagger is the seam; HeuristicTagger is the built-in implementation. It
// looks tokens up in closed-class word lists first, then falls back to suffix
// rules. It is coarse, but adjective, adverb and verb counts are only used as
// relative density measures across brands scored the same way.

use thiserror::Error;

/// Tokens longer than this are rejected (URLs, base64 blobs, glued text).
pub const MAX_TOKEN_CHARS: usize = 64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("token of {len} chars exceeds tagger limit of {max}")]
    TokenTooLong { len: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Numeral,
}

/// Assigns one tag per token.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Result<Vec<Tag>, TagError>;
}

/// Word-list plus suffix-rule tagger.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTagger;

impl PosTagger for HeuristicTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<Tag>, TagError> {
        tokens
            .iter()
            .map(|token| {
                let len = token.chars().count();
                if len > MAX_TOKEN_CHARS {
                    return Err(TagError::TokenTooLong {
                        len,
                        max: MAX_TOKEN_CHARS,
                    });
                }
                Ok(tag_word(&token.to_lowercase()))
            })
            .collect()
    }
}

fn tag_word(w: &str) -> Tag {
    if w.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') && !w.is_empty() {
        return Tag::Numeral;
    }
    if DETERMINERS.contains(&w) {
        return Tag::Determiner;
    }
    if PRONOUNS.contains(&w) {
        return Tag::Pronoun;
    }
    if PREPOSITIONS.contains(&w) {
        return Tag::Preposition;
    }
    if CONJUNCTIONS.contains(&w) {
        return Tag::Conjunction;
    }
    if VERBS.contains(&w) || w.ends_with("n't") {
        return Tag::Verb;
    }
    if ADVERBS.contains(&w) {
        return Tag::Adverb;
    }
    if ADJECTIVES.contains(&w) {
        return Tag::Adjective;
    }

    if w.len() > 4 && w.ends_with("ly") && !LY_NOT_ADVERB.contains(&w) {
        return Tag::Adverb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| w.len() > s.len() + 2 && w.ends_with(s)) {
        return Tag::Adjective;
    }
    if VERB_SUFFIXES.iter().any(|s| w.len() > s.len() + 2 && w.ends_with(s)) {
        return Tag::Verb;
    }
    Tag::Noun
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "any", "some", "no",
    "all", "both", "either", "neither",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "you", "your", "yours", "yourself", "we", "us", "our", "ours",
    "he", "him", "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs",
    "who", "whom", "whose", "what", "which",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "from", "to", "of", "into", "onto", "about",
    "over", "under", "between", "through", "during", "without", "within", "after", "before",
    "across", "against", "among", "around", "behind", "beyond", "near", "per", "since",
    "until", "upon", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "because", "although", "though", "while", "if",
    "unless", "whether",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do",
    "does", "did", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must", "get", "gets", "got", "buy", "shop", "order", "try", "discover", "join", "feel",
    "look", "make", "makes", "made", "give", "gives", "take", "takes", "see", "save", "start",
    "love", "need", "want", "know", "find", "let", "go", "come", "keep", "become", "wear",
    "train", "grab", "claim", "unlock", "explore", "act", "hurry", "miss", "transform",
    "reveal", "protect", "apply", "glow", "move", "run", "lift",
];

const ADVERBS: &[&str] = &[
    "now", "today", "very", "too", "so", "just", "only", "never", "always", "often", "soon",
    "here", "there", "again", "already", "still", "even", "ever", "also", "well", "almost",
    "instantly", "forever", "not", "more", "most", "less", "least", "fast", "together",
];

const ADJECTIVES: &[&str] = &[
    "new", "best", "better", "good", "great", "free", "exclusive", "limited", "last",
    "perfect", "beautiful", "bold", "soft", "smooth", "strong", "fresh", "pure", "rare",
    "real", "ultimate", "premium", "clean", "bright", "young", "old", "big", "small", "high",
    "low", "full", "easy", "hard", "first", "own", "true", "whole", "clear", "deep", "dry",
    "light", "iconic", "radiant", "elite", "flawless", "ageless", "timeless",
];

/// Words ending in -ly that aren't adverbs.
const LY_NOT_ADVERB: &[&str] = &["family", "supply", "apply", "reply", "rally", "italy", "jelly", "belly"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ful", "ous", "ive", "able", "ible", "less", "ical", "ic", "ish", "est", "al", "ant", "ent",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ate", "ing", "ed", "en"];

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(words: &[&str]) -> Vec<Tag> {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        HeuristicTagger.tag(&tokens).unwrap()
    }

    #[test]
    fn test_closed_classes() {
        assert_eq!(
            tags(&["the", "you", "with", "and", "is"]),
            vec![
                Tag::Determiner,
                Tag::Pronoun,
                Tag::Preposition,
                Tag::Conjunction,
                Tag::Verb
            ]
        );
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(
            tags(&["Quickly", "gorgeous", "revitalize", "serum", "family"]),
            vec![Tag::Adverb, Tag::Adjective, Tag::Verb, Tag::Noun, Tag::Noun]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tags(&["50", "9.99"]), vec![Tag::Numeral, Tag::Numeral]);
    }

    #[test]
    fn test_overlong_token_fails() {
        let tokens = vec!["ok".to_string(), "x".repeat(MAX_TOKEN_CHARS + 1)];
        assert_eq!(
            HeuristicTagger.tag(&tokens),
            Err(TagError::TokenTooLong {
                len: MAX_TOKEN_CHARS + 1,
                max: MAX_TOKEN_CHARS
            })
        );
    }
}
