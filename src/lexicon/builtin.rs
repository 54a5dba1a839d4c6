// Built-in basic lexicon, used when no coding scheme file is configured.
//
// Seven strategies, unit weights, no emotion categories and no sector
// patterns. Good enough for a first pass over a corpus; the JSON coding
// scheme is where the real categories live.

use super::scheme::{CodingScheme, ManipulationCategory};

const BASIC_LEXICON: [(&str, &[&str]); 7] = [
    (
        "urgency",
        &[
            "now",
            "today",
            "limited",
            "hurry",
            "quick",
            "fast",
            "immediately",
            "last chance",
            "ending soon",
            "don't miss",
        ],
    ),
    (
        "scarcity",
        &[
            "exclusive",
            "limited edition",
            "rare",
            "unique",
            "only",
            "few left",
            "selling out",
            "almost gone",
        ],
    ),
    (
        "authority",
        &[
            "expert",
            "proven",
            "scientific",
            "clinical",
            "dermatologist",
            "recommended",
            "certified",
            "award-winning",
        ],
    ),
    (
        "social_proof",
        &[
            "bestseller",
            "popular",
            "trending",
            "everyone",
            "thousands",
            "loved by",
            "favorite",
            "must-have",
        ],
    ),
    (
        "emotion_fear",
        &[
            "worried",
            "concerned",
            "damage",
            "protect",
            "prevent",
            "risk",
            "danger",
            "harmful",
            "threat",
        ],
    ),
    (
        "emotion_aspiration",
        &[
            "dream",
            "perfect",
            "ideal",
            "transform",
            "achieve",
            "success",
            "luxury",
            "elite",
            "prestige",
        ],
    ),
    (
        "inadequacy",
        &[
            "problem",
            "issue",
            "concern",
            "flaw",
            "imperfection",
            "aging",
            "wrinkles",
            "tired",
            "dull",
        ],
    ),
];

impl CodingScheme {
    /// The basic seven-strategy lexicon.
    pub fn builtin() -> Self {
        let manipulation = BASIC_LEXICON
            .iter()
            .map(|(name, keywords)| ManipulationCategory {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                weight: 1.0,
                description: None,
            })
            .collect();

        // No sector patterns, so validation cannot fail.
        Self::new(manipulation, Vec::new(), Vec::new()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_seven_strategies_in_order() {
        let scheme = CodingScheme::builtin();
        let names: Vec<&str> = scheme.manipulation().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "urgency",
                "scarcity",
                "authority",
                "social_proof",
                "emotion_fear",
                "emotion_aspiration",
                "inadequacy"
            ]
        );
        assert!(scheme.emotions().is_empty());
    }
}
