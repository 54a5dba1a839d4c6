// Manipulation category scoring.
//
// Matching is plain substring membership on the lower-cased text, so "now"
// also matches inside "snowfall". Each keyword contributes at most one hit
// no matter how often it occurs: the hit count is the number of distinct
// keywords present, never more than the category's keyword count.

use std::collections::BTreeSet;

use regex_lite::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::lexicon::{ManipulationCategory, SectorPatterns};

/// Maximum number of context snippets kept per category.
const MAX_EXAMPLES: usize = 3;

/// Score for one category on one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    /// Number of distinct keywords found in the text
    pub hits: u32,
    pub matched_keywords: BTreeSet<String>,
    /// hits × category weight
    pub weighted_score: f64,
    /// Up to three (keyword, surrounding text) pairs
    pub examples: Vec<(String, String)>,
}

/// Score every category against `text`, in declaration order.
///
/// `context_window` is the number of characters kept on each side of a
/// keyword match when collecting example snippets.
pub fn score_categories(
    text: &str,
    categories: &[ManipulationCategory],
    context_window: usize,
) -> Vec<CategoryScore> {
    let lower = text.to_lowercase();

    categories
        .iter()
        .map(|category| {
            let matched_keywords: BTreeSet<String> = category
                .keywords
                .iter()
                .filter(|kw| lower.contains(kw.as_str()))
                .cloned()
                .collect();

            let hits = matched_keywords.len() as u32;

            let examples: Vec<(String, String)> = category
                .keywords
                .iter()
                .filter(|kw| matched_keywords.contains(*kw))
                .flat_map(|kw| {
                    context_snippets(text, kw, context_window)
                        .into_iter()
                        .map(move |ctx| (kw.clone(), ctx))
                })
                .take(MAX_EXAMPLES)
                .collect();

            CategoryScore {
                name: category.name.clone(),
                hits,
                matched_keywords,
                weighted_score: hits as f64 * category.weight,
                examples,
            }
        })
        .collect()
}

/// Snippets of `text` around each case-insensitive occurrence of `keyword`.
fn context_snippets(text: &str, keyword: &str, window: usize) -> Vec<String> {
    match context_regex(keyword, window) {
        Some(re) => re
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

fn context_regex(keyword: &str, window: usize) -> Option<Regex> {
    let pattern = format!(
        ".{{0,{window}}}{}.{{0,{window}}}",
        regex_lite::escape(keyword)
    );
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
}

/// Stable argmax: the first item in iteration order that reaches the maximum
/// score wins. Returns `None` for an empty iterator.
///
/// Callers pass categories in the coding scheme's declaration order, so ties
/// resolve to whichever category was declared first.
pub fn dominant<'a, I>(items: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut best: Option<(&'a str, f64)> = None;
    for (name, score) in items {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((name, score)),
        }
    }
    best.map(|(name, _)| name)
}

/// Count non-overlapping occurrences of each sector marker.
///
/// Unlike category scoring this is a frequency count: sector markers are
/// descriptive, not part of the intensity sum.
pub fn sector_marker_counts(text: &str, patterns: &SectorPatterns) -> Vec<(String, u32)> {
    if patterns.unique_markers.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    patterns
        .unique_markers
        .iter()
        .map(|marker| (marker.clone(), lower.matches(marker.as_str()).count() as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, keywords: &[&str], weight: f64) -> ManipulationCategory {
        ManipulationCategory {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
            description: None,
        }
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let cats = vec![category("urgency", &["now"], 2.0)];
        let scores = score_categories("Buy now, now!", &cats, 30);
        assert_eq!(scores[0].hits, 1);
        assert!((scores[0].weighted_score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_substring_match_is_not_word_bounded() {
        let cats = vec![category("urgency", &["now"], 1.0)];
        let scores = score_categories("Fresh snowfall in the Alps", &cats, 30);
        assert_eq!(scores[0].hits, 1);
    }

    #[test]
    fn test_examples_capped_and_contextual() {
        let cats = vec![category("urgency", &["now"], 1.0)];
        let text = "Shop now. Act now. Order now. Buy now.";
        let scores = score_categories(text, &cats, 4);
        assert_eq!(scores[0].examples.len(), MAX_EXAMPLES);
        assert!(scores[0].examples[0].1.contains("now"));
        assert!(scores[0].examples[0].1.len() <= 4 + 3 + 4);
    }

    #[test]
    fn test_keyword_with_regex_metacharacters() {
        let cats = vec![category("price", &["$9.99 (today)"], 1.0)];
        let scores = score_categories("Only $9.99 (today) for members", &cats, 10);
        assert_eq!(scores[0].hits, 1);
        assert_eq!(scores[0].examples.len(), 1);
    }

    #[test]
    fn test_dominant_first_declared_wins_ties() {
        let items = vec![("b", 2.0), ("a", 3.0), ("c", 3.0)];
        assert_eq!(dominant(items), Some("a"));
    }

    #[test]
    fn test_dominant_all_zero_picks_first() {
        let items = vec![("first", 0.0), ("second", 0.0)];
        assert_eq!(dominant(items), Some("first"));
    }

    #[test]
    fn test_dominant_empty() {
        assert_eq!(dominant(Vec::<(&str, f64)>::new()), None);
    }

    #[test]
    fn test_sector_markers_count_frequency() {
        let patterns = SectorPatterns {
            unique_markers: vec!["couture".to_string(), "runway".to_string()],
            ..Default::default()
        };
        let counts = sector_marker_counts("Couture for the runway. Pure couture.", &patterns);
        assert_eq!(
            counts,
            vec![("couture".to_string(), 2), ("runway".to_string(), 1)]
        );
    }
}
