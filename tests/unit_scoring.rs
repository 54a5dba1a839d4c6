// Unit tests for keyword scoring.
//
// Tests the pure scoring functions: distinct-keyword hit counting, weighted
// scores, dominant-category tie-breaking, intensity clamping, and the tier
// boundaries used by reports and charts.

use copyscope::lexicon::{CodingScheme, EmotionCategory, ManipulationCategory};
use copyscope::scoring::{
    dominant, manipulation_intensity, score_categories, score_emotions, IntensityTier,
};

fn category(name: &str, keywords: &[&str], weight: f64) -> ManipulationCategory {
    ManipulationCategory {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        weight,
        description: None,
    }
}

// ============================================================
// Category hits
// ============================================================

#[test]
fn repeated_keyword_is_one_hit() {
    let scheme = CodingScheme::from_json(
        r#"{"manipulation_categories": {"urgency": {"keywords": ["now"], "intensity_weight": 2.0}}}"#,
    )
    .unwrap();
    let scores = score_categories("Buy now. Now! NOW or never.", scheme.manipulation(), 30);
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].hits, 1);
    assert!((scores[0].weighted_score - 2.0).abs() < 1e-10);
}

#[test]
fn hits_never_exceed_keyword_count() {
    let cats = vec![category("scarcity", &["limited", "only", "last"], 1.0)];
    let text = "Limited stock, only a few left, last chance, limited edition, only today";
    let scores = score_categories(text, &cats, 30);
    assert_eq!(scores[0].hits, 3);
    assert!(scores[0].hits as usize <= cats[0].keywords.len());
}

#[test]
fn matching_is_substring_not_word_bounded() {
    let cats = vec![category("urgency", &["now"], 1.0)];
    let scores = score_categories("Fresh snowfall in the mountains", &cats, 30);
    assert_eq!(scores[0].hits, 1);
    assert!(scores[0].matched_keywords.contains("now"));
}

#[test]
fn matching_ignores_case() {
    let cats = vec![category("exclusivity", &["members only"], 1.0)];
    let scores = score_categories("MEMBERS ONLY access", &cats, 30);
    assert_eq!(scores[0].hits, 1);
}

#[test]
fn no_match_scores_zero() {
    let cats = vec![category("fear", &["risk", "danger"], 1.5)];
    let scores = score_categories("A calm and friendly message.", &cats, 30);
    assert_eq!(scores[0].hits, 0);
    assert_eq!(scores[0].weighted_score, 0.0);
    assert!(scores[0].matched_keywords.is_empty());
    assert!(scores[0].examples.is_empty());
}

#[test]
fn empty_text_scores_zero_for_every_category() {
    let cats = vec![
        category("urgency", &["now"], 1.0),
        category("scarcity", &["limited"], 1.0),
    ];
    let scores = score_categories("", &cats, 30);
    assert_eq!(scores.len(), 2);
    assert!(scores.iter().all(|s| s.hits == 0));
}

#[test]
fn examples_capped_at_three_with_context() {
    let cats = vec![category("urgency", &["now"], 1.0)];
    let text = "shop now. act now. buy now. order now. call now.";
    let scores = score_categories(text, &cats, 5);
    assert_eq!(scores[0].examples.len(), 3);
    for (kw, ctx) in &scores[0].examples {
        assert_eq!(kw, "now");
        assert!(ctx.to_lowercase().contains("now"));
        assert!(ctx.chars().count() <= 5 + 3 + 5);
    }
}

#[test]
fn scores_follow_declaration_order() {
    let cats = vec![
        category("zeta", &["z"], 1.0),
        category("alpha", &["a"], 1.0),
    ];
    let scores = score_categories("za", &cats, 30);
    let names: Vec<&str> = scores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
}

// ============================================================
// Dominant selection
// ============================================================

#[test]
fn dominant_ties_resolve_to_first_declared() {
    let cats = vec![
        category("social_proof", &["everyone"], 1.0),
        category("urgency", &["today"], 1.0),
    ];
    let scores = score_categories("Everyone is buying today", &cats, 30);
    let best = dominant(scores.iter().map(|s| (s.name.as_str(), s.weighted_score)));
    assert_eq!(best, Some("social_proof"));
}

#[test]
fn dominant_prefers_higher_weighted_score() {
    let cats = vec![
        category("social_proof", &["everyone"], 1.0),
        category("urgency", &["today"], 3.0),
    ];
    let scores = score_categories("Everyone is buying today", &cats, 30);
    let best = dominant(scores.iter().map(|s| (s.name.as_str(), s.weighted_score)));
    assert_eq!(best, Some("urgency"));
}

#[test]
fn dominant_all_zero_is_first_category() {
    let best = dominant(vec![("a", 0.0), ("b", 0.0), ("c", 0.0)]);
    assert_eq!(best, Some("a"));
}

#[test]
fn dominant_of_nothing_is_none() {
    let empty: Vec<(&str, f64)> = Vec::new();
    assert_eq!(dominant(empty), None);
}

// ============================================================
// Emotions
// ============================================================

#[test]
fn emotion_total_adds_weighted_indicators() {
    let emotions = vec![EmotionCategory {
        name: "joy".to_string(),
        markers: vec!["love".to_string(), "happy".to_string()],
        intensity_indicators: vec!["so".to_string()],
    }];
    let scores = score_emotions("I love it so much", &emotions, 1.5);
    assert_eq!(scores[0].marker_count, 1);
    assert_eq!(scores[0].intensity_count, 1);
    assert!((scores[0].total_score - 2.5).abs() < 1e-10);
}

#[test]
fn emotion_without_markers_scores_zero() {
    let emotions = vec![EmotionCategory {
        name: "fear".to_string(),
        markers: vec!["afraid".to_string()],
        intensity_indicators: vec![],
    }];
    let scores = score_emotions("A sunny afternoon", &emotions, 1.5);
    assert_eq!(scores[0].total_score, 0.0);
}

// ============================================================
// Intensity
// ============================================================

#[test]
fn intensity_is_normalized_sum() {
    let cats = vec![
        category("a", &["x"], 10.0),
        category("b", &["y"], 15.0),
    ];
    let scores = score_categories("x y", &cats, 30);
    let i = manipulation_intensity(&scores, 50.0);
    assert!((i - 0.5).abs() < 1e-10);
}

#[test]
fn intensity_clamps_at_one() {
    let cats = vec![category("a", &["x", "y", "z"], 100.0)];
    let scores = score_categories("x y z", &cats, 30);
    assert_eq!(manipulation_intensity(&scores, 50.0), 1.0);
}

#[test]
fn intensity_with_no_hits_is_zero() {
    let cats = vec![category("a", &["x"], 1.0)];
    let scores = score_categories("nothing here", &cats, 30);
    assert_eq!(manipulation_intensity(&scores, 50.0), 0.0);
}

#[test]
fn intensity_with_bad_normalization_is_zero() {
    let cats = vec![category("a", &["x"], 1.0)];
    let scores = score_categories("x", &cats, 30);
    assert_eq!(manipulation_intensity(&scores, 0.0), 0.0);
    assert_eq!(manipulation_intensity(&scores, -5.0), 0.0);
}

// ============================================================
// IntensityTier::from_intensity: boundary conditions
// ============================================================

#[test]
fn tier_exact_high_threshold_is_medium() {
    assert_eq!(IntensityTier::from_intensity(0.66), IntensityTier::Medium);
}

#[test]
fn tier_just_above_high_threshold() {
    assert_eq!(IntensityTier::from_intensity(0.661), IntensityTier::High);
}

#[test]
fn tier_exact_medium_threshold_is_low() {
    assert_eq!(IntensityTier::from_intensity(0.33), IntensityTier::Low);
}

#[test]
fn tier_just_above_medium_threshold() {
    assert_eq!(IntensityTier::from_intensity(0.331), IntensityTier::Medium);
}

#[test]
fn tier_extremes() {
    assert_eq!(IntensityTier::from_intensity(0.0), IntensityTier::Low);
    assert_eq!(IntensityTier::from_intensity(1.0), IntensityTier::High);
}
