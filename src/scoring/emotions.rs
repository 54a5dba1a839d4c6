// Emotion keyword scoring.
//
// Each emotion has plain markers and intensity indicators. Both are counted
// by distinct-term presence; indicators are multiplied by the configured
// indicator weight before being added to the total.

use serde::{Deserialize, Serialize};

use crate::lexicon::EmotionCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub name: String,
    pub marker_count: u32,
    pub intensity_count: u32,
    /// marker_count + intensity_count × indicator weight
    pub total_score: f64,
}

/// Score every emotion against `text`, in declaration order.
pub fn score_emotions(
    text: &str,
    categories: &[EmotionCategory],
    indicator_weight: f64,
) -> Vec<EmotionScore> {
    let lower = text.to_lowercase();

    categories
        .iter()
        .map(|emotion| {
            let marker_count = count_present(&lower, &emotion.markers);
            let intensity_count = count_present(&lower, &emotion.intensity_indicators);
            EmotionScore {
                name: emotion.name.clone(),
                marker_count,
                intensity_count,
                total_score: marker_count as f64 + intensity_count as f64 * indicator_weight,
            }
        })
        .collect()
}

fn count_present(lower: &str, terms: &[String]) -> u32 {
    terms.iter().filter(|t| lower.contains(t.as_str())).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators_weighted_higher() {
        let emotions = vec![EmotionCategory {
            name: "fear".to_string(),
            markers: vec!["afraid".to_string(), "risk".to_string()],
            intensity_indicators: vec!["terrifying".to_string()],
        }];
        let scores = score_emotions("A terrifying risk. Be afraid.", &emotions, 1.5);
        assert_eq!(scores[0].marker_count, 2);
        assert_eq!(scores[0].intensity_count, 1);
        assert!((scores[0].total_score - 3.5).abs() < f64::EPSILON);
    }
}
