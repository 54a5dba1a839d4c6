// Emotion classifier trait: the swap-ready abstraction.
//
// The keyword emotion scores come from the coding scheme. This trait covers
// the optional model-based classifier that runs alongside them. The default
// is NoopClassifier, which contributes no columns; OnnxEmotionClassifier
// runs a local distilroberta emotion model.

use anyhow::Result;

/// Classifies a text into a probability per emotion label.
pub trait EmotionClassifier: Send + Sync {
    /// Labels this classifier produces, in output-column order.
    fn labels(&self) -> &[&'static str];

    /// (label, probability) pairs for `text`, in `labels()` order.
    /// Returns an empty list for empty text.
    fn classify(&self, text: &str) -> Result<Vec<(String, f64)>>;
}

/// Classifier used when no model is configured. Produces nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClassifier;

impl EmotionClassifier for NoopClassifier {
    fn labels(&self) -> &[&'static str] {
        &[]
    }

    fn classify(&self, _text: &str) -> Result<Vec<(String, f64)>> {
        Ok(Vec::new())
    }
}
