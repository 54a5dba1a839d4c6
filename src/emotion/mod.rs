// Model-based emotion classification: trait-based abstraction.
//
// The EmotionClassifier trait defines the interface. The backend is picked
// once from config: `none` gives NoopClassifier, `onnx` loads
// OnnxEmotionClassifier from the model directory. Model files are stored in
// a platform data directory (~/.local/share/copyscope/models/ on Linux).

pub mod onnx;
pub mod traits;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::EmotionBackend;

pub use onnx::OnnxEmotionClassifier;
pub use traits::{EmotionClassifier, NoopClassifier};

const MODEL_FILE: &str = "model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";

/// Returns the default directory for storing model files.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("copyscope")
        .join("models")
}

/// Check whether both required model files exist.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join(MODEL_FILE).exists() && dir.join(TOKENIZER_FILE).exists()
}

/// Build the configured classifier.
pub fn build_classifier(
    backend: EmotionBackend,
    model_dir: &Path,
) -> Result<Box<dyn EmotionClassifier>> {
    match backend {
        EmotionBackend::None => Ok(Box::new(NoopClassifier)),
        EmotionBackend::Onnx => Ok(Box::new(OnnxEmotionClassifier::load(model_dir)?)),
    }
}
