// Local ONNX emotion classifier using j-hartmann/emotion-english-distilroberta-base.
//
// Runs entirely on the local CPU. Long documents are cut into 512-character
// chunks; the first five chunks are classified in one batch and their
// per-label probabilities averaged.
//
// Output: 7 Ekman-style emotion classes, softmax over logits.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::traits::EmotionClassifier;
use super::{MODEL_FILE, TOKENIZER_FILE};

/// Labels output by the model, in the order the model returns them.
pub const LABEL_ORDER: [&str; 7] = [
    "anger", "disgust", "fear", "joy", "neutral", "sadness", "surprise",
];

/// Characters per chunk.
const CHUNK_CHARS: usize = 512;
/// Chunks classified per document; the rest of a long document is ignored.
const MAX_CHUNKS: usize = 5;
/// RoBERTa pad token id.
const PAD_ID: i64 = 1;

pub struct OnnxEmotionClassifier {
    // ort::Session::run takes &mut self
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl OnnxEmotionClassifier {
    /// Load the ONNX model and tokenizer from `model_dir`.
    ///
    /// Expects `model.onnx` and `tokenizer.json` to exist there.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);

        if !model_path.exists() {
            anyhow::bail!(
                "Model file not found: {}\nExport the emotion model to ONNX and place it there.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!("Tokenizer file not found: {}", tokenizer_path.display());
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        debug!("Loaded ONNX emotion model from {}", model_dir.display());

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }

    /// Run one forward pass over all chunks and return softmaxed rows.
    fn infer(&self, chunks: &[String]) -> Result<Vec<Vec<f64>>> {
        let encodings: Vec<_> = chunks
            .iter()
            .map(|t| {
                self.tokenizer
                    .encode(t.as_str(), true)
                    .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
            })
            .collect::<Result<Vec<_>>>()?;

        let batch_size = encodings.len();
        let max_len = encodings.iter().map(|e| e.get_ids().len()).max().unwrap_or(0);

        // Shape: [batch_size, max_len], right-padded
        let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
        let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

        for enc in &encodings {
            let ids = enc.get_ids();
            input_ids_flat.extend(ids.iter().map(|&id| id as i64));
            attention_mask_flat.extend(enc.get_attention_mask().iter().map(|&m| m as i64));
            for _ in ids.len()..max_len {
                input_ids_flat.push(PAD_ID);
                attention_mask_flat.push(0);
            }
        }

        let shape = [batch_size as i64, max_len as i64];
        let input_ids_tensor = Tensor::from_array((shape, input_ids_flat))
            .context("Failed to create input_ids tensor")?;
        let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat))
            .context("Failed to create attention_mask tensor")?;

        let logits = {
            let mut session = self
                .session
                .lock()
                .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

            let outputs = session
                .run(ort::inputs! {
                    "input_ids" => input_ids_tensor,
                    "attention_mask" => attention_mask_tensor
                })
                .context("ONNX inference failed")?;

            // Output shape: [batch_size, 7]
            let (_out_shape, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .context("Failed to extract output tensor")?;
            data.to_vec()
        };

        if logits.len() != batch_size * LABEL_ORDER.len() {
            anyhow::bail!(
                "Unexpected model output size {} (expected {} x {})",
                logits.len(),
                batch_size,
                LABEL_ORDER.len()
            );
        }

        Ok(logits
            .chunks(LABEL_ORDER.len())
            .map(|row| softmax(&row.iter().map(|&x| x as f64).collect::<Vec<_>>()))
            .collect())
    }
}

impl EmotionClassifier for OnnxEmotionClassifier {
    fn labels(&self) -> &[&'static str] {
        &LABEL_ORDER
    }

    fn classify(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let chunks = chunk_text(text, CHUNK_CHARS, MAX_CHUNKS);
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self.infer(&chunks)?;
        let averaged = average_rows(&rows, LABEL_ORDER.len());

        debug!(
            chunks = chunks.len(),
            text_preview = %crate::output::truncate_chars(text, 50),
            "ONNX classified text"
        );

        Ok(LABEL_ORDER
            .iter()
            .zip(averaged)
            .map(|(label, p)| (label.to_string(), p))
            .collect())
    }
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Split on character (not byte) boundaries, keeping at most `max_chunks`.
/// Whitespace-only chunks are skipped.
fn chunk_text(text: &str, chunk_chars: usize, max_chunks: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_chars.max(1))
        .map(|c| c.iter().collect::<String>())
        .filter(|c| !c.trim().is_empty())
        .take(max_chunks)
        .collect()
}

fn average_rows(rows: &[Vec<f64>], width: usize) -> Vec<f64> {
    let mut sums = vec![0.0; width];
    for row in rows {
        for (sum, v) in sums.iter_mut().zip(row) {
            *sum += v;
        }
    }
    let n = rows.len().max(1) as f64;
    sums.into_iter().map(|s| s / n).collect()
}
