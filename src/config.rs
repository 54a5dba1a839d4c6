use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::corpus::Sector;
use crate::lexicon::CodingScheme;
use crate::scoring::ScoringSettings;

/// Which model-based emotion classifier to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionBackend {
    /// No model (default): keyword emotion scores only
    None,
    /// Local ONNX distilroberta emotion model
    Onnx,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every path
/// the pipeline touches comes from here; nothing reads the environment later.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding one subdirectory per sector
    pub data_dir: PathBuf,
    /// JSON coding scheme; None means the built-in basic lexicon
    pub coding_scheme: Option<PathBuf>,
    /// Where CSV, Markdown and PNG outputs are written
    pub results_dir: PathBuf,
    /// Sectors to analyze, in order
    pub sectors: Vec<Sector>,
    pub scoring: ScoringSettings,
    /// Which emotion classifier to run (default: None)
    pub emotion_backend: EmotionBackend,
    /// Directory containing the ONNX model files
    pub model_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default. Values that are set but unparseable are
    /// an error rather than silently falling back.
    pub fn load() -> Result<Self> {
        let emotion_backend = match env::var("COPYSCOPE_EMOTION_MODEL").as_deref() {
            Ok("onnx") => EmotionBackend::Onnx,
            Ok("none") | Ok("") | Err(_) => EmotionBackend::None,
            Ok(other) => anyhow::bail!(
                "COPYSCOPE_EMOTION_MODEL must be 'none' or 'onnx', got '{other}'"
            ),
        };

        let sectors = match env::var("COPYSCOPE_SECTORS") {
            Ok(list) if !list.trim().is_empty() => parse_sectors(&list)?,
            _ => Sector::ALL.to_vec(),
        };

        let defaults = ScoringSettings::default();
        let scoring = ScoringSettings {
            intensity_normalization: parse_var(
                "COPYSCOPE_INTENSITY_NORMALIZATION",
                defaults.intensity_normalization,
            )?,
            context_window: parse_var("COPYSCOPE_CONTEXT_WINDOW", defaults.context_window)?,
            indicator_weight: parse_var("COPYSCOPE_INDICATOR_WEIGHT", defaults.indicator_weight)?,
        };

        let model_dir = env::var("COPYSCOPE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::emotion::default_model_dir());

        Ok(Self {
            data_dir: env::var("COPYSCOPE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./docs/materials")),
            coding_scheme: env::var("COPYSCOPE_CODING_SCHEME")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            results_dir: env::var("COPYSCOPE_RESULTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./analysis/results")),
            sectors,
            scoring,
            emotion_backend,
            model_dir,
        })
    }

    /// Load the configured coding scheme, or the built-in lexicon when none
    /// is configured. A configured but broken scheme is fatal.
    pub fn require_scheme(&self) -> Result<CodingScheme> {
        match &self.coding_scheme {
            Some(path) => CodingScheme::load(path)
                .with_context(|| format!("Invalid coding scheme {}", path.display())),
            None => Ok(CodingScheme::builtin()),
        }
    }

    /// Check that the scoring constants are usable.
    pub fn require_scoring(&self) -> Result<()> {
        let n = self.scoring.intensity_normalization;
        if !n.is_finite() || n <= 0.0 {
            anyhow::bail!("COPYSCOPE_INTENSITY_NORMALIZATION must be a positive number, got {n}");
        }
        let w = self.scoring.indicator_weight;
        if !w.is_finite() || w < 0.0 {
            anyhow::bail!("COPYSCOPE_INDICATOR_WEIGHT must be a non-negative number, got {w}");
        }
        Ok(())
    }

    /// Validate that the chosen emotion backend has what it needs.
    /// For ONNX: model files must exist in the model directory.
    pub fn require_classifier(&self) -> Result<()> {
        match self.emotion_backend {
            EmotionBackend::None => Ok(()),
            EmotionBackend::Onnx => {
                if !crate::emotion::model_files_present(&self.model_dir) {
                    anyhow::bail!(
                        "ONNX emotion model files not found in {}\n\
                         Place model.onnx and tokenizer.json there, or set \
                         COPYSCOPE_EMOTION_MODEL=none.",
                        self.model_dir.display()
                    );
                }
                Ok(())
            }
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value '{raw}'")),
        _ => Ok(default),
    }
}

/// Parse a comma-separated sector list, keeping order and dropping repeats.
pub fn parse_sectors(list: &str) -> Result<Vec<Sector>> {
    let mut sectors = Vec::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let sector: Sector = part.parse().context("COPYSCOPE_SECTORS")?;
        if !sectors.contains(&sector) {
            sectors.push(sector);
        }
    }
    if sectors.is_empty() {
        anyhow::bail!("COPYSCOPE_SECTORS lists no sectors");
    }
    Ok(sectors)
}
