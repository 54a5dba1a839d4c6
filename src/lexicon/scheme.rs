// Coding scheme loading and validation.
//
// The scheme is a JSON document with three sections:
//
//   manipulation_categories   name -> { keywords, intensity_weight, description }
//                             (or name -> [keywords] for the short form)
//   emotion_categories        name -> { linguistic_markers, intensity_indicators }
//   sector_specific_patterns  sector key -> { unique_markers, dominant_strategies,
//                                             common_emotions }
//
// Only the first section is required. Declaration order is preserved
// (serde_json's preserve_order feature), because dominant-category selection
// breaks ties by that order.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a coding scheme. All of them are fatal for a
/// run: without category definitions there is nothing meaningful to compute.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read coding scheme {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed coding scheme: {0}")]
    Parse(String),

    #[error("invalid category '{category}': {reason}")]
    InvalidCategory { category: String, reason: String },

    #[error("sector '{sector}' references unknown {kind} '{name}'")]
    UnknownReference {
        sector: String,
        kind: &'static str,
        name: String,
    },
}

/// One manipulation strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct ManipulationCategory {
    pub name: String,
    /// Lower-cased trigger keywords, matched as substrings
    pub keywords: Vec<String>,
    /// Multiplier applied to the hit count (default 1.0)
    pub weight: f64,
    pub description: Option<String>,
}

/// One emotion cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionCategory {
    pub name: String,
    pub markers: Vec<String>,
    /// Phrases that signal a stronger form of the emotion; weighted higher
    pub intensity_indicators: Vec<String>,
}

/// Sector-specific expectations and markers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SectorPatterns {
    #[serde(default)]
    pub unique_markers: Vec<String>,
    #[serde(default)]
    pub dominant_strategies: Vec<String>,
    #[serde(default)]
    pub common_emotions: Vec<String>,
}

impl SectorPatterns {
    pub fn is_empty(&self) -> bool {
        self.unique_markers.is_empty()
            && self.dominant_strategies.is_empty()
            && self.common_emotions.is_empty()
    }
}

/// The loaded, validated coding scheme. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct CodingScheme {
    manipulation: Vec<ManipulationCategory>,
    emotions: Vec<EmotionCategory>,
    sector_patterns: Vec<(String, SectorPatterns)>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawManipulation {
    Keywords(Vec<String>),
    Detailed {
        keywords: Vec<String>,
        #[serde(default)]
        intensity_weight: Option<f64>,
        #[serde(default)]
        description: Option<String>,
    },
}

#[derive(Deserialize)]
struct RawEmotion {
    #[serde(default)]
    linguistic_markers: Vec<String>,
    #[serde(default)]
    intensity_indicators: Vec<String>,
}

impl CodingScheme {
    /// Load and validate a coding scheme from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scheme = Self::from_json(&raw)?;
        debug!(
            path = %path.display(),
            strategies = scheme.manipulation.len(),
            emotions = scheme.emotions.len(),
            sectors = scheme.sector_patterns.len(),
            "Loaded coding scheme"
        );
        Ok(scheme)
    }

    /// Parse and validate a coding scheme from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, LexiconError> {
        let root: Value =
            serde_json::from_str(raw).map_err(|e| LexiconError::Parse(e.to_string()))?;
        let root = root
            .as_object()
            .ok_or_else(|| LexiconError::Parse("top level must be an object".to_string()))?;

        let manipulation_section = root
            .get("manipulation_categories")
            .ok_or_else(|| {
                LexiconError::Parse("missing 'manipulation_categories' section".to_string())
            })?
            .as_object()
            .ok_or_else(|| {
                LexiconError::Parse("'manipulation_categories' must be an object".to_string())
            })?;

        let mut manipulation = Vec::with_capacity(manipulation_section.len());
        for (name, value) in manipulation_section {
            manipulation.push(parse_manipulation(name, value)?);
        }

        let mut emotions = Vec::new();
        if let Some(section) = optional_section(root, "emotion_categories")? {
            for (name, value) in section {
                emotions.push(parse_emotion(name, value)?);
            }
        }

        let mut sector_patterns = Vec::new();
        if let Some(section) = optional_section(root, "sector_specific_patterns")? {
            for (key, value) in section {
                let mut patterns: SectorPatterns = serde_json::from_value(value.clone())
                    .map_err(|e| LexiconError::Parse(format!("sector '{key}': {e}")))?;
                patterns.unique_markers = normalize_terms(&patterns.unique_markers);
                sector_patterns.push((key.to_lowercase(), patterns));
            }
        }

        Self::new(manipulation, emotions, sector_patterns)
    }

    /// Build a scheme from already-constructed categories, validating that
    /// every category maps to its own result columns and that sector
    /// patterns only reference declared categories.
    pub fn new(
        manipulation: Vec<ManipulationCategory>,
        emotions: Vec<EmotionCategory>,
        sector_patterns: Vec<(String, SectorPatterns)>,
    ) -> Result<Self, LexiconError> {
        check_column_names(&manipulation, &emotions)?;

        for (sector, patterns) in &sector_patterns {
            for name in &patterns.dominant_strategies {
                if !manipulation.iter().any(|c| &c.name == name) {
                    return Err(LexiconError::UnknownReference {
                        sector: sector.clone(),
                        kind: "strategy",
                        name: name.clone(),
                    });
                }
            }
            for name in &patterns.common_emotions {
                if !emotions.iter().any(|e| &e.name == name) {
                    return Err(LexiconError::UnknownReference {
                        sector: sector.clone(),
                        kind: "emotion",
                        name: name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            manipulation,
            emotions,
            sector_patterns,
        })
    }

    /// Manipulation categories in declaration order.
    pub fn manipulation(&self) -> &[ManipulationCategory] {
        &self.manipulation
    }

    /// Emotion categories in declaration order.
    pub fn emotions(&self) -> &[EmotionCategory] {
        &self.emotions
    }

    /// Patterns for one sector key (e.g. "fashion"). Missing sectors get an
    /// empty pattern set rather than an error.
    pub fn sector_patterns(&self, key: &str) -> SectorPatterns {
        let key = key.to_lowercase();
        self.sector_patterns
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| p.clone())
            .unwrap_or_default()
    }

    /// Sector keys that have patterns, in declaration order.
    pub fn sector_keys(&self) -> impl Iterator<Item = &str> {
        self.sector_patterns.iter().map(|(k, _)| k.as_str())
    }
}

/// Each strategy yields `strat_<name>` and `strat_<name>_weighted`, each
/// emotion `emotion_<name>`. Two categories producing the same column would
/// overwrite each other's cells in the result table.
fn check_column_names(
    manipulation: &[ManipulationCategory],
    emotions: &[EmotionCategory],
) -> Result<(), LexiconError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let columns = manipulation
        .iter()
        .flat_map(|c| {
            [
                (format!("strat_{}", c.name), c.name.as_str()),
                (format!("strat_{}_weighted", c.name), c.name.as_str()),
            ]
        })
        .chain(
            emotions
                .iter()
                .map(|e| (format!("emotion_{}", e.name), e.name.as_str())),
        );

    for (column, owner) in columns {
        if let Some(previous) = seen.insert(column.clone(), owner) {
            return Err(LexiconError::InvalidCategory {
                category: owner.to_string(),
                reason: format!("result column '{column}' is already produced by '{previous}'"),
            });
        }
    }
    Ok(())
}

fn optional_section<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, LexiconError> {
    match root.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(LexiconError::Parse(format!("'{key}' must be an object"))),
    }
}

fn parse_manipulation(name: &str, value: &Value) -> Result<ManipulationCategory, LexiconError> {
    let raw: RawManipulation = serde_json::from_value(value.clone())
        .map_err(|e| LexiconError::Parse(format!("category '{name}': {e}")))?;

    let (keywords, weight, description) = match raw {
        RawManipulation::Keywords(keywords) => (keywords, None, None),
        RawManipulation::Detailed {
            keywords,
            intensity_weight,
            description,
        } => (keywords, intensity_weight, description),
    };

    let weight = weight.unwrap_or(1.0);
    if !weight.is_finite() || weight < 0.0 {
        return Err(LexiconError::InvalidCategory {
            category: name.to_string(),
            reason: format!("intensity_weight must be a non-negative number, got {weight}"),
        });
    }

    Ok(ManipulationCategory {
        name: name.to_string(),
        keywords: validated_terms(name, &keywords)?,
        weight,
        description,
    })
}

fn parse_emotion(name: &str, value: &Value) -> Result<EmotionCategory, LexiconError> {
    let raw: RawEmotion = serde_json::from_value(value.clone())
        .map_err(|e| LexiconError::Parse(format!("emotion '{name}': {e}")))?;

    Ok(EmotionCategory {
        name: name.to_string(),
        markers: validated_terms(name, &raw.linguistic_markers)?,
        intensity_indicators: validated_terms(name, &raw.intensity_indicators)?,
    })
}

/// Lower-case and reject blank terms. A blank term would match every text.
fn validated_terms(category: &str, terms: &[String]) -> Result<Vec<String>, LexiconError> {
    if terms.iter().any(|t| t.trim().is_empty()) {
        return Err(LexiconError::InvalidCategory {
            category: category.to_string(),
            reason: "blank keyword".to_string(),
        });
    }
    Ok(normalize_terms(terms))
}

fn normalize_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| !t.trim().is_empty())
        .collect()
}
