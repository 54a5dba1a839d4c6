// Document analyzer: scores documents and assembles the result table.
//
// analyze_document is a pure function of the document plus the analyzer's
// immutable configuration. analyze_all runs it over a batch sequentially;
// a document that fails is logged and left out of the table, never
// zero-filled.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::corpus::Document;
use crate::emotion::{EmotionClassifier, NoopClassifier};
use crate::lexicon::CodingScheme;
use crate::linguistic::{linguistic_features, HeuristicTagger, PosTagger};
use crate::scoring::{
    dominant, manipulation_intensity, score_categories, score_emotions, sector_marker_counts,
    IntensityTier, ScoringSettings,
};
use crate::sentiment::SentimentAnalyzer;

use super::record::BrandAnalysis;
use super::table::ResultTable;

pub struct Analyzer {
    scheme: CodingScheme,
    settings: ScoringSettings,
    sentiment: SentimentAnalyzer,
    tagger: Box<dyn PosTagger>,
    classifier: Box<dyn EmotionClassifier>,
}

impl Analyzer {
    /// Analyzer with the heuristic tagger and no emotion model.
    pub fn new(scheme: CodingScheme, settings: ScoringSettings) -> Self {
        Self {
            scheme,
            settings,
            sentiment: SentimentAnalyzer::new(),
            tagger: Box::new(HeuristicTagger),
            classifier: Box::new(NoopClassifier),
        }
    }

    pub fn with_classifier(mut self, classifier: Box<dyn EmotionClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn scheme(&self) -> &CodingScheme {
        &self.scheme
    }

    pub fn settings(&self) -> &ScoringSettings {
        &self.settings
    }

    /// Score one document against the coding scheme.
    pub fn analyze_document(&self, doc: &Document) -> Result<BrandAnalysis> {
        let strategies = score_categories(
            &doc.text,
            self.scheme.manipulation(),
            self.settings.context_window,
        );
        let emotions = score_emotions(
            &doc.text,
            self.scheme.emotions(),
            self.settings.indicator_weight,
        );

        let intensity = manipulation_intensity(&strategies, self.settings.intensity_normalization);

        let dominant_strategy =
            dominant(strategies.iter().map(|s| (s.name.as_str(), s.weighted_score)))
                .map(str::to_string);
        let dominant_emotion = dominant(emotions.iter().map(|e| (e.name.as_str(), e.total_score)))
            .map(str::to_string);

        let patterns = self.scheme.sector_patterns(doc.sector.pattern_key());
        let sector_markers = sector_marker_counts(&doc.text, &patterns);

        let model_emotions = self.model_emotions(&doc.text).with_context(|| {
            format!("Emotion classifier failed for {} ({})", doc.brand, doc.sector)
        })?;

        Ok(BrandAnalysis {
            brand: doc.brand.clone(),
            sector: doc.sector,
            text_length: doc.text.chars().count(),
            manipulation_intensity: intensity,
            intensity_tier: IntensityTier::from_intensity(intensity),
            dominant_strategy,
            dominant_emotion,
            strategies,
            emotions,
            sentiment: self.sentiment.score(&doc.text),
            linguistic: linguistic_features(&doc.text, self.tagger.as_ref()),
            sector_markers,
            model_emotions,
        })
    }

    /// Classifier output aligned to its label list. Labels the classifier
    /// didn't return (e.g. for empty text) are reported as 0.0 so every row
    /// carries the same model_* columns.
    fn model_emotions(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let labels = self.classifier.labels();
        if labels.is_empty() {
            return Ok(Vec::new());
        }
        let scores = self.classifier.classify(text)?;
        Ok(labels
            .iter()
            .map(|label| {
                let p = scores
                    .iter()
                    .find(|(l, _)| l == label)
                    .map(|(_, p)| *p)
                    .unwrap_or(0.0);
                (label.to_string(), p)
            })
            .collect())
    }

    /// Analyze a batch of documents into per-brand records. Failed documents
    /// are logged with their brand and skipped.
    pub fn analyze_records(&self, docs: &[Document]) -> Vec<BrandAnalysis> {
        let pb = ProgressBar::new(docs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );

        let mut records = Vec::with_capacity(docs.len());
        for doc in docs {
            match self.analyze_document(doc) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        brand = doc.brand,
                        sector = %doc.sector,
                        error = format!("{e:#}"),
                        "Failed to analyze document, skipping"
                    );
                }
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        if records.len() < docs.len() {
            info!(
                analyzed = records.len(),
                failed = docs.len() - records.len(),
                "Batch finished with failures"
            );
        }
        records
    }

    /// Analyze a batch of documents into a result table, one row per
    /// successfully analyzed document, in input order.
    pub fn analyze_all(&self, docs: &[Document]) -> ResultTable {
        table_from_records(&self.analyze_records(docs))
    }
}

/// Build a table with one row per record.
pub fn table_from_records(records: &[BrandAnalysis]) -> ResultTable {
    let mut table = ResultTable::new();
    for record in records {
        table.push_row(record.cells());
    }
    table
}
