// Composition tests: verifying that the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   text files -> loader -> analyzer -> table -> CSV / reports / charts
// against a temporary data directory. No network and no model files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use chrono::NaiveDate;

use copyscope::analysis::Analyzer;
use copyscope::config::{Config, EmotionBackend};
use copyscope::corpus::{load_documents, load_sector, Document, Sector};
use copyscope::emotion::EmotionClassifier;
use copyscope::lexicon::CodingScheme;
use copyscope::pipeline::{self, OutputPaths};
use copyscope::scoring::ScoringSettings;

const SCHEME: &str = r#"{
    "manipulation_categories": {
        "urgency": {"keywords": ["now", "today", "hurry"], "intensity_weight": 2.0},
        "insecurity": {"keywords": ["flaws", "not enough"], "intensity_weight": 1.5},
        "social_proof": ["everyone", "bestselling"]
    },
    "emotion_categories": {
        "fear": {"linguistic_markers": ["miss out", "worry"], "intensity_indicators": ["never"]},
        "joy": {"linguistic_markers": ["love", "happy"]}
    },
    "sector_specific_patterns": {
        "fashion": {
            "unique_markers": ["style", "trend"],
            "dominant_strategies": ["social_proof"],
            "common_emotions": ["joy"]
        },
        "skincare": {
            "unique_markers": ["glow"],
            "dominant_strategies": ["insecurity"],
            "common_emotions": ["fear"]
        }
    }
}"#;

fn write_brand(root: &Path, sector: Sector, brand: &str, text: &str) {
    let dir = root.join(sector.as_str());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{brand}.txt")), text).unwrap();
}

fn seed_corpus(root: &Path) {
    write_brand(
        root,
        Sector::Fashion,
        "Aurelia",
        "Everyone is wearing this style. Hurry, the trend ends today! You will love it.",
    );
    write_brand(
        root,
        Sector::Fashion,
        "Birch",
        "Simple linen shirts, cut in Portugal. Made to last.",
    );
    write_brand(
        root,
        Sector::SkincareCosmetics,
        "Lumen",
        "Hide your flaws now. Don't miss out on the glow you deserve. Never worry again.",
    );
}

fn config_for(data_dir: &Path, results_dir: &Path) -> Config {
    Config {
        data_dir: data_dir.to_path_buf(),
        coding_scheme: None,
        results_dir: results_dir.to_path_buf(),
        sectors: Sector::ALL.to_vec(),
        scoring: ScoringSettings::default(),
        emotion_backend: EmotionBackend::None,
        model_dir: data_dir.join("models"),
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// Classifier that fails on any text mentioning "linen".
struct PickyClassifier;

impl EmotionClassifier for PickyClassifier {
    fn labels(&self) -> &[&'static str] {
        &["joy", "anger"]
    }

    fn classify(&self, text: &str) -> Result<Vec<(String, f64)>> {
        if text.contains("linen") {
            bail!("model rejected input");
        }
        Ok(vec![("joy".to_string(), 0.75)])
    }
}

// ============================================================
// Loader
// ============================================================

#[test]
fn missing_sector_directory_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let texts = load_sector(&dir.path().join("Nowhere")).unwrap();
    assert!(texts.is_empty());
    assert!(load_documents(dir.path(), Sector::Fitness).unwrap().is_empty());
}

#[test]
fn loader_reads_txt_files_in_brand_order() {
    let dir = tempfile::tempdir().unwrap();
    seed_corpus(dir.path());
    fs::write(dir.path().join("Fashion").join("notes.md"), "ignored").unwrap();

    let docs = load_documents(dir.path(), Sector::Fashion).unwrap();
    let brands: Vec<&str> = docs.iter().map(|d| d.brand.as_str()).collect();
    assert_eq!(brands, vec!["Aurelia", "Birch"]);
    assert!(docs.iter().all(|d| d.sector == Sector::Fashion));
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let sector_dir = dir.path().join("Fitness");
    fs::create_dir_all(&sector_dir).unwrap();
    fs::write(sector_dir.join("Volt.txt"), b"Train now \xff\xfe harder").unwrap();

    let docs = load_documents(dir.path(), Sector::Fitness).unwrap();
    assert_eq!(docs.len(), 1);
    assert!(docs[0].text.starts_with("Train now "));
    assert!(docs[0].text.contains('\u{FFFD}'));
}

#[cfg(target_os = "linux")]
#[test]
fn unreadable_brand_file_skips_only_that_brand() {
    let dir = tempfile::tempdir().unwrap();
    let sector_dir = dir.path().join("Fashion");
    fs::create_dir_all(&sector_dir).unwrap();
    fs::write(sector_dir.join("Good.txt"), "Buy now").unwrap();
    // A regular file as far as metadata goes, but reading it fails with EIO.
    std::os::unix::fs::symlink("/proc/self/mem", sector_dir.join("Broken.txt")).unwrap();

    let texts = load_sector(&sector_dir).unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts["Good"], "Buy now");

    let docs = load_documents(dir.path(), Sector::Fashion).unwrap();
    let brands: Vec<&str> = docs.iter().map(|d| d.brand.as_str()).collect();
    assert_eq!(brands, vec!["Good"]);
}

#[test]
fn duplicate_brand_stems_keep_last_file_read() {
    let dir = tempfile::tempdir().unwrap();
    let sector_dir = dir.path().join("Fashion");
    fs::create_dir_all(&sector_dir).unwrap();
    // Sorted by path, "Nike.TXT" is read before "Nike.txt".
    fs::write(sector_dir.join("Nike.TXT"), "first").unwrap();
    fs::write(sector_dir.join("Nike.txt"), "second").unwrap();

    let texts = load_sector(&sector_dir).unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts["Nike"], "second");
}

// ============================================================
// Loader -> Analyzer
// ============================================================

#[test]
fn failing_document_is_dropped_from_the_table() {
    let dir = tempfile::tempdir().unwrap();
    seed_corpus(dir.path());
    let docs = load_documents(dir.path(), Sector::Fashion).unwrap();

    let analyzer = Analyzer::new(
        CodingScheme::from_json(SCHEME).unwrap(),
        ScoringSettings::default(),
    )
    .with_classifier(Box::new(PickyClassifier));

    let table = analyzer.analyze_all(&docs);
    assert_eq!(table.len(), 1);
    assert_eq!(table.text_column("brand").unwrap(), vec![Some("Aurelia")]);

    // Labels the classifier didn't return are padded with zero.
    assert_eq!(table.get(0, "model_joy").and_then(|c| c.as_f64()), Some(0.75));
    assert_eq!(table.get(0, "model_anger").and_then(|c| c.as_f64()), Some(0.0));
}

#[test]
fn analyzed_document_reflects_sector_patterns() {
    let analyzer = Analyzer::new(
        CodingScheme::from_json(SCHEME).unwrap(),
        ScoringSettings::default(),
    );
    let doc = Document {
        brand: "Lumen".to_string(),
        sector: Sector::SkincareCosmetics,
        text: "Hide your flaws now. Don't miss out on the glow you deserve. Never worry again."
            .to_string(),
    };
    let record = analyzer.analyze_document(&doc).unwrap();

    assert_eq!(record.sector_markers, vec![("glow".to_string(), 1)]);
    // urgency 1 * 2.0 + insecurity 1 * 1.5
    assert!((record.manipulation_intensity - 3.5 / 50.0).abs() < 1e-10);
    assert_eq!(record.dominant_strategy.as_deref(), Some("urgency"));
    // fear: two markers + one indicator * 1.5
    assert_eq!(record.dominant_emotion.as_deref(), Some("fear"));
    assert!((record.emotions[0].total_score - 3.5).abs() < 1e-10);
}

// ============================================================
// Full pipeline
// ============================================================

#[test]
fn full_run_writes_every_output() {
    let data = tempfile::tempdir().unwrap();
    let results = tempfile::tempdir().unwrap();
    seed_corpus(data.path());
    let config = config_for(data.path(), results.path());
    let analyzer = Analyzer::new(
        CodingScheme::from_json(SCHEME).unwrap(),
        config.scoring.clone(),
    );

    let summary = pipeline::analyze::run(&config, &analyzer, date()).unwrap();
    assert_eq!(
        summary.sectors,
        vec![Sector::Fashion, Sector::SkincareCosmetics]
    );
    assert_eq!(summary.combined.len(), 3);

    let paths = OutputPaths::new(results.path());
    for sector in [Sector::Fashion, Sector::SkincareCosmetics] {
        assert!(paths.sector_csv(sector).is_file());
        assert!(paths.sector_report(sector).is_file());
        assert!(paths.sector_intensity_chart(sector).is_file());
        assert!(paths.sector_heatmap(sector).is_file());
        assert!(paths.sector_emotion_chart(sector).is_file());
        assert!(paths.sector_sentiment_chart(sector).is_file());
    }
    // Fitness had no directory, so it produced nothing.
    assert!(!paths.sector_csv(Sector::Fitness).exists());

    assert!(paths.all_csv().is_file());
    assert!(paths.cross_chart().is_file());

    let report = fs::read_to_string(paths.sector_report(Sector::Fashion)).unwrap();
    assert!(report.contains("## Sector: Fashion"));
    assert!(report.contains("## Analysis Date: 2024-03-01"));
    assert!(report.contains("**Total Brands Analyzed:** 2"));

    let cross = fs::read_to_string(paths.cross_report()).unwrap();
    assert!(cross.contains("Fashion"));
    assert!(cross.contains("Skincare_Cosmetics"));

    let combined_csv = fs::read_to_string(paths.all_csv()).unwrap();
    assert_eq!(combined_csv.lines().count(), 4);
    let header = combined_csv.lines().next().unwrap();
    assert!(header.contains("marker_style"));
    assert!(header.contains("marker_glow"));
}

#[test]
fn repeated_runs_produce_identical_csv() {
    let data = tempfile::tempdir().unwrap();
    seed_corpus(data.path());

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let results = tempfile::tempdir().unwrap();
        let config = config_for(data.path(), results.path());
        let analyzer = Analyzer::new(
            CodingScheme::from_json(SCHEME).unwrap(),
            config.scoring.clone(),
        );
        pipeline::analyze::run(&config, &analyzer, date()).unwrap();
        outputs.push(fs::read(OutputPaths::new(results.path()).all_csv()).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn run_over_empty_data_dir_writes_nothing() {
    let data = tempfile::tempdir().unwrap();
    let results = tempfile::tempdir().unwrap();
    let config = config_for(data.path(), results.path());
    let analyzer = Analyzer::new(CodingScheme::builtin(), config.scoring.clone());

    let summary = pipeline::analyze::run(&config, &analyzer, date()).unwrap();
    assert!(summary.sectors.is_empty());
    assert!(summary.combined.is_empty());
    assert!(!OutputPaths::new(results.path()).all_csv().exists());
}

#[test]
fn quick_run_writes_sector_and_combined_reports() {
    let data = tempfile::tempdir().unwrap();
    let results = tempfile::tempdir().unwrap();
    seed_corpus(data.path());
    let config = config_for(data.path(), results.path());
    let scheme = CodingScheme::from_json(SCHEME).unwrap();

    let combined = pipeline::quick::run(&config, &scheme).unwrap();
    assert!(combined.starts_with("\nCOMBINED ANALYSIS REPORT\n"));
    assert!(combined.contains("AURELIA:"));
    assert!(combined.contains("LUMEN:"));

    let paths = OutputPaths::new(results.path());
    let fashion = fs::read_to_string(paths.sector_quick(Sector::Fashion)).unwrap();
    assert!(fashion.contains("Fashion SECTOR ANALYSIS"));
    assert!(fashion.contains("Brands analyzed: 2"));
    // Birch matches no emotion markers.
    assert!(fashion.contains("BIRCH:"));
    assert!(fashion.contains("Dominant emotion: Neutral"));
    assert!(paths.all_quick().is_file());
}
