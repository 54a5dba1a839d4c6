// Unit tests for the analyzer, result tables, and sector summaries.
//
// Documents are scored against a small coding scheme with known weights, so
// every intensity, hit total, and ranking below can be computed by hand.

use copyscope::analysis::{
    cross_sector_summary, summarize, top_n, Analyzer, BrandAnalysis, Cell, Order, ResultTable,
};
use copyscope::corpus::{Document, Sector};
use copyscope::lexicon::CodingScheme;
use copyscope::output::csv_export::write_table;
use copyscope::scoring::{IntensityTier, ScoringSettings};

const SCHEME: &str = r#"{
    "manipulation_categories": {
        "urgency": {"keywords": ["now", "today"], "intensity_weight": 2.0},
        "scarcity": {"keywords": ["limited", "exclusive"], "intensity_weight": 1.0}
    },
    "emotion_categories": {
        "fear": {"linguistic_markers": ["miss out"]},
        "joy": {"linguistic_markers": ["love"]}
    },
    "sector_specific_patterns": {
        "fitness": {
            "unique_markers": ["gains"],
            "dominant_strategies": ["urgency"],
            "common_emotions": ["fear"]
        }
    }
}"#;

fn analyzer() -> Analyzer {
    Analyzer::new(
        CodingScheme::from_json(SCHEME).unwrap(),
        ScoringSettings::default(),
    )
}

fn doc(brand: &str, sector: Sector, text: &str) -> Document {
    Document {
        brand: brand.to_string(),
        sector,
        text: text.to_string(),
    }
}

fn fashion_docs() -> Vec<Document> {
    vec![
        doc("Alpha", Sector::Fashion, "Shop now, today only! Limited stock."),
        doc("Beta", Sector::Fashion, "A calm catalogue of knitwear."),
        doc("Gamma", Sector::Fashion, "Exclusive and limited: you will love it."),
    ]
}

// ============================================================
// Per-document records
// ============================================================

#[test]
fn record_scores_match_hand_computation() {
    let record = analyzer()
        .analyze_document(&fashion_docs()[0])
        .unwrap();

    assert_eq!(record.brand, "Alpha");
    assert_eq!(record.strategies[0].hits, 2);
    assert!((record.strategies[0].weighted_score - 4.0).abs() < 1e-10);
    assert_eq!(record.strategies[1].hits, 1);
    // (4 + 1) / 50
    assert!((record.manipulation_intensity - 0.1).abs() < 1e-10);
    assert_eq!(record.intensity_tier, IntensityTier::Low);
    assert_eq!(record.dominant_strategy.as_deref(), Some("urgency"));
    assert_eq!(record.text_length, 36);
    assert!(record.model_emotions.is_empty());
}

#[test]
fn zero_hit_document_keeps_first_strategy_as_dominant() {
    let record = analyzer()
        .analyze_document(&fashion_docs()[1])
        .unwrap();
    assert_eq!(record.manipulation_intensity, 0.0);
    assert_eq!(record.dominant_strategy.as_deref(), Some("urgency"));
    assert!(record.top_strategies(3).is_empty());
}

#[test]
fn scheme_without_emotions_has_no_dominant_emotion() {
    let a = Analyzer::new(CodingScheme::builtin(), ScoringSettings::default());
    let record = a
        .analyze_document(&doc("Solo", Sector::Fashion, "Hurry, buy now!"))
        .unwrap();
    assert!(record.dominant_emotion.is_none());
    assert!(record.emotions.is_empty());
}

#[test]
fn sector_markers_only_for_matching_sector() {
    let a = analyzer();
    let fit = a
        .analyze_document(&doc("Lift", Sector::Fitness, "Gains, gains, more gains now"))
        .unwrap();
    assert_eq!(fit.sector_markers, vec![("gains".to_string(), 3)]);

    let fashion = a
        .analyze_document(&doc("Lift", Sector::Fashion, "Gains, gains, more gains now"))
        .unwrap();
    assert!(fashion.sector_markers.is_empty());
}

#[test]
fn record_cells_start_with_identity_columns() {
    let record: BrandAnalysis = analyzer()
        .analyze_document(&fashion_docs()[0])
        .unwrap();
    let names: Vec<String> = record.cells().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        &names[..7],
        &[
            "brand",
            "sector",
            "text_length",
            "manipulation_intensity",
            "intensity_tier",
            "dominant_strategy",
            "dominant_emotion",
        ]
    );
    assert!(names.contains(&"strat_urgency".to_string()));
    assert!(names.contains(&"strat_urgency_weighted".to_string()));
    assert!(names.contains(&"emotion_joy".to_string()));
    assert!(names.contains(&"valence_compound".to_string()));
    assert!(names.contains(&"word_count".to_string()));
}

// ============================================================
// Tables
// ============================================================

#[test]
fn analyze_all_of_nothing_is_empty_table() {
    let table = analyzer().analyze_all(&[]);
    assert!(table.is_empty());
    assert!(table.columns().is_empty());
}

#[test]
fn analyze_all_keeps_input_order() {
    let table = analyzer().analyze_all(&fashion_docs());
    assert_eq!(table.len(), 3);
    let brands = table.text_column("brand").unwrap();
    assert_eq!(brands, vec![Some("Alpha"), Some("Beta"), Some("Gamma")]);
    assert_eq!(table.get(0, "strat_urgency"), Some(&Cell::Int(2)));
}

#[test]
fn concat_unions_sector_specific_columns() {
    let a = analyzer();
    let fashion = a.analyze_all(&fashion_docs());
    let fitness = a.analyze_all(&[doc("Lift", Sector::Fitness, "Big gains today")]);

    let combined = ResultTable::concat([&fashion, &fitness]);
    assert_eq!(combined.len(), 4);
    assert!(combined.has_column("marker_gains"));
    assert_eq!(combined.get(0, "marker_gains"), Some(&Cell::Missing));
    assert_eq!(combined.get(3, "marker_gains"), Some(&Cell::Int(1)));
}

#[test]
fn top_n_ranks_brands_both_ways() {
    let table = analyzer().analyze_all(&fashion_docs());

    let most = top_n(&table, "manipulation_intensity", 2, Order::Descending);
    let names: Vec<&str> = most.iter().map(|(b, _)| b.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Gamma"]);

    let least = top_n(&table, "manipulation_intensity", 1, Order::Ascending);
    assert_eq!(least[0].0, "Beta");
    assert_eq!(least[0].1, 0.0);

    assert!(top_n(&table, "no_such_column", 3, Order::Descending).is_empty());
}

// ============================================================
// Summaries
// ============================================================

#[test]
fn summarize_sector() {
    let table = analyzer().analyze_all(&fashion_docs());
    let summary = summarize(&table);

    assert_eq!(summary.brand_count, 3);
    assert_eq!(summary.tiers.low, 3);
    assert_eq!(summary.tiers.high + summary.tiers.medium, 0);

    // scarcity: 1 + 0 + 2 hits, urgency: 2 + 0 + 0
    assert_eq!(summary.top_strategies[0].name, "scarcity");
    assert_eq!(summary.top_strategies[0].total_hits, 3.0);
    assert!((summary.top_strategies[0].per_brand - 1.0).abs() < 1e-10);
    assert_eq!(summary.top_strategies[1].name, "urgency");

    assert_eq!(
        summary.dominant_strategy_counts,
        vec![("urgency".to_string(), 2), ("scarcity".to_string(), 1)]
    );

    assert_eq!(summary.top_emotions[0].0, "joy");
    assert!((summary.top_emotions[0].1 - 1.0 / 3.0).abs() < 1e-10);

    let emotion_order: Vec<&str> = summary
        .emotion_means
        .iter()
        .map(|(e, _)| e.as_str())
        .collect();
    assert_eq!(emotion_order, vec!["fear", "joy"]);
    assert_eq!(summary.emotion_means[0].1, 0.0);

    assert_eq!(summary.most_intense[0].0, "Alpha");
    assert_eq!(summary.least_intense[0].0, "Beta");
    assert_eq!(summary.sentiment_means.len(), 6);
}

#[test]
fn summarize_empty_table() {
    let summary = summarize(&ResultTable::new());
    assert_eq!(summary.brand_count, 0);
    assert_eq!(summary.mean_intensity, 0.0);
    assert!(summary.top_strategies.is_empty());
    assert!(summary.most_intense.is_empty());
}

#[test]
fn cross_sector_groups_in_first_appearance_order() {
    let a = analyzer();
    let fashion = a.analyze_all(&fashion_docs());
    let fitness = a.analyze_all(&[
        doc("Lift", Sector::Fitness, "Train now, today, limited spots"),
        doc("Pace", Sector::Fitness, "Run with us."),
    ]);
    let combined = ResultTable::concat([&fashion, &fitness]);
    let cross = cross_sector_summary(&combined);

    let sectors: Vec<&str> = cross.sectors.iter().map(|s| s.sector.as_str()).collect();
    assert_eq!(sectors, vec!["Fashion", "Fitness"]);
    assert_eq!(cross.sectors[0].brand_count, 3);
    assert_eq!(cross.sectors[1].brand_count, 2);

    // Lift: (2 * 2 + 1) / 50, Pace: 0
    assert!((cross.sectors[1].mean_intensity - 0.05).abs() < 1e-10);
    assert_eq!(cross.sectors[1].emotion_means.len(), 2);
}

// ============================================================
// CSV
// ============================================================

#[test]
fn csv_has_header_and_one_line_per_row() {
    let table = analyzer().analyze_all(&fashion_docs());
    let mut buf = Vec::new();
    write_table(&table, &mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("brand,sector,text_length,manipulation_intensity"));
    assert!(lines[1].starts_with("Alpha,Fashion,36,0.100000,Low,urgency,fear"));
}

#[test]
fn csv_is_deterministic() {
    let a = analyzer();
    let render = || {
        let mut buf = Vec::new();
        write_table(&a.analyze_all(&fashion_docs()), &mut buf).unwrap();
        buf
    };
    assert_eq!(render(), render());
}
