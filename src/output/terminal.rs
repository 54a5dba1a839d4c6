// Colored terminal output for sector summaries, single-document scores and
// the coding scheme. main.rs and the pipeline delegate display here.

use colored::Colorize;

use crate::analysis::{BrandAnalysis, CrossSectorSummary, SectorSummary};
use crate::corpus::Sector;
use crate::lexicon::CodingScheme;
use crate::scoring::IntensityTier;

use super::markdown::title_case;

/// Display a sector's ranked brands and headline numbers.
pub fn display_sector_summary(sector: Sector, summary: &SectorSummary, records: &[BrandAnalysis]) {
    if records.is_empty() {
        println!("No brands analyzed for {sector}.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {} ({} brands) ===", sector, summary.brand_count).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<28} {:>9}  {:<8}  {:<20}",
        "Rank".dimmed(),
        "Brand".dimmed(),
        "Intensity".dimmed(),
        "Tier".dimmed(),
        "Dominant".dimmed(),
    );
    println!("  {}", "-".repeat(76).dimmed());

    let mut ranked: Vec<&BrandAnalysis> = records.iter().collect();
    ranked.sort_by(|a, b| b.manipulation_intensity.total_cmp(&a.manipulation_intensity));

    for (i, record) in ranked.iter().enumerate() {
        println!(
            "  {:>4}. {:<28} {:>9.3}  {:<8}  {:<20}",
            i + 1,
            super::truncate_chars(&record.brand, 28),
            record.manipulation_intensity,
            colorize_tier(record.intensity_tier),
            record
                .dominant_strategy
                .as_deref()
                .map(title_case)
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    println!();
    let t = summary.tiers;
    if t.high > 0 {
        println!("  {} {} high-intensity brands", "!!".red().bold(), t.high);
    }
    if t.medium > 0 {
        println!("  {} {} medium-intensity brands", "!".yellow(), t.medium);
    }
    if t.low > 0 {
        println!("  {} {} low-intensity brands", "~".green(), t.low);
    }
    println!("  Average intensity: {:.3}", summary.mean_intensity);
}

/// Display one sector line per entry of the cross-sector summary.
pub fn display_cross_sector(summary: &CrossSectorSummary) {
    if summary.sectors.is_empty() {
        return;
    }
    println!("\n{}", "=== Cross-Sector Comparison ===".bold());
    for p in &summary.sectors {
        let tier = IntensityTier::from_intensity(p.mean_intensity);
        println!(
            "  {:<20} {:>3} brands  mean {:.3} {}",
            p.sector,
            p.brand_count,
            p.mean_intensity,
            colorize_tier(tier)
        );
    }
}

/// Display a single document's full score.
pub fn display_brand_detail(record: &BrandAnalysis) {
    println!(
        "\n{}",
        format!("=== {} ({}) ===", record.brand, record.sector).bold()
    );
    println!(
        "  Manipulation intensity: {:.3} {}",
        record.manipulation_intensity,
        colorize_tier(record.intensity_tier)
    );
    if let Some(s) = &record.dominant_strategy {
        println!("  Dominant strategy: {}", title_case(s));
    }
    if let Some(e) = &record.dominant_emotion {
        println!("  Dominant emotion: {}", title_case(e));
    }

    let hit: Vec<_> = record.top_strategies(usize::MAX);
    if !hit.is_empty() {
        println!("\n  Strategies:");
        for score in hit {
            let keywords: Vec<&str> = score.matched_keywords.iter().map(String::as_str).collect();
            println!(
                "    {:<22} {:>2} hits  {:>5.1} weighted  [{}]",
                title_case(&score.name),
                score.hits,
                score.weighted_score,
                keywords.join(", ").dimmed()
            );
            for (_, context) in &score.examples {
                println!("      \"{}\"", super::truncate_chars(context, 100).dimmed());
            }
        }
    }

    let emotions: Vec<_> = record.emotions.iter().filter(|e| e.total_score > 0.0).collect();
    if !emotions.is_empty() {
        println!("\n  Emotions:");
        for e in emotions {
            println!(
                "    {:<22} {:>5.1}  ({} markers, {} indicators)",
                title_case(&e.name),
                e.total_score,
                e.marker_count,
                e.intensity_count
            );
        }
    }

    let v = record.sentiment.valence;
    let t = record.sentiment.tone;
    println!("\n  Sentiment:");
    println!(
        "    Valence: neg {:.3}  neu {:.3}  pos {:.3}  compound {:+.3}",
        v.neg, v.neu, v.pos, v.compound
    );
    println!(
        "    Tone: polarity {:+.3}  subjectivity {:.3}",
        t.polarity, t.subjectivity
    );

    let l = record.linguistic;
    println!("\n  Linguistic:");
    println!(
        "    {} sentences, {} words ({:.1} words/sentence)",
        l.sentence_count, l.word_count, l.avg_sentence_length
    );
    println!(
        "    adjectives {}  adverbs {}  verbs {}  '!' {}  '?' {}  you/we pronouns {}",
        l.adjective_count,
        l.adverb_count,
        l.verb_count,
        l.exclamation_count,
        l.question_count,
        l.personal_pronoun_count
    );

    let markers: Vec<_> = record.sector_markers.iter().filter(|(_, c)| *c > 0).collect();
    if !markers.is_empty() {
        println!("\n  Sector markers:");
        for (m, c) in markers {
            println!("    {m}: {c}");
        }
    }

    if !record.model_emotions.is_empty() {
        println!("\n  Model emotions:");
        for (label, p) in &record.model_emotions {
            println!("    {:<10} {:.3}", label, p);
        }
    }
}

/// Display the coding scheme's categories.
pub fn display_scheme(scheme: &CodingScheme) {
    println!(
        "\n{}",
        format!("=== Manipulation strategies ({}) ===", scheme.manipulation().len()).bold()
    );
    for c in scheme.manipulation() {
        println!(
            "  {:<22} weight {:.1}  {} keywords",
            title_case(&c.name),
            c.weight,
            c.keywords.len()
        );
        if let Some(desc) = &c.description {
            println!("    {}", desc.dimmed());
        }
    }

    if !scheme.emotions().is_empty() {
        println!(
            "\n{}",
            format!("=== Emotions ({}) ===", scheme.emotions().len()).bold()
        );
        for e in scheme.emotions() {
            println!(
                "  {:<22} {} markers, {} intensity indicators",
                title_case(&e.name),
                e.markers.len(),
                e.intensity_indicators.len()
            );
        }
    }

    let keys: Vec<&str> = scheme.sector_keys().collect();
    if !keys.is_empty() {
        println!("\n{}", "=== Sector patterns ===".bold());
        for key in keys {
            let p = scheme.sector_patterns(key);
            println!(
                "  {:<12} {} markers; expects {} / {}",
                key,
                p.unique_markers.len(),
                p.dominant_strategies.join(", "),
                p.common_emotions.join(", ")
            );
        }
    }
}

/// Colorize an intensity tier.
fn colorize_tier(tier: IntensityTier) -> colored::ColoredString {
    match tier {
        IntensityTier::High => tier.as_str().red().bold(),
        IntensityTier::Medium => tier.as_str().yellow(),
        IntensityTier::Low => tier.as_str().green(),
    }
}
