// Markdown and plain-text report rendering.
//
// Pure string builders: every value comes in through the arguments (the
// date included), so the same inputs always render the same report.

use chrono::NaiveDate;

use crate::analysis::{BrandAnalysis, CrossSectorSummary, SectorSummary};
use crate::corpus::Sector;
use crate::lexicon::SectorPatterns;

/// "social_proof" -> "Social Proof"
pub fn title_case(name: &str) -> String {
    name.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn label_or_na(label: Option<&str>) -> String {
    label.map(title_case).unwrap_or_else(|| "N/A".to_string())
}

fn mean_of(summary: &SectorSummary, column: &str) -> f64 {
    summary
        .column_means
        .iter()
        .find(|(c, _)| c == column)
        .map(|(_, m)| *m)
        .unwrap_or(0.0)
}

fn sentiment_label(column: &str) -> &str {
    match column {
        "valence_neg" => "Average Valence Negative Share",
        "valence_neu" => "Average Valence Neutral Share",
        "valence_pos" => "Average Valence Positive Share",
        "valence_compound" => "Average Valence Compound Score",
        "tone_polarity" => "Average Tone Polarity",
        "tone_subjectivity" => "Average Tone Subjectivity",
        other => other,
    }
}

/// Everything the sector report needs beyond the summary itself.
pub struct SectorReportInput<'a> {
    pub sector: Sector,
    pub date: NaiveDate,
    pub summary: &'a SectorSummary,
    pub records: &'a [BrandAnalysis],
    pub patterns: &'a SectorPatterns,
    pub distinctive_terms: &'a [(String, f32)],
}

/// Detailed per-sector report.
pub fn render_sector_report(input: &SectorReportInput<'_>) -> String {
    let s = input.summary;
    let mut out = String::new();

    out.push_str("# Emotion-Based Manipulation Analysis Report\n");
    out.push_str(&format!("## Sector: {}\n", input.sector));
    out.push_str(&format!("## Analysis Date: {}\n\n---\n\n", input.date.format("%Y-%m-%d")));

    out.push_str("## Executive Summary\n\n### Corpus Statistics\n");
    out.push_str(&format!("- **Total Brands Analyzed:** {}\n", s.brand_count));
    out.push_str(&format!(
        "- **Average Text Length:** {:.0} words\n",
        mean_of(s, "word_count")
    ));
    out.push_str(&format!(
        "- **Average Sentences:** {:.0}\n",
        mean_of(s, "sentence_count")
    ));
    out.push_str(&format!(
        "- **Average Sentence Complexity:** {:.1} words/sentence\n\n",
        mean_of(s, "avg_sentence_length")
    ));

    out.push_str("### Manipulation Intensity\n");
    out.push_str(&format!("- **High Intensity (>0.66):** {} brands\n", s.tiers.high));
    out.push_str(&format!(
        "- **Medium Intensity (0.33-0.66):** {} brands\n",
        s.tiers.medium
    ));
    out.push_str(&format!("- **Low Intensity (<=0.33):** {} brands\n", s.tiers.low));
    out.push_str(&format!("- **Average Intensity:** {:.3}\n\n---\n\n", s.mean_intensity));

    out.push_str("## Top Manipulation Strategies\n\n### Most Frequently Used Strategies\n");
    for (i, rank) in s.top_strategies.iter().enumerate() {
        out.push_str(&format!(
            "{}. **{}**: {:.0} total occurrences ({:.1} per brand)\n",
            i + 1,
            title_case(&rank.name),
            rank.total_hits,
            rank.per_brand
        ));
    }

    out.push_str("\n### Dominant Strategies by Brand\n");
    for (strategy, count) in &s.dominant_strategy_counts {
        out.push_str(&format!("- **{}**: {} brands\n", title_case(strategy), count));
    }

    out.push_str("\n---\n\n## Emotion Analysis\n\n### Primary Emotions Detected\n");
    if s.top_emotions.is_empty() {
        out.push_str("- No emotion categories in the coding scheme\n");
    }
    for (emotion, score) in &s.top_emotions {
        out.push_str(&format!("- **{}**: Average score {:.2}\n", title_case(emotion), score));
    }

    out.push_str("\n### Sentiment Analysis\n");
    for (column, mean) in &s.sentiment_means {
        out.push_str(&format!("- **{}:** {:.3}\n", sentiment_label(column), mean));
    }

    out.push_str("\n---\n\n## Brand-Specific Insights\n\n### Top 3 Most Manipulative Brands\n");
    push_brand_ranking(&mut out, &s.most_intense, input.records);
    out.push_str("\n### Least Manipulative Brands\n");
    push_brand_ranking(&mut out, &s.least_intense, input.records);

    out.push_str("\n---\n\n## Sector-Specific Patterns\n\n");
    if input.patterns.is_empty() {
        out.push_str("No sector patterns defined in the coding scheme.\n");
    } else {
        out.push_str(&format!("### Expected Patterns for {}\n", input.sector));
        out.push_str(&format!(
            "- **Dominant Strategies:** {}\n",
            input.patterns.dominant_strategies.join(", ")
        ));
        out.push_str(&format!(
            "- **Common Emotions:** {}\n",
            input.patterns.common_emotions.join(", ")
        ));
        if !input.patterns.unique_markers.is_empty() {
            out.push_str("\n### Sector Marker Usage\n");
            for marker in &input.patterns.unique_markers {
                let column = format!("marker_{marker}");
                out.push_str(&format!(
                    "- **{}**: {:.1} per brand\n",
                    marker,
                    mean_of(s, &column)
                ));
            }
        }
    }

    if !input.distinctive_terms.is_empty() {
        out.push_str("\n### Distinctive Vocabulary (TF-IDF)\n");
        let terms: Vec<String> = input
            .distinctive_terms
            .iter()
            .map(|(t, score)| format!("{t} ({score:.2})"))
            .collect();
        out.push_str(&terms.join(", "));
        out.push('\n');
    }

    out.push_str("\n---\n\n## Brand Profiles\n");
    for record in input.records {
        out.push_str(&format!(
            "\n### {}\n- Manipulation Intensity: {:.3} ({})\n- Dominant Strategy: {}\n- Dominant Emotion: {}\n",
            record.brand,
            record.manipulation_intensity,
            record.intensity_tier,
            label_or_na(record.dominant_strategy.as_deref()),
            label_or_na(record.dominant_emotion.as_deref()),
        ));
        let top = record.top_strategies(3);
        if !top.is_empty() {
            out.push_str("- Top tactics:\n");
            for score in top {
                out.push_str(&format!("  - {}: {} keywords", title_case(&score.name), score.hits));
                if let Some((keyword, context)) = score.examples.first() {
                    out.push_str(&format!(" (\"{keyword}\" in \"{}\")", context.replace('\n', " ")));
                }
                out.push('\n');
            }
        }
    }

    out.push_str("\n---\n\n## Figures\n\n");
    out.push_str(&format!(
        "- `{0}_intensity.png`: one bar per brand in the order of the profiles above; \
         red is High, orange Medium, green Low.\n\
         - `{0}_strategy_heatmap.png`: one column per brand (same order), one row per \
         strategy in coding-scheme order; darker cells have higher weighted scores.\n\
         - `{0}_emotions.png`: mean score per emotion in coding-scheme order, scaled \
         to the highest mean.\n\
         - `{0}_sentiment.png`: mean valence proportions; red negative, grey neutral, \
         green positive.\n",
        input.sector
    ));

    out.push_str(RECOMMENDATIONS);
    out
}

fn push_brand_ranking(out: &mut String, ranking: &[(String, f64)], records: &[BrandAnalysis]) {
    for (i, (brand, intensity)) in ranking.iter().enumerate() {
        let record = records.iter().find(|r| &r.brand == brand);
        out.push_str(&format!(
            "\n{}. **{}**\n   - Manipulation Intensity: {:.3}\n   - Dominant Strategy: {}\n   - Dominant Emotion: {}\n",
            i + 1,
            brand,
            intensity,
            label_or_na(record.and_then(|r| r.dominant_strategy.as_deref())),
            label_or_na(record.and_then(|r| r.dominant_emotion.as_deref())),
        ));
    }
}

const RECOMMENDATIONS: &str = "
---

## Recommendations

### For Consumers
1. Be aware of common manipulation strategies in this sector
2. Recognize emotional triggers in marketing messages
3. Practice critical evaluation of product claims

### For Regulators
1. Monitor high-intensity manipulation brands
2. Develop guidelines for ethical marketing practices
3. Require transparency in emotional manipulation tactics

### For Brands
1. Consider ethical alternatives to manipulation
2. Focus on genuine value communication
3. Build trust through transparency

---

*This report was generated using automated discourse analysis techniques.
Results should be validated through manual review for critical applications.*
";

/// Report comparing sectors.
pub fn render_cross_sector_report(summary: &CrossSectorSummary, date: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str("# Cross-Sector Manipulation Comparison\n");
    out.push_str(&format!("## Analysis Date: {}\n\n", date.format("%Y-%m-%d")));

    if summary.sectors.is_empty() {
        out.push_str("No sectors produced results.\n");
        return out;
    }

    out.push_str("## Manipulation Intensity by Sector\n\n");
    out.push_str("| Sector | Brands | Mean Intensity | High | Medium | Low | Most Common Dominant Strategy |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for p in &summary.sectors {
        let top = p
            .dominant_strategy_counts
            .first()
            .map(|(name, count)| format!("{} ({count})", title_case(name)))
            .unwrap_or_else(|| "N/A".to_string());
        out.push_str(&format!(
            "| {} | {} | {:.3} | {} | {} | {} | {} |\n",
            p.sector,
            p.brand_count,
            p.mean_intensity,
            p.tiers.high,
            p.tiers.medium,
            p.tiers.low,
            top
        ));
    }

    let mut emotions: Vec<&str> = Vec::new();
    for p in &summary.sectors {
        for (e, _) in &p.emotion_means {
            if !emotions.contains(&e.as_str()) {
                emotions.push(e);
            }
        }
    }
    if !emotions.is_empty() {
        out.push_str("\n## Mean Emotion Scores\n\n| Sector |");
        for e in &emotions {
            out.push_str(&format!(" {} |", title_case(e)));
        }
        out.push_str("\n|---|");
        out.push_str(&"---|".repeat(emotions.len()));
        out.push('\n');
        for p in &summary.sectors {
            out.push_str(&format!("| {} |", p.sector));
            for e in &emotions {
                match p.emotion_means.iter().find(|(name, _)| name == e) {
                    Some((_, m)) => out.push_str(&format!(" {m:.2} |")),
                    None => out.push_str(" - |"),
                }
            }
            out.push('\n');
        }
    }

    out.push_str("\n## Mean Sentiment\n\n| Sector | Compound | Polarity | Subjectivity |\n|---|---|---|---|\n");
    for p in &summary.sectors {
        let get = |c: &str| {
            p.sentiment_means
                .iter()
                .find(|(name, _)| name == c)
                .map(|(_, m)| format!("{m:.3}"))
                .unwrap_or_else(|| "-".to_string())
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            p.sector,
            get("valence_compound"),
            get("tone_polarity"),
            get("tone_subjectivity")
        ));
    }

    out.push_str(
        "\n## Figures\n\n- `cross_sector_comparison.png`: one group per sector in table order. \
         The first bar of each group is mean intensity; the remaining bars are the emotion \
         means in the column order above, each scaled to the largest emotion mean.\n",
    );
    out
}

/// Per-brand keyword counts for the quick report.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickProfile {
    pub brand: String,
    pub text_length: usize,
    /// (strategy, distinct keywords present), declaration order
    pub strategies: Vec<(String, u32)>,
    /// (emotion, distinct markers present), declaration order
    pub emotions: Vec<(String, u32)>,
}

impl QuickProfile {
    /// Strategy with the most hits, first declared on ties.
    pub fn top_strategy(&self) -> Option<&str> {
        crate::scoring::dominant(self.strategies.iter().map(|(n, c)| (n.as_str(), *c as f64)))
    }

    /// Emotion with the most markers; "neutral" when no markers were found.
    pub fn top_emotion(&self) -> &str {
        if self.emotions.iter().all(|(_, c)| *c == 0) {
            return "neutral";
        }
        crate::scoring::dominant(self.emotions.iter().map(|(n, c)| (n.as_str(), *c as f64)))
            .unwrap_or("neutral")
    }
}

/// Sum counts per name across profiles, then rank: count descending,
/// declaration order on ties.
fn totals<'a, F>(profiles: &'a [QuickProfile], field: F) -> Vec<(String, u64)>
where
    F: Fn(&'a QuickProfile) -> &'a [(String, u32)],
{
    let mut totals: Vec<(String, u64)> = Vec::new();
    for p in profiles {
        for (name, count) in field(p) {
            match totals.iter_mut().find(|(n, _)| n == name) {
                Some((_, t)) => *t += *count as u64,
                None => totals.push((name.clone(), *count as u64)),
            }
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

/// Plain-text quick analysis for one sector.
pub fn render_quick_report(sector: Sector, profiles: &[QuickProfile]) -> String {
    let mut out = format!("\n{} SECTOR ANALYSIS\n{}\n\n", sector, "=".repeat(60));
    if profiles.is_empty() {
        out.push_str("No brands found.\n");
        return out;
    }

    let avg_len =
        profiles.iter().map(|p| p.text_length).sum::<usize>() as f64 / profiles.len() as f64;
    out.push_str(&format!("Brands analyzed: {}\n", profiles.len()));
    out.push_str(&format!("Average text length: {avg_len:.0} characters\n\n"));

    out.push_str("TOP MANIPULATION STRATEGIES:\n");
    for (name, count) in totals(profiles, |p| p.strategies.as_slice()).into_iter().take(5) {
        out.push_str(&format!("  - {}: {} occurrences\n", title_case(&name), count));
    }

    out.push_str("\nTOP EMOTIONS DETECTED:\n");
    for (name, count) in totals(profiles, |p| p.emotions.as_slice()).into_iter().take(5) {
        out.push_str(&format!("  - {}: {} markers\n", title_case(&name), count));
    }

    out.push_str("\nBRAND PROFILES:\n");
    for p in profiles {
        out.push_str(&format!("\n{}:\n", p.brand.to_uppercase()));
        out.push_str(&format!("  Text length: {} chars\n", p.text_length));
        out.push_str(&format!(
            "  Dominant strategy: {}\n",
            label_or_na(p.top_strategy())
        ));
        out.push_str(&format!("  Dominant emotion: {}\n", title_case(p.top_emotion())));

        let mut tactics: Vec<&(String, u32)> = p.strategies.iter().collect();
        tactics.sort_by(|a, b| b.1.cmp(&a.1));
        out.push_str("  Top tactics:\n");
        for (name, count) in tactics.into_iter().take(3).filter(|(_, c)| *c > 0) {
            out.push_str(&format!("    - {}: {}\n", title_case(name), count));
        }
    }
    out
}
