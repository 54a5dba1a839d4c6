use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use copyscope::analysis::Analyzer;
use copyscope::config::Config;
use copyscope::corpus::{Document, Sector};
use copyscope::output::terminal;

/// Copyscope: emotion-based manipulation analysis of marketing copy.
///
/// Scores brand texts against a coding scheme of manipulation strategies
/// and emotions, then writes CSV tables, charts, and Markdown reports.
#[derive(Parser)]
#[command(name = "copyscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis over every configured sector
    Analyze,

    /// Keyword-count quick analysis (plain-text reports)
    Quick,

    /// Score a single text file and print the result
    Score {
        /// Path to a plain-text file
        file: PathBuf,

        /// Sector whose patterns to apply (default: Fashion)
        #[arg(long, default_value = "Fashion")]
        sector: Sector,

        /// Print the record as JSON instead of a colored summary
        #[arg(long)]
        json: bool,
    },

    /// Validate the coding scheme and list its categories
    Lexicon,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("copyscope=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze => {
            config.require_scoring()?;
            config.require_classifier()?;
            let scheme = config.require_scheme()?;
            let analyzer = build_analyzer(&config, scheme)?;

            info!(
                data_dir = %config.data_dir.display(),
                results_dir = %config.results_dir.display(),
                sectors = config.sectors.len(),
                "Starting analysis"
            );
            let today = chrono::Local::now().date_naive();
            let summary = copyscope::pipeline::analyze::run(&config, &analyzer, today)?;

            if summary.sectors.is_empty() {
                println!(
                    "\n{}",
                    format!(
                        "No documents found under {}. Check COPYSCOPE_DATA_DIR.",
                        config.data_dir.display()
                    )
                    .yellow()
                );
            } else {
                println!(
                    "\n{} {} brands across {} sectors. Results in {}",
                    "Analysis complete:".bold(),
                    summary.combined.len(),
                    summary.sectors.len(),
                    config.results_dir.display()
                );
            }
        }

        Commands::Quick => {
            let scheme = config.require_scheme()?;
            let combined = copyscope::pipeline::quick::run(&config, &scheme)?;
            if combined.is_empty() {
                println!("{}", "No documents found; nothing to report.".yellow());
            } else {
                println!(
                    "\n{} {}",
                    "Quick analysis complete. Results in".bold(),
                    config.results_dir.display()
                );
            }
        }

        Commands::Score { file, sector, json } => {
            config.require_scoring()?;
            config.require_classifier()?;
            let scheme = config.require_scheme()?;
            let analyzer = build_analyzer(&config, scheme)?;

            let bytes =
                std::fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
            let brand = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("document")
                .to_string();
            let doc = Document {
                brand,
                sector,
                text: String::from_utf8_lossy(&bytes).into_owned(),
            };

            let record = analyzer.analyze_document(&doc)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                terminal::display_brand_detail(&record);
            }
        }

        Commands::Lexicon => {
            let scheme = config.require_scheme()?;
            match &config.coding_scheme {
                Some(path) => println!("Coding scheme: {}", path.display()),
                None => println!("Coding scheme: built-in basic lexicon"),
            }
            terminal::display_scheme(&scheme);
            println!("\n{}", "Coding scheme is valid.".green());
        }
    }

    Ok(())
}

/// Build the analyzer with the configured emotion classifier.
fn build_analyzer(config: &Config, scheme: copyscope::lexicon::CodingScheme) -> Result<Analyzer> {
    let classifier =
        copyscope::emotion::build_classifier(config.emotion_backend, &config.model_dir)?;
    Ok(Analyzer::new(scheme, config.scoring.clone()).with_classifier(classifier))
}
