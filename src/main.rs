use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

/// Extract lexical stance-detection features from a bodies/stances CSV
/// pair.
///
/// Computes one record per stance row: unigram overlap with the referenced
/// body, plus average and maximum headline-to-sentence similarity. Prints
/// a summary of the resulting matrix.
#[derive(Parser)]
#[command(name = "standfirst", version, about)]
struct Cli {
    /// Bodies CSV with `Body ID` and `articleBody` columns
    #[arg(default_value = "training_data/train_bodies.csv")]
    bodies: PathBuf,

    /// Stances CSV with `Headline`, `Body ID`, and `Stance` columns
    #[arg(default_value = "training_data/train_stances.csv")]
    stances: PathBuf,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("standfirst=info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Extracting features...");
    println!("  Bodies:  {}", cli.bodies.display());
    println!("  Stances: {}", cli.stances.display());

    let started = Instant::now();
    let scorer = standfirst::features::ngram::NgramOverlapScorer::default();
    let extraction = standfirst::pipeline::extract::run(&cli.bodies, &cli.stances, &scorer)?;

    standfirst::output::terminal::display_extraction_summary(&extraction, started.elapsed());

    Ok(())
}
