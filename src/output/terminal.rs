// Colored terminal output for extraction summaries.
//
// This module handles all terminal-specific formatting: colors, tables,
// alignment. The main.rs display calls delegate here.

use std::time::Duration;

use colored::Colorize;

use crate::dataset::models::StanceLabel;
use crate::pipeline::extract::Extraction;

const FEATURE_NAMES: [&str; 3] = [
    "ngram_overlap",
    "avg_sentence_similarity",
    "max_sentence_similarity",
];

/// Display the run summary: input sizes, label distribution, the spread of
/// each feature column, and a few example rows.
pub fn display_extraction_summary(extraction: &Extraction, elapsed: Duration) {
    if extraction.features.is_empty() {
        println!("No stance examples found. Check the stances file.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== Feature Extraction ({} examples) ===",
            extraction.features.len()
        )
        .bold()
    );
    println!();
    println!("  Bodies:  {}", extraction.body_count);
    println!("  Stances: {}", extraction.stances.len());
    println!();

    display_label_distribution(extraction);
    display_feature_spread(extraction);
    display_example_rows(extraction);

    println!("  Completed in {:.2}s", elapsed.as_secs_f64());
}

fn display_label_distribution(extraction: &Extraction) {
    let total = extraction.stances.len();

    println!("  {}", "Stance labels".dimmed());
    for label in StanceLabel::ALL {
        let count = extraction
            .stances
            .iter()
            .filter(|s| s.stance == label)
            .count();
        let share = count as f64 / total as f64 * 100.0;
        println!("    {:<10} {:>7}  ({:>5.1}%)", label, count, share);
    }
    println!();
}

fn display_feature_spread(extraction: &Extraction) {
    let matrix = extraction.features.matrix();

    println!(
        "  {:<26} {:>8}  {:>8}  {:>8}",
        "Feature".dimmed(),
        "mean".dimmed(),
        "min".dimmed(),
        "max".dimmed(),
    );
    println!("  {}", "-".repeat(56).dimmed());
    for (column, name) in FEATURE_NAMES.iter().enumerate() {
        let (mean, min, max) = column_stats(&matrix, column);
        println!("  {name:<26} {mean:>8.4}  {min:>8.4}  {max:>8.4}");
    }
    println!();
}

fn display_example_rows(extraction: &Extraction) {
    println!("  {}", "First rows".dimmed());
    for (stance, record) in extraction
        .stances
        .iter()
        .zip(extraction.features.records())
        .take(3)
    {
        let preview = super::truncate_chars(&stance.headline, 56);
        println!(
            "    [{:.3} {:.3} {:.3}] {:<10} \"{}\"",
            record.ngram_overlap,
            record.avg_sentence_similarity,
            record.max_sentence_similarity,
            stance.stance,
            preview.dimmed(),
        );
    }
    println!();
}

fn column_stats(matrix: &[[f64; 3]], column: usize) -> (f64, f64, f64) {
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in matrix {
        let value = row[column];
        sum += value;
        min = min.min(value);
        max = max.max(value);
    }
    (sum / matrix.len() as f64, min, max)
}
