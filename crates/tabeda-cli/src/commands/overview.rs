//! Overview command - print dataset shape and per-column summary.

use std::path::PathBuf;

use colored::Colorize;
use tabeda::{ColumnSummary, DatasetSummary};

use super::build_analyzer;

pub fn run(
    file: PathBuf,
    sep: String,
    encoding: String,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let analyzer = build_analyzer(&sep, &encoding)?;
    let report = analyzer.analyze_path(&file)?;
    let summary = &report.analysis.summary;

    if verbose {
        println!(
            "{} {} ({}, {} bytes, {})",
            "Source:".cyan().bold(),
            report.source.file.as_str().white(),
            report.source.format,
            report.source.size_bytes,
            report.source.encoding
        );
        println!();
    }

    println!("Rows: {}", summary.n_rows.to_string().white().bold());
    println!("Columns: {}", summary.n_cols.to_string().white().bold());
    println!();
    println!("{}", "Columns:".yellow().bold());
    println!(
        "  {:<24} {:<12} {:>8} {:>14} {:>8} {:>10} {:>10} {:>10}",
        "name", "dtype", "missing", "missing_share", "unique", "mean", "min", "max"
    );

    for col in &summary.columns {
        println!("  {}", format_column_row(col, summary));
    }

    Ok(())
}

fn format_column_row(col: &ColumnSummary, summary: &DatasetSummary) -> String {
    let missing_share = if summary.n_rows == 0 {
        0.0
    } else {
        col.missing_count as f64 / summary.n_rows as f64
    };

    let (mean, min, max) = match &col.numeric {
        Some(s) => (
            format!("{:.2}", s.mean),
            format!("{:.2}", s.min),
            format!("{:.2}", s.max),
        ),
        None => ("-".to_string(), "-".to_string(), "-".to_string()),
    };

    format!(
        "{:<24} {:<12} {:>8} {:>13.1}% {:>8} {:>10} {:>10} {:>10}",
        col.name,
        col.dtype.label(),
        col.missing_count,
        missing_share * 100.0,
        col.unique_count,
        mean,
        min,
        max
    )
}
