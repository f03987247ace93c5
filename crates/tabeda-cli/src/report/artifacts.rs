//! Tabular and markdown report artifacts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tabeda::{
    CorrelationMatrix, DatasetSummary, MissingTable, QualityFlags, SourceMetadata, TopCategories,
};

use super::sanitize_file_name;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write the per-column summary table.
pub fn write_summary_csv(path: &Path, summary: &DatasetSummary) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "name",
        "dtype",
        "missing_count",
        "missing_share",
        "unique_count",
        "mean",
        "min",
        "max",
    ])?;

    for col in &summary.columns {
        let missing_share = if summary.n_rows == 0 {
            0.0
        } else {
            col.missing_count as f64 / summary.n_rows as f64
        };
        let (mean, min, max) = match &col.numeric {
            Some(s) => (s.mean.to_string(), s.min.to_string(), s.max.to_string()),
            None => (String::new(), String::new(), String::new()),
        };

        writer.write_record([
            col.name.as_str(),
            col.dtype.label(),
            &col.missing_count.to_string(),
            &format!("{:.6}", missing_share),
            &col.unique_count.to_string(),
            &mean,
            &min,
            &max,
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the missingness table.
pub fn write_missing_csv(path: &Path, missing: &MissingTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["column", "missing_count", "missing_share"])?;

    for (name, entry) in missing.iter() {
        writer.write_record([
            name.as_str(),
            &entry.missing_count.to_string(),
            &format!("{:.6}", entry.missing_share),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the correlation matrix with column names on both axes.
pub fn write_correlation_csv(path: &Path, corr: &CorrelationMatrix) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["column".to_string()];
    header.extend(corr.columns.iter().cloned());
    writer.write_record(&header)?;

    for (i, name) in corr.columns.iter().enumerate() {
        let mut record = vec![name.clone()];
        for j in 0..corr.columns.len() {
            let v = corr.get(i, j).unwrap_or(f64::NAN);
            record.push(if v.is_nan() {
                String::new()
            } else {
                format!("{:.6}", v)
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write one `<column>.csv` per categorical column; returns file names.
pub fn write_top_categories(dir: &Path, cats: &TopCategories) -> Result<Vec<String>> {
    fs::create_dir_all(dir)?;
    let mut files = Vec::new();

    for (column, entries) in cats.iter() {
        let file_name = format!("{}.csv", sanitize_file_name(column));
        let mut writer = csv::Writer::from_path(dir.join(&file_name))?;
        writer.write_record(["value", "count"])?;
        for entry in entries {
            writer.write_record([entry.value.as_str(), &entry.count.to_string()])?;
        }
        writer.flush()?;
        files.push(file_name);
    }

    Ok(files)
}

/// Everything the markdown report needs.
pub struct ReportContext<'a> {
    pub path: PathBuf,
    pub title: &'a str,
    pub source: &'a SourceMetadata,
    pub summary: &'a DatasetSummary,
    pub missing: &'a MissingTable,
    pub flags: &'a QualityFlags,
    pub correlation_empty: bool,
    pub categories_empty: bool,
    pub max_hist_columns: usize,
    pub top_k_categories: usize,
    pub min_missing_share: f64,
}

/// Write the human-readable markdown report.
pub fn write_report_md(ctx: &ReportContext<'_>) -> Result<()> {
    let mut f = fs::File::create(&ctx.path)?;
    let flags = ctx.flags;

    writeln!(f, "# {}\n", ctx.title)?;
    writeln!(
        f,
        "Generated: {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(f, "Source file: `{}`\n", ctx.source.file)?;
    writeln!(f, "Hash: `{}`\n", ctx.source.hash)?;
    writeln!(
        f,
        "Rows: **{}**, columns: **{}**\n",
        ctx.summary.n_rows, ctx.summary.n_cols
    )?;

    writeln!(f, "## Data quality (heuristics)\n")?;
    writeln!(f, "- Quality score: **{:.2}**", flags.quality_score)?;
    writeln!(
        f,
        "- Max missing share per column: **{:.2}%**",
        flags.max_missing_share * 100.0
    )?;
    writeln!(f, "- Too few rows: **{}**", flags.too_few_rows)?;
    writeln!(f, "- Too many columns: **{}**", flags.too_many_columns)?;
    writeln!(f, "- Too many missing: **{}**\n", flags.too_many_missing)?;

    writeln!(f, "- Constant columns: **{}**", flags.has_constant_columns)?;
    writeln!(
        f,
        "- High-cardinality categoricals: **{}**",
        flags.has_high_cardinality_categoricals
    )?;
    writeln!(
        f,
        "- Suspicious id duplicates: **{}**",
        flags.has_suspicious_id_duplicates
    )?;
    writeln!(f, "- Many zero values: **{}**\n", flags.has_many_zero_values)?;

    if flags.has_constant_columns {
        writeln!(
            f,
            "  - Constant columns: {}",
            flags.constant_columns.join(", ")
        )?;
    }
    if flags.has_high_cardinality_categoricals {
        writeln!(
            f,
            "  - High-cardinality columns: {}",
            flags.high_cardinality_categorical_columns.join(", ")
        )?;
    }
    if flags.has_suspicious_id_duplicates {
        writeln!(
            f,
            "  - Columns with id duplicates: {}",
            flags.suspicious_id_duplicate_columns.join(", ")
        )?;
    }
    if flags.has_many_zero_values {
        writeln!(
            f,
            "  - Mostly-zero columns: {}",
            flags.many_zero_value_columns.join(", ")
        )?;
    }
    writeln!(f)?;

    writeln!(f, "## Report parameters\n")?;
    writeln!(f, "- Max histogram columns: **{}**", ctx.max_hist_columns)?;
    writeln!(f, "- Top categories per column: **{}**", ctx.top_k_categories)?;
    writeln!(
        f,
        "- Problematic missing-share threshold: **{:.2}%**\n",
        ctx.min_missing_share * 100.0
    )?;

    writeln!(f, "## Columns\n")?;
    writeln!(f, "See `summary.csv`.\n")?;

    writeln!(f, "## Missing values\n")?;
    if ctx.missing.is_empty() || ctx.summary.n_rows == 0 {
        writeln!(f, "No missing values or dataset is empty.\n")?;
    } else {
        let problematic = ctx.missing.columns_above(ctx.min_missing_share);
        if !problematic.is_empty() {
            writeln!(
                f,
                "**Problematic columns (missing share >= {:.2}%):** {}\n",
                ctx.min_missing_share * 100.0,
                problematic.join(", ")
            )?;
        }
        writeln!(f, "See `missing.csv` and `missing_matrix.png`.\n")?;
    }

    writeln!(f, "## Numeric correlations\n")?;
    if ctx.correlation_empty {
        writeln!(f, "Not enough numeric columns for correlation.\n")?;
    } else {
        writeln!(f, "See `correlation.csv` and `correlation_heatmap.png`.\n")?;
    }

    writeln!(f, "## Categorical columns\n")?;
    if ctx.categories_empty {
        writeln!(f, "No categorical/text columns found.\n")?;
    } else {
        writeln!(f, "See files under `top_categories/`.\n")?;
    }

    writeln!(f, "## Numeric histograms\n")?;
    writeln!(f, "See `hist_*.png` files.")?;

    Ok(())
}
