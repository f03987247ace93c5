//! Chart rendering with plotters (bitmap backend).

use std::path::Path;

use plotters::prelude::*;
use tabeda::{CorrelationMatrix, DataTable, DatasetSummary};

use super::sanitize_file_name;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const HIST_BINS: usize = 20;
const CHART_SIZE: (u32, u32) = (800, 600);

/// Draw a histogram per numeric column, up to `max_columns`.
/// Returns the file names written.
pub fn plot_histograms(
    table: &DataTable,
    summary: &DatasetSummary,
    out_dir: &Path,
    max_columns: usize,
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    let numeric: Vec<(usize, &str)> = summary
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.numeric.is_some())
        .map(|(idx, c)| (idx, c.name.as_str()))
        .take(max_columns)
        .collect();

    for (idx, name) in numeric {
        let values: Vec<f64> = table
            .column_values(idx)
            .filter(|v| !DataTable::is_missing_value(v))
            .filter_map(|v| v.trim().parse::<f64>().ok())
            .collect();

        if values.is_empty() {
            continue;
        }

        let file_name = format!("hist_{}.png", sanitize_file_name(name));
        draw_histogram(&out_dir.join(&file_name), name, &values)?;
        written.push(file_name);
    }

    Ok(written)
}

fn draw_histogram(path: &Path, name: &str, values: &[f64]) -> Result<()> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate range: widen so the single bar is visible.
    let (min, max) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };

    let bin_width = (max - min) / HIST_BINS as f64;
    let mut counts = vec![0usize; HIST_BINS];
    for &v in values {
        let mut bin = ((v - min) / bin_width) as usize;
        if bin >= HIST_BINS {
            bin = HIST_BINS - 1;
        }
        counts[bin] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Histogram: {}", name), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min..max, 0usize..(max_count + max_count / 10 + 1))?;

    chart
        .configure_mesh()
        .x_desc(name)
        .y_desc("count")
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = min + i as f64 * bin_width;
        let x1 = x0 + bin_width;
        Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.6).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Draw the missingness matrix: one cell per (row, column), filled where
/// the value is present.
pub fn plot_missing_matrix(table: &DataTable, path: &Path) -> Result<()> {
    let n_rows = table.row_count();
    let n_cols = table.column_count();
    if n_rows == 0 || n_cols == 0 {
        return Ok(());
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Missing values matrix", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0i32..n_cols as i32, 0i32..n_rows as i32)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("column")
        .y_desc("row")
        .draw()?;

    for col in 0..n_cols {
        for row in 0..n_rows {
            let value = table.get(row, col).unwrap_or("");
            let style = if DataTable::is_missing_value(value) {
                RED.mix(0.8).filled()
            } else {
                BLUE.mix(0.4).filled()
            };
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (col as i32, row as i32),
                    (col as i32 + 1, row as i32 + 1),
                ],
                style,
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Draw the correlation heatmap with a diverging blue-white-red scale.
pub fn plot_correlation_heatmap(corr: &CorrelationMatrix, path: &Path) -> Result<()> {
    let n = corr.columns.len();
    if n == 0 {
        return Ok(());
    }

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation heatmap", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0i32..n as i32, 0i32..n as i32)?;

    chart.configure_mesh().disable_mesh().draw()?;

    for i in 0..n {
        for j in 0..n {
            let v = corr.get(i, j).unwrap_or(f64::NAN);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(j as i32, i as i32), (j as i32 + 1, i as i32 + 1)],
                diverging_color(v).filled(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Map a coefficient in [-1, 1] to blue (negative) / white (zero) /
/// red (positive). NaN renders gray.
fn diverging_color(v: f64) -> RGBColor {
    if v.is_nan() {
        return RGBColor(200, 200, 200);
    }
    let v = v.clamp(-1.0, 1.0);
    if v >= 0.0 {
        let t = v;
        RGBColor(255, (255.0 * (1.0 - t)) as u8, (255.0 * (1.0 - t)) as u8)
    } else {
        let t = -v;
        RGBColor((255.0 * (1.0 - t)) as u8, (255.0 * (1.0 - t)) as u8, 255)
    }
}
