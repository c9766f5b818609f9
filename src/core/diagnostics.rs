//! Terminal renderings of the training-phase diagnostics: the elbow curve,
//! the sorted k-distance curve, and the correlation matrix of the cleaned
//! training data.

use crate::domain::model::DataTable;

const BAR_WIDTH: usize = 40;
const K_DIST_SAMPLES: usize = 20;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || !value.is_finite() {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

/// Elbow curve: WCSS per cluster count, k starting at 1.
pub fn render_elbow(wcss: &[f64]) -> String {
    let mut out = String::from("Elbow Method for KMeans\n");
    if wcss.is_empty() {
        out.push_str("  (no WCSS values to plot)\n");
        return out;
    }

    let max = wcss.iter().cloned().fold(f64::MIN, f64::max);
    for (i, value) in wcss.iter().enumerate() {
        out.push_str(&format!("  k={:>2} │{} {:.1}\n", i + 1, bar(*value, max), value));
    }
    out.push_str("  (x: number of clusters, y: WCSS)\n");
    out
}

/// Sorted k-distance curve, downsampled to terminal-friendly width.
pub fn render_k_distance(values: &[f64]) -> String {
    let mut out = String::from("K-Distance Graph\n");
    if values.is_empty() {
        out.push_str("  (no k-distance values to plot)\n");
        return out;
    }

    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let step = values.len().div_ceil(K_DIST_SAMPLES).max(1);
    for (i, value) in values.iter().enumerate().step_by(step) {
        out.push_str(&format!("  #{:<6} │{} {:.3}\n", i, bar(*value, max), value));
    }
    // 曲線尾端是挑 eps 的關鍵，取樣時一定保留
    if (values.len() - 1) % step != 0 {
        let last = values[values.len() - 1];
        out.push_str(&format!("  #{:<6} │{} {:.3}\n", values.len() - 1, bar(last, max), last));
    }
    out.push_str("  (points sorted by distance, y: k-distance / eps)\n");
    out
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Pairwise Pearson correlations over the numeric columns, row-major.
pub fn correlation_matrix(table: &DataTable) -> Vec<Vec<f64>> {
    table
        .columns
        .iter()
        .map(|row| {
            table
                .columns
                .iter()
                .map(|col| pearson(&row.values, &col.values))
                .collect()
        })
        .collect()
}

fn short(name: &str) -> String {
    name.chars().take(8).collect()
}

/// Correlation matrix rendered as a rounded, labelled table.
pub fn render_correlation(table: &DataTable) -> String {
    let mut out = String::from("Correlation Matrix\n");
    if table.columns.is_empty() {
        out.push_str("  (no numeric columns in the data file)\n");
        return out;
    }

    let matrix = correlation_matrix(table);

    out.push_str(&format!("  {:<24}", ""));
    for column in &table.columns {
        out.push_str(&format!("{:>10}", short(&column.name)));
    }
    out.push('\n');

    for (row_label, row) in table.columns.iter().zip(&matrix) {
        out.push_str(&format!("  {:<24}", short_label(&row_label.name)));
        for value in row {
            out.push_str(&format!("{:>10.2}", value));
        }
        out.push('\n');
    }
    out
}

fn short_label(name: &str) -> String {
    name.chars().take(24).collect()
}
