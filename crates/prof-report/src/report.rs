use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::FunctionSamples;
use crate::stats::{mean, population_stddev, sample_stddev};

pub const NAME_WIDTH: usize = 30;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub function: String,
    pub mean_ms: f64,
    pub stddev_ms: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportDocument {
    pub schema_version: u32,
    pub created_at: DateTime<Utc>,
    pub input: String,
    pub rows: Vec<ReportRow>,
}

// Runtimes are seconds on input; rows are milliseconds.
pub fn summary_rows(groups: &[FunctionSamples]) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = groups
        .iter()
        .filter_map(|group| {
            let mean_s = mean(&group.runtimes)?;
            let stddev_s = population_stddev(&group.runtimes)?;
            Some(ReportRow {
                function: group.function.clone(),
                mean_ms: mean_s * 1e3,
                stddev_ms: stddev_s * 1e3,
            })
        })
        .collect();
    // stable sort: equal means keep first-appearance order
    rows.sort_by(|a, b| {
        b.mean_ms
            .partial_cmp(&a.mean_ms)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

// Runtimes are already milliseconds; row order follows the input file.
pub fn digest_rows(groups: &[FunctionSamples]) -> Vec<ReportRow> {
    groups
        .iter()
        .filter_map(|group| {
            Some(ReportRow {
                function: group.function.clone(),
                mean_ms: mean(&group.runtimes)?,
                stddev_ms: sample_stddev(&group.runtimes)?,
            })
        })
        .collect()
}

pub fn render_summary(rows: &[ReportRow]) -> String {
    render(rows, 5)
}

pub fn render_digest(rows: &[ReportRow]) -> String {
    render(rows, 4)
}

fn render(rows: &[ReportRow], precision: usize) -> String {
    let mut out = format!("{:<width$}Mean execution time\n", "Function", width = NAME_WIDTH);
    for row in rows {
        out.push_str(&format!(
            "{:<width$}{:.prec$} +- {:.prec$} ms\n",
            row.function,
            row.mean_ms,
            row.stddev_ms,
            width = NAME_WIDTH,
            prec = precision,
        ));
    }
    out
}
