//! Per-algorithm summaries of loaded benchmark data.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;

use crate::error::Result;
use crate::series::Series;

/// Descriptive statistics for one algorithm's series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub algorithm: String,
    pub baseline: bool,
    pub points: usize,
    pub min_ns: f64,
    pub mean_ns: f64,
    pub max_ns: f64,
    /// cpu_time at the largest measured size
    pub largest_size_ns: f64,
}

/// Summarize each series. Returns zeroed stats for an empty series.
pub fn summarize(series: &[Series]) -> Vec<SeriesSummary> {
    series
        .iter()
        .map(|s| {
            let n = s.points.len();
            if n == 0 {
                return SeriesSummary {
                    algorithm: s.algorithm.clone(),
                    baseline: s.baseline,
                    points: 0,
                    min_ns: 0.0,
                    mean_ns: 0.0,
                    max_ns: 0.0,
                    largest_size_ns: 0.0,
                };
            }
            let mut min = f64::MAX;
            let mut max = f64::MIN;
            let mut sum = 0.0;
            for p in &s.points {
                min = min.min(p.cpu_time);
                max = max.max(p.cpu_time);
                sum += p.cpu_time;
            }
            SeriesSummary {
                algorithm: s.algorithm.clone(),
                baseline: s.baseline,
                points: n,
                min_ns: min,
                mean_ns: sum / n as f64,
                max_ns: max,
                // points are sorted by size at grouping time
                largest_size_ns: s.points[n - 1].cpu_time,
            }
        })
        .collect()
}

/// Format summaries as a terminal table.
pub fn format_table(summaries: &[SeriesSummary]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "Benchmark Summary (cpu_time, ns)".bold().green());
    let _ = writeln!(
        out,
        "{:<24} {:>7} {:>10} {:>10} {:>10} {:>10}",
        "algorithm".bold(),
        "points".bold(),
        "min".bold(),
        "mean".bold(),
        "max".bold(),
        "@largest".bold(),
    );

    for s in summaries {
        let name = if s.baseline {
            format!("{} (baseline)", s.algorithm).dimmed().to_string()
        } else {
            s.algorithm.cyan().to_string()
        };
        let _ = writeln!(
            out,
            "{:<24} {:>7} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            name, s.points, s.min_ns, s.mean_ns, s.max_ns, s.largest_size_ns,
        );
    }

    out
}

/// Write summaries as pretty-printed JSON.
pub fn write_json(path: &Path, summaries: &[SeriesSummary]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}
