//! Line-chart rendering for benchmark series.
//!
//! One line per algorithm, the baseline at reduced opacity, a fixed y-range
//! clamp so charts stay comparable across runs, and dashed vertical lines
//! marking cache-hierarchy boundaries in log2 array-length units.

use std::path::Path;
use std::str::FromStr;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use serde::{Deserialize, Serialize};

use crate::error::{BenchplotError, Result};
use crate::series::Series;

/// A vertical reference line at a cache-hierarchy threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheBoundary {
    /// Position on the x axis, in log2 of array length
    pub log2_len: f64,
    /// Text drawn beside the line, e.g. "L1d"
    pub label: String,
}

impl FromStr for CacheBoundary {
    type Err = BenchplotError;

    /// Parse `"<pos>:<label>"`, e.g. `"27.16:L1d TLB"`.
    fn from_str(s: &str) -> Result<Self> {
        let (pos, label) = s.split_once(':').ok_or_else(|| BenchplotError::Name {
            name: s.to_string(),
            reason: "expected '<pos>:<label>'".to_string(),
        })?;
        let log2_len: f64 = pos.trim().parse().map_err(|_| BenchplotError::Name {
            name: s.to_string(),
            reason: format!("position {pos:?} is not a number"),
        })?;
        Ok(CacheBoundary {
            log2_len,
            label: label.trim().to_string(),
        })
    }
}

/// The cache hierarchy of the machine the lower_bound suite was measured on.
pub fn default_cache_boundaries() -> Vec<CacheBoundary> {
    [
        (15.0, "L1d"),
        (20.0, "L2d"),
        (25.0, "L3d"),
        (27.16, "L1d TLB"),
    ]
    .into_iter()
    .map(|(log2_len, label)| CacheBoundary {
        log2_len,
        label: label.to_string(),
    })
    .collect()
}

/// Chart appearance and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Output size in pixels
    pub width: u32,
    pub height: u32,
    /// Fixed y-axis clamp keeping cross-run charts comparable
    pub y_max: f64,
    /// Vertical reference lines; empty disables annotations
    pub boundaries: Vec<CacheBoundary>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        // 6x4 inches at 300 dpi
        Self {
            title: "lower_bound() comparison".to_string(),
            x_label: "Array Length (2^n)".to_string(),
            y_label: "Reciprocal Throughput (ns)".to_string(),
            width: 1800,
            height: 1200,
            y_max: 250.0,
            boundaries: default_cache_boundaries(),
        }
    }
}

/// Render `series` to an image file.
///
/// The backend is chosen by extension: `.svg` produces a vector file, any
/// other extension a bitmap PNG. Output is deterministic for identical
/// input.
pub fn render(path: &Path, series: &[Series], config: &ChartConfig) -> Result<()> {
    if series.is_empty() {
        return Err(BenchplotError::EmptyInput);
    }

    let svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if svg {
        let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
        draw_chart(&root, series, config)
    } else {
        let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
        draw_chart(&root, series, config)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    series: &[Series],
    config: &ChartConfig,
) -> Result<()> {
    root.fill(&WHITE)?;

    let (x_min, x_max) = x_range(series);

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 40))
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..config.y_max)?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .draw()?;

    for (idx, s) in series.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        // De-emphasize the baseline relative to candidate algorithms
        let color = if s.baseline { color.mix(0.2) } else { color };
        let style = color.stroke_width(2);

        let points: Vec<(f64, f64)> = s
            .points
            .iter()
            .map(|p| (f64::from(p.size), p.cpu_time))
            .collect();

        chart
            .draw_series(LineSeries::new(points, style))?
            .label(s.algorithm.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    let label_y = config.y_max * 0.8;
    for boundary in &config.boundaries {
        let x = boundary.log2_len;
        chart.draw_series(DashedLineSeries::new(
            [(x, 0.0), (x, config.y_max)],
            6,
            4,
            BLACK.mix(0.5).stroke_width(1),
        ))?;
        if !boundary.label.is_empty() {
            chart.draw_series(std::iter::once(Text::new(
                boundary.label.clone(),
                (x + (x_max - x_min) * 0.005, label_y),
                ("sans-serif", 24).into_font(),
            )))?;
        }
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

/// X extent of the data, padded when degenerate so plotters gets a non-empty
/// range.
fn x_range(series: &[Series]) -> (f64, f64) {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for s in series {
        for p in &s.points {
            let x = f64::from(p.size);
            min = min.min(x);
            max = max.max(x);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DataPoint;

    fn test_series() -> Vec<Series> {
        vec![
            Series {
                algorithm: "StdLowerBound".to_string(),
                points: (1..=30)
                    .map(|size| DataPoint {
                        size,
                        cpu_time: f64::from(size) * 3.0,
                    })
                    .collect(),
                baseline: true,
            },
            Series {
                algorithm: "btree".to_string(),
                points: (1..=30)
                    .map(|size| DataPoint {
                        size,
                        cpu_time: f64::from(size) * 2.0,
                    })
                    .collect(),
                baseline: false,
            },
        ]
    }

    #[test]
    fn test_boundary_from_str() {
        let b: CacheBoundary = "27.16:L1d TLB".parse().unwrap();
        assert!((b.log2_len - 27.16).abs() < 1e-9);
        assert_eq!(b.label, "L1d TLB");
    }

    #[test]
    fn test_boundary_from_str_rejects_garbage() {
        assert!("no-separator".parse::<CacheBoundary>().is_err());
        assert!("abc:L1d".parse::<CacheBoundary>().is_err());
    }

    #[test]
    fn test_default_boundaries() {
        let bounds = default_cache_boundaries();
        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds[0].label, "L1d");
        assert!((bounds[3].log2_len - 27.16).abs() < 1e-9);
    }

    #[test]
    fn test_render_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        render(&path, &test_series(), &ChartConfig::default()).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_render_svg_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.svg");
        let b = dir.path().join("b.svg");
        let series = test_series();
        let config = ChartConfig::default();
        render(&a, &series, &config).unwrap();
        render(&b, &series, &config).unwrap();
        let first = std::fs::read(&a).unwrap();
        let second = std::fs::read(&b).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_empty_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let err = render(&path, &[], &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, BenchplotError::EmptyInput));
    }

    #[test]
    fn test_x_range_degenerate() {
        let series = vec![Series {
            algorithm: "one".to_string(),
            points: vec![DataPoint {
                size: 10,
                cpu_time: 1.0,
            }],
            baseline: false,
        }];
        let (lo, hi) = x_range(&series);
        assert!(lo < 10.0 && hi > 10.0);
    }
}
