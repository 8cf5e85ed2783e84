//! Comparison charts for Google Benchmark CSV results.
//!
//! Loads a results CSV (`name`, `cpu_time` columns), derives
//! `(algorithm, size)` from each benchmark name, groups rows into
//! per-algorithm series, and renders a line chart with cache-hierarchy
//! boundary annotations.

pub mod chart;
pub mod error;
pub mod loader;
pub mod record;
pub mod series;
pub mod summary;

pub use chart::{default_cache_boundaries, render, CacheBoundary, ChartConfig};
pub use error::{BenchplotError, Result};
pub use loader::{load_csv, LoadReport};
pub use record::{parse_benchmark_name, BenchRecord, DataPoint};
pub use series::{group_by_algorithm, Series};
pub use summary::{format_table, summarize, write_json, SeriesSummary};
