//! Grouping of benchmark records into per-algorithm series.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{parse_benchmark_name, BenchRecord, DataPoint};

/// All measurements for one algorithm, sorted by input size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Display name: benchmark name with the `BM_` prefix and size stripped
    pub algorithm: String,
    /// Measurements in ascending size order
    pub points: Vec<DataPoint>,
    /// Baseline series are rendered de-emphasized
    pub baseline: bool,
}

/// Group records by derived algorithm.
///
/// Grouping is stable: series appear in first-appearance order of their
/// algorithm in the input, and the per-size insertion order is preserved by
/// the sort for equal sizes. Records were validated at load time, so a parse
/// failure here is propagated rather than skipped.
pub fn group_by_algorithm(records: &[BenchRecord], baseline: &str) -> Result<Vec<Series>> {
    let mut series: Vec<Series> = Vec::new();

    for record in records {
        let (algorithm, size) = parse_benchmark_name(&record.name)?;
        let point = DataPoint {
            size,
            cpu_time: record.cpu_time,
        };

        match series.iter_mut().find(|s| s.algorithm == algorithm) {
            Some(s) => s.points.push(point),
            None => series.push(Series {
                baseline: algorithm == baseline,
                algorithm,
                points: vec![point],
            }),
        }
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.size);
    }

    Ok(series)
}
