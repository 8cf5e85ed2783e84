//! Benchmark records and structured name parsing.

use serde::{Deserialize, Serialize};

use crate::error::{BenchplotError, Result};

/// Benchmark-name convention prefix stripped before display.
pub const NAME_PREFIX: &str = "BM_";

/// One row of a Google Benchmark CSV results file.
///
/// Extra columns (iterations, real_time, time_unit, ...) are ignored by the
/// deserializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchRecord {
    /// Raw benchmark name, e.g. `BM_QuickSort/1024`
    pub name: String,
    /// Measured CPU time per operation, in nanoseconds
    pub cpu_time: f64,
}

/// A single measurement within one algorithm's series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Input size token from the benchmark name (log2 of array length for
    /// the lower_bound suite)
    pub size: u32,
    /// Measured CPU time in nanoseconds
    pub cpu_time: f64,
}

/// Split a benchmark name into `(algorithm, size)`.
///
/// The fixed `BM_` prefix is stripped when present and the trailing
/// `/<digits>` segment becomes the size. No regex: the name is split on the
/// last `/` so templated names like `BM_bplus<4>/16` keep their parameters
/// in the algorithm part.
pub fn parse_benchmark_name(raw: &str) -> Result<(String, u32)> {
    let stripped = raw.strip_prefix(NAME_PREFIX).unwrap_or(raw);

    let (algorithm, size_token) = stripped.rsplit_once('/').ok_or_else(|| BenchplotError::Name {
        name: raw.to_string(),
        reason: "missing '/<size>' segment".to_string(),
    })?;

    if algorithm.is_empty() {
        return Err(BenchplotError::Name {
            name: raw.to_string(),
            reason: "empty algorithm name".to_string(),
        });
    }

    let size: u32 = size_token.parse().map_err(|_| BenchplotError::Name {
        name: raw.to_string(),
        reason: format!("size token {size_token:?} is not an unsigned integer"),
    })?;

    Ok((algorithm.to_string(), size))
}
