//! CSV loading for benchmark results.

use std::path::Path;

use tracing::warn;

use crate::error::{BenchplotError, Result};
use crate::record::BenchRecord;

/// Outcome of loading a results file.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Rows with a well-formed name and finite cpu_time
    pub records: Vec<BenchRecord>,
    /// Rows dropped because their name did not parse or cpu_time was not finite
    pub skipped: usize,
}

/// Load benchmark records from a CSV file with at least `name` and
/// `cpu_time` columns.
///
/// A missing file or missing required headers is fatal. Rows whose name does
/// not follow the `[BM_]<algorithm>/<size>` shape, or whose cpu_time is NaN
/// or infinite, are skipped with a warning and counted in the report.
pub fn load_csv(path: &Path) -> Result<LoadReport> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<BenchRecord>() {
        let record = match row {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "skipping unreadable CSV row");
                skipped += 1;
                continue;
            }
        };

        if !record.cpu_time.is_finite() {
            warn!(name = %record.name, "skipping row with non-finite cpu_time");
            skipped += 1;
            continue;
        }

        if let Err(e) = crate::record::parse_benchmark_name(&record.name) {
            warn!(error = %e, "skipping row with malformed benchmark name");
            skipped += 1;
            continue;
        }

        records.push(record);
    }

    if records.is_empty() {
        return Err(BenchplotError::EmptyInput);
    }

    Ok(LoadReport { records, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_basic() {
        let (_dir, path) = write_csv(
            "name,iterations,real_time,cpu_time,time_unit\n\
             BM_lower_bound/1,1000,2.1,2.0,ns\n\
             BM_lower_bound/2,1000,2.6,2.5,ns\n",
        );
        let report = load_csv(&path).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.records[0].name, "BM_lower_bound/1");
        assert!((report.records[1].cpu_time - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_load_skips_malformed_names() {
        let (_dir, path) = write_csv(
            "name,cpu_time\n\
             BM_btree/4,10.0\n\
             not-a-benchmark,11.0\n\
             BM_btree/5,12.0\n",
        );
        let report = load_csv(&path).unwrap();
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_load_skips_non_finite_cpu_time() {
        let (_dir, path) = write_csv(
            "name,cpu_time\n\
             BM_btree/4,NaN\n\
             BM_btree/5,12.0\n",
        );
        let report = load_csv(&path).unwrap();
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, BenchplotError::Csv(_)));
    }

    #[test]
    fn test_load_all_rows_bad_is_fatal() {
        let (_dir, path) = write_csv("name,cpu_time\nbroken,1.0\n");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, BenchplotError::EmptyInput));
    }

    #[test]
    fn test_load_extra_columns_ignored() {
        let (_dir, path) = write_csv(
            "name,iterations,cpu_time,label,error_occurred\n\
             BM_bplus/7,100,33.3,,\n",
        );
        let report = load_csv(&path).unwrap();
        assert_eq!(report.records.len(), 1);
    }
}
