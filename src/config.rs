//! Benchmark configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Command-line flags are applied on top of the loaded file.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};
use crate::integer::MAX_COUNTING_SPAN;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub warmup_iterations: u32,
    pub bench_iterations: u32,
    pub array_size: usize,
    /// Quadratic sorters are skipped above this array size.
    pub quadratic_limit: usize,
    pub seed_count: u64,
    pub seed_base: u64,
    pub seed_stride: u64,
    pub min_value: i64,
    pub max_value: i64,
    pub bucket_count: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 10,
            bench_iterations: 100,
            array_size: 10_000,
            quadratic_limit: 5_000,
            seed_count: 200,
            seed_base: 12345,
            seed_stride: 7,
            min_value: -1_000_000,
            max_value: 1_000_000,
            bucket_count: 10,
        }
    }
}

impl BenchConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| LabError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let config: BenchConfig =
            serde_json::from_str(&contents).map_err(|e| LabError::Config {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.array_size == 0 {
            return Err(LabError::InvalidConfig("array_size must be positive".into()));
        }
        if self.bench_iterations == 0 {
            return Err(LabError::InvalidConfig(
                "bench_iterations must be positive".into(),
            ));
        }
        if self.seed_count == 0 {
            return Err(LabError::InvalidConfig("seed_count must be positive".into()));
        }
        if self.min_value > self.max_value {
            return Err(LabError::InvalidConfig(format!(
                "min_value ({}) is greater than max_value ({})",
                self.min_value, self.max_value
            )));
        }
        // counting_sort needs one counter per value in the range
        let span = self.max_value.abs_diff(self.min_value);
        if span >= MAX_COUNTING_SPAN as u64 {
            return Err(LabError::InvalidConfig(format!(
                "value range {}..={} spans more than {} values",
                self.min_value, self.max_value, MAX_COUNTING_SPAN
            )));
        }
        self.buckets()?;
        Ok(())
    }

    pub fn buckets(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.bucket_count).ok_or(LabError::InvalidBucketCount)
    }

    /// Seeds for reproducible input generation.
    pub fn seeds(&self) -> Vec<u64> {
        (0..self.seed_count)
            .map(|i| self.seed_base.wrapping_add(i.wrapping_mul(self.seed_stride)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = BenchConfig::default();
        config.validate().unwrap();
        assert_eq!(config.buckets().unwrap().get(), 10);
    }

    #[test]
    fn test_seeds() {
        let config = BenchConfig {
            seed_count: 3,
            ..BenchConfig::default()
        };
        assert_eq!(config.seeds(), vec![12345, 12352, 12359]);
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config(r#"{ "array_size": 256, "bucket_count": 4 }"#);
        let config = BenchConfig::load(file.path()).unwrap();
        assert_eq!(config.array_size, 256);
        assert_eq!(config.bucket_count, 4);
        assert_eq!(config.bench_iterations, 100);
    }

    #[test]
    fn test_load_rejects_unknown_field() {
        let file = write_config(r#"{ "array_sise": 256 }"#);
        let err = BenchConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LabError::Config { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = BenchConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LabError::Config { .. }));
    }

    #[test]
    fn test_zero_buckets() {
        let file = write_config(r#"{ "bucket_count": 0 }"#);
        let err = BenchConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LabError::InvalidBucketCount));
    }

    #[test]
    fn test_inverted_range() {
        let config = BenchConfig {
            min_value: 10,
            max_value: -10,
            ..BenchConfig::default()
        };
        assert!(matches!(config.validate(), Err(LabError::InvalidConfig(_))));
    }

    #[test]
    fn test_value_range_too_wide_for_counting_sort() {
        let file = write_config(
            r#"{ "min_value": -4000000000000000000, "max_value": 4000000000000000000 }"#,
        );
        let err = BenchConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LabError::InvalidConfig(_)));

        let full = BenchConfig {
            min_value: i64::MIN,
            max_value: i64::MAX,
            ..BenchConfig::default()
        };
        assert!(matches!(full.validate(), Err(LabError::InvalidConfig(_))));

        let widest = BenchConfig {
            min_value: 0,
            max_value: MAX_COUNTING_SPAN as i64 - 1,
            ..BenchConfig::default()
        };
        widest.validate().unwrap();
    }
}
