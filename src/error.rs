//! Error type shared by the heap, the sort registry and the benchmark config.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    /// A min-heap operation needed at least one element.
    #[error("heap is empty and has no minimum item")]
    Empty,

    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("bucket count must be at least 1")]
    InvalidBucketCount,

    #[error("value span {span} is too wide for counting sort (limit {limit})")]
    SpanTooWide { span: u64, limit: usize },

    #[error("invalid benchmark config: {0}")]
    InvalidConfig(String),

    #[error("failed to load config from '{}'", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, LabError>;
