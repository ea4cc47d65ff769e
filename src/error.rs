use record_sort::{RecordSortError, SortStrategy};
use thiserror::Error;

pub type RecsortResult<T> = std::result::Result<T, RecsortError>;

#[derive(Debug, Error)]
pub enum RecsortError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Sort(#[from] RecordSortError),
    #[error("Invalid record '{value}': {reason}. Expected 'NAME:AGE[:ID]'")]
    InvalidRecord { value: String, reason: String },
    #[error("Unknown dataset: {value}. Must be one of {}", crate::core::dataset::Dataset::NAMES.join(", "))]
    UnknownDataset { value: String },
    #[error("Records are not sorted by {strategy}: {left} comes before {right}")]
    NotSorted {
        strategy: SortStrategy,
        left: String,
        right: String,
    },
}

impl RecsortError {
    pub fn invalid_record(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
