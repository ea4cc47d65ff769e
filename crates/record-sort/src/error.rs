use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecordSortError>;

#[derive(Debug, Error)]
pub enum RecordSortError {
    #[error("{0}")]
    Message(String),
    #[error("Run {run_ordinal} is not sorted by the configured comparator")]
    UnsortedRun { run_ordinal: u64 },
    #[error("Run ordinal {run_ordinal} must be greater than previous run ordinal {previous}")]
    RunOrdinal { run_ordinal: u64, previous: u64 },
    #[error("Unknown sort strategy: {value}. Must be one of name, name-age, name-desc")]
    UnknownStrategy { value: String },
}

impl RecordSortError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
