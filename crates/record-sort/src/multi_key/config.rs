use super::keys::SortStrategy;
use crate::{RecordSortError, Result};

pub const DEFAULT_MERGE_FAN_IN: usize = 16;

#[derive(Clone, Debug)]
pub struct SortConfig {
    pub strategy: SortStrategy,
    pub merge_fan_in: usize,
}

impl SortConfig {
    pub fn new(strategy: SortStrategy, merge_fan_in: usize) -> Result<Self> {
        if merge_fan_in < 2 {
            return Err(RecordSortError::message(format!(
                "merge-fan-in ({merge_fan_in}) must be >= 2"
            )));
        }

        Ok(Self {
            strategy,
            merge_fan_in,
        })
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            strategy: SortStrategy::default(),
            merge_fan_in: DEFAULT_MERGE_FAN_IN,
        }
    }
}
