pub mod error;
pub mod multi_key;

pub use error::{RecordSortError, Result};
pub use multi_key::{
    DEFAULT_MERGE_FAN_IN, RecordSorter, SortConfig, SortKey, SortRecord, SortStrategy,
    is_sorted_by_strategy, sort_by_strategy, sorted_by_strategy,
};
