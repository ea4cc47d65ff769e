mod config;
mod keys;
mod pending;
mod sorter;
mod stable;

pub use config::{DEFAULT_MERGE_FAN_IN, SortConfig};
pub use keys::{SortKey, SortRecord, SortStrategy};
pub use sorter::RecordSorter;
pub use stable::{is_sorted_by_strategy, sort_by_strategy, sorted_by_strategy};
