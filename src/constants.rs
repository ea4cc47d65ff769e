use record_sort::SortStrategy;

pub const DEFAULT_DATASET: &str = "employees";
pub const DEFAULT_SORT_STRATEGY: SortStrategy = SortStrategy::PrimaryThenSecondary;
pub const DEFAULT_REVERSE: bool = false;
pub const DEFAULT_CHECK_ONLY: bool = false;

pub const RECORD_FIELD_DELIMITER: char = ':';

pub const SECTION_UNSORTED: &str = "Unsorted:";
pub const SECTION_BY_NAME: &str = "Sorted by name:";
pub const SECTION_BY_NAME_AGE: &str = "Sorted by name, then age:";
pub const SECTION_BY_NAME_DESC: &str = "Sorted by name (descending):";
