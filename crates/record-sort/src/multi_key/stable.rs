use super::keys::{SortRecord, SortStrategy};
use std::cmp::Ordering;

pub fn is_sorted_by_strategy<T: SortRecord>(records: &[T], strategy: SortStrategy) -> bool {
    records
        .windows(2)
        .all(|pair| strategy.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Stable in-place sort. Records that compare `Equal` under `strategy` keep
/// their input order; an already ordered input is left untouched.
pub fn sort_by_strategy<T: SortRecord>(records: &mut Vec<T>, strategy: SortStrategy) {
    if records.len() < 2 || is_sorted_by_strategy(records, strategy) {
        return;
    }

    let mut keyed_records = records.drain(..).enumerate().collect::<Vec<_>>();
    keyed_records.sort_unstable_by(|(left_idx, left), (right_idx, right)| {
        strategy
            .compare(left, right)
            .then_with(|| left_idx.cmp(right_idx))
    });
    records.extend(keyed_records.into_iter().map(|(_, record)| record));
}

/// Returns a new, stably sorted sequence and leaves `records` as it was.
pub fn sorted_by_strategy<T: SortRecord + Clone>(records: &[T], strategy: SortStrategy) -> Vec<T> {
    let mut sorted = records.to_vec();
    sort_by_strategy(&mut sorted, strategy);
    sorted
}
