use super::keys::{SortRecord, SortStrategy};
use crate::Result;
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct SourceOrder {
    pub run_ordinal: u64,
    pub record_ordinal: usize,
}

#[derive(Debug)]
pub struct SortEntry<T> {
    pub source: SourceOrder,
    pub record: T,
}

#[derive(Debug)]
pub struct PendingRun<T> {
    pub entries: VecDeque<SortEntry<T>>,
}

impl<T> PendingRun<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

struct PendingHeapItem<T> {
    entry: SortEntry<T>,
    strategy: SortStrategy,
    run_index: usize,
}

// Reversed so that `BinaryHeap` pops the smallest record, then the earliest source.
impl<T: SortRecord> Ord for PendingHeapItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strategy
            .compare(&other.entry.record, &self.entry.record)
            .then_with(|| other.entry.source.cmp(&self.entry.source))
    }
}

impl<T: SortRecord> PartialOrd for PendingHeapItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: SortRecord> PartialEq for PendingHeapItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: SortRecord> Eq for PendingHeapItem<T> {}

fn interleave_runs<T, F>(
    pending_runs: &mut [PendingRun<T>],
    strategy: SortStrategy,
    emit: &mut F,
) -> Result<()>
where
    T: SortRecord,
    F: FnMut(SortEntry<T>) -> Result<()>,
{
    let mut heap = BinaryHeap::with_capacity(pending_runs.len());
    for (run_index, run) in pending_runs.iter_mut().enumerate() {
        if let Some(entry) = run.entries.pop_front() {
            heap.push(PendingHeapItem {
                entry,
                strategy,
                run_index,
            });
        }
    }

    while let Some(item) = heap.pop() {
        if let Some(next) = pending_runs[item.run_index].entries.pop_front() {
            heap.push(PendingHeapItem {
                entry: next,
                strategy,
                run_index: item.run_index,
            });
        }
        emit(item.entry)?;
    }
    Ok(())
}

/// Interleaves sorted runs into `emit`, smallest record first. Equal records
/// are emitted in source order, so the result matches a stable sort of the
/// runs concatenated by run ordinal.
///
/// `pending_runs` is empty on return, also when `emit` fails; records not yet
/// emitted at that point are dropped.
pub fn drain_pending_runs_into_sink<T, F>(
    pending_runs: &mut Vec<PendingRun<T>>,
    strategy: SortStrategy,
    mut emit: F,
) -> Result<()>
where
    T: SortRecord,
    F: FnMut(SortEntry<T>) -> Result<()>,
{
    let result = interleave_runs(pending_runs, strategy, &mut emit);
    pending_runs.clear();
    result
}
