use super::{
    config::SortConfig,
    keys::SortRecord,
    pending::{PendingRun, SortEntry, SourceOrder, drain_pending_runs_into_sink},
    stable::{is_sorted_by_strategy, sort_by_strategy},
};
use crate::{RecordSortError, Result};
use std::collections::VecDeque;

const LOG_PREFIX: &str = "record-sort";

#[cfg(feature = "logging")]
macro_rules! sorter_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! sorter_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Collects ordered runs of records and emits them as one stably ordered stream.
///
/// Runs are identified by strictly increasing ordinals. Records with equal keys
/// come out in (run ordinal, position within run) order, which makes the output
/// identical to a stable sort of all runs concatenated.
#[derive(Debug)]
pub struct RecordSorter<T> {
    config: SortConfig,
    pending_runs: Vec<PendingRun<T>>,
    pending_records: usize,
    last_run_ordinal: Option<u64>,
}

impl<T: SortRecord> RecordSorter<T> {
    pub fn new(config: SortConfig) -> Result<Self> {
        let config = SortConfig::new(config.strategy, config.merge_fan_in)?;
        sorter_debug!(
            "{LOG_PREFIX}: initialized sorter strategy={} merge_fan_in={}",
            config.strategy,
            config.merge_fan_in
        );

        Ok(Self {
            config,
            pending_runs: Vec::new(),
            pending_records: 0,
            last_run_ordinal: None,
        })
    }

    pub fn pending_records(&self) -> usize {
        self.pending_records
    }

    pub fn pending_run_count(&self) -> usize {
        self.pending_runs.len()
    }

    /// Sorts `records` with the configured strategy and buffers them as one run.
    pub fn push_batch(&mut self, run_ordinal: u64, mut records: Vec<T>) -> Result<()> {
        sort_by_strategy(&mut records, self.config.strategy);
        self.push_sorted_run(run_ordinal, records)
    }

    /// Buffers a run that is already ordered by the configured strategy.
    pub fn push_sorted_run(&mut self, run_ordinal: u64, records: Vec<T>) -> Result<()> {
        if let Some(previous) = self.last_run_ordinal {
            if run_ordinal <= previous {
                return Err(RecordSortError::RunOrdinal {
                    run_ordinal,
                    previous,
                });
            }
        }

        if !is_sorted_by_strategy(&records, self.config.strategy) {
            return Err(RecordSortError::UnsortedRun { run_ordinal });
        }

        self.last_run_ordinal = Some(run_ordinal);
        if records.is_empty() {
            return Ok(());
        }

        let entries = records
            .into_iter()
            .enumerate()
            .map(|(record_ordinal, record)| SortEntry {
                source: SourceOrder {
                    run_ordinal,
                    record_ordinal,
                },
                record,
            })
            .collect::<VecDeque<_>>();
        let record_count = entries.len();

        self.pending_records = self.pending_records.saturating_add(record_count);
        self.pending_runs.push(PendingRun { entries });
        sorter_debug!(
            "{LOG_PREFIX}: buffered run={} records={} pending_runs={} pending_records={}",
            run_ordinal,
            record_count,
            self.pending_runs.len(),
            self.pending_records
        );

        if self.pending_runs.len() > self.config.merge_fan_in {
            sorter_debug!(
                "{LOG_PREFIX}: fan-in exceeded after run={} (pending_runs={}/{}), compacting",
                run_ordinal,
                self.pending_runs.len(),
                self.config.merge_fan_in
            );
            self.compact_pending_runs()?;
        }
        Ok(())
    }

    fn compact_pending_runs(&mut self) -> Result<()> {
        let fan_in = self.config.merge_fan_in;
        while self.pending_runs.len() > fan_in {
            let mut chunk = self.pending_runs.drain(0..fan_in).collect::<Vec<_>>();
            let mut merged = VecDeque::with_capacity(chunk.iter().map(PendingRun::len).sum());
            drain_pending_runs_into_sink(&mut chunk, self.config.strategy, |entry| {
                merged.push_back(entry);
                Ok(())
            })?;
            sorter_debug!(
                "{LOG_PREFIX}: compacted {} runs into one run of {} records",
                fan_in,
                merged.len()
            );
            self.pending_runs.push(PendingRun { entries: merged });
        }
        Ok(())
    }

    fn drain_into<F>(&mut self, mut emit: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        sorter_debug!(
            "{LOG_PREFIX}: merging {} runs ({} records) into final output",
            self.pending_runs.len(),
            self.pending_records
        );
        let result =
            drain_pending_runs_into_sink(&mut self.pending_runs, self.config.strategy, |entry| {
                emit(entry.record)
            });
        self.pending_records = 0;
        result
    }

    /// Emits every buffered record in order. The sorter is empty afterwards and
    /// accepts further runs with larger ordinals. If `emit_record` fails, the
    /// error is returned and the records not yet emitted are discarded.
    pub fn finish_with<F>(&mut self, mut emit_record: F) -> Result<()>
    where
        F: FnMut(&T) -> Result<()>,
    {
        self.drain_into(|record| emit_record(&record))
    }

    pub fn finish(mut self) -> Result<Vec<T>> {
        let mut records = Vec::with_capacity(self.pending_records);
        self.drain_into(|record| {
            records.push(record);
            Ok(())
        })?;
        Ok(records)
    }
}
