use crate::{
    cli::SortArgs,
    core::record::Record,
    error::RecsortError,
    io::printer::write_records,
    utils::util::Result,
};
use record_sort::{RecordSorter, SortConfig, SortStrategy, is_sorted_by_strategy};
use std::{
    cmp::Ordering,
    io::{self, Write},
};

/// Fails with the first adjacent pair that `strategy` puts out of order.
pub fn check_sorted(records: &[Record], strategy: SortStrategy) -> Result<()> {
    if is_sorted_by_strategy(records, strategy) {
        return Ok(());
    }
    let Some(pair) = records
        .windows(2)
        .find(|pair| strategy.compare(&pair[0], &pair[1]) == Ordering::Greater)
    else {
        return Ok(());
    };
    Err(RecsortError::NotSorted {
        strategy,
        left: pair[0].to_string(),
        right: pair[1].to_string(),
    })
}

/// Sorts every run as one collection and writes the result, one record per line.
pub fn write_sorted<W: Write>(
    writer: &mut W,
    runs: Vec<Vec<Record>>,
    config: SortConfig,
) -> Result<()> {
    let mut sorter = RecordSorter::new(config)?;
    for (run_ordinal, run) in runs.into_iter().enumerate() {
        log::debug!("Buffering run {} with {} records", run_ordinal, run.len());
        sorter.push_batch(run_ordinal as u64, run)?;
    }

    let sorted = sorter.finish()?;
    write_records(writer, &sorted)?;
    writer.flush()?;
    Ok(())
}

pub fn sort(args: SortArgs) -> Result<()> {
    let runs = args.runs();
    let total: usize = runs.iter().map(Vec::len).sum();
    log::info!(
        "Sorting {} records in {} runs by {}",
        total,
        runs.len(),
        args.strategy
    );

    if args.check {
        let records = runs.into_iter().flatten().collect::<Vec<_>>();
        check_sorted(&records, args.strategy)?;
        log::info!("Records are sorted by {}", args.strategy);
        return Ok(());
    }

    let config = SortConfig::new(args.strategy, args.merge_fan_in)?;
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_sorted(&mut writer, runs, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::util::init_logger;

    fn sorted_output(runs: Vec<Vec<Record>>, strategy: SortStrategy, fan_in: usize) -> String {
        init_logger();
        let mut buffer = Vec::new();
        let config = SortConfig::new(strategy, fan_in).expect("sort config should initialize");
        write_sorted(&mut buffer, runs, config).expect("sorted records should be written");
        String::from_utf8(buffer).expect("sorted output should be UTF-8")
    }

    #[test]
    fn test_write_sorted_single_run() {
        let runs = vec![vec![
            Record::new("Lafir", 33),
            Record::new("Lafir", 23),
            Record::new("Raez", 32),
        ]];
        assert_eq!(
            sorted_output(runs, SortStrategy::PrimaryThenSecondary, 16),
            "{name='Lafir', age=23}\n{name='Lafir', age=33}\n{name='Raez', age=32}\n"
        );
    }

    #[test]
    fn test_write_sorted_merges_runs_stably() {
        let runs = vec![
            vec![Record::with_id(1, "Ammar", 42)],
            vec![Record::with_id(2, "Sheik", 61), Record::with_id(3, "Ammar", 37)],
            vec![Record::with_id(4, "Ammar", 42)],
        ];
        assert_eq!(
            sorted_output(runs, SortStrategy::Primary, 2),
            "{id=1, name='Ammar', age=42}\n\
             {id=3, name='Ammar', age=37}\n\
             {id=4, name='Ammar', age=42}\n\
             {id=2, name='Sheik', age=61}\n"
        );
    }

    #[test]
    fn test_write_sorted_descending() {
        let runs = vec![vec![Record::new("Alpha", 1), Record::new("Beta", 2)]];
        assert_eq!(
            sorted_output(runs, SortStrategy::PrimaryDescending, 16),
            "{name='Beta', age=2}\n{name='Alpha', age=1}\n"
        );
    }

    #[test]
    fn test_write_sorted_no_records() {
        assert_eq!(
            sorted_output(vec![Vec::new()], SortStrategy::Primary, 16),
            ""
        );
    }

    #[test]
    fn test_check_sorted_reports_first_inversion() {
        let records = vec![
            Record::new("Ammar", 42),
            Record::new("Ammar", 37),
            Record::new("Sheik", 61),
        ];
        assert!(check_sorted(&records, SortStrategy::Primary).is_ok());

        let error = check_sorted(&records, SortStrategy::PrimaryThenSecondary)
            .expect_err("age inversion should be reported");
        assert_eq!(
            error.to_string(),
            "Records are not sorted by name-age: {name='Ammar', age=42} comes before {name='Ammar', age=37}"
        );
    }

    #[test]
    fn test_check_sorted_accepts_trivial_and_finds_later_inversion() {
        assert!(check_sorted(&[], SortStrategy::PrimaryDescending).is_ok());
        assert!(check_sorted(&[Record::new("Raez", 32)], SortStrategy::Primary).is_ok());

        let records = vec![
            Record::new("Beta", 2),
            Record::new("Alpha", 1),
            Record::new("Gamma", 3),
        ];
        assert!(check_sorted(&records, SortStrategy::PrimaryDescending).is_err());
        let error = check_sorted(&records, SortStrategy::Primary)
            .expect_err("name inversion should be reported");
        assert!(
            error
                .to_string()
                .contains("{name='Beta', age=2} comes before {name='Alpha', age=1}")
        );
    }
}
