use crate::{constants::*, core::dataset::Dataset, core::record::Record};
use anyhow::anyhow;
use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use record_sort::{SortStrategy, DEFAULT_MERGE_FAN_IN};
use std::io::Write;

type Result<T> = anyhow::Result<T>;

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = env!("VERGEN_GIT_DESCRIBE");
    if git_describe.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name="recsort",
          version=&**FULL_VERSION,
          about="Stable multi-key record sorter",
          long_about = None,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a built-in dataset unsorted, by name, and by name then age
    Demo(DemoArgs),
    /// Sort records given on the command line
    Sort(SortArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Demo(_) => "demo",
            Command::Sort(_) => "sort",
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Dataset to print: employees, staff or books
    #[arg(
        long = "dataset",
        value_name = "DATASET",
        default_value = DEFAULT_DATASET,
        value_parser = parse_dataset
    )]
    pub dataset: Dataset,

    /// Also print the dataset sorted by name in descending order
    #[arg(long = "reverse", default_value_t = DEFAULT_REVERSE)]
    pub reverse: bool,
}

/// A comma-separated group of records, sorted and merged as one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordBatch(pub Vec<Record>);

#[derive(Parser, Debug, Clone)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["records", "batches"]),
))]
#[command(arg_required_else_help(true))]
pub struct SortArgs {
    /// Records to sort, each as NAME:AGE[:ID]
    #[arg(
        long = "record",
        value_name = "RECORD",
        num_args = 1..,
        value_parser = parse_record
    )]
    pub records: Option<Vec<Record>>,

    /// Comma-separated batch of records (NAME:AGE[:ID],...); batches follow --record input
    #[arg(long = "batch", value_name = "BATCH", value_parser = parse_batch)]
    pub batches: Option<Vec<RecordBatch>>,

    /// Sort order: name, name-age or name-desc
    #[arg(
        long = "by",
        value_name = "STRATEGY",
        default_value_t = DEFAULT_SORT_STRATEGY,
        value_parser = parse_strategy
    )]
    pub strategy: SortStrategy,

    /// Only verify that the input is already sorted; print nothing
    #[arg(long = "check", default_value_t = DEFAULT_CHECK_ONLY)]
    pub check: bool,

    /// Maximum number of batches merged at once
    #[arg(
        long = "merge-fan-in",
        value_name = "N",
        default_value_t = DEFAULT_MERGE_FAN_IN,
        value_parser = fan_in_in_range,
        help_heading = "Advanced"
    )]
    pub merge_fan_in: usize,
}

impl SortArgs {
    /// Input records in command-line order: `--record` values first, then each `--batch`.
    pub fn runs(&self) -> Vec<Vec<Record>> {
        let mut runs = Vec::new();
        if let Some(records) = &self.records {
            runs.push(records.clone());
        }
        if let Some(batches) = &self.batches {
            runs.extend(batches.iter().map(|batch| batch.0.clone()));
        }
        runs
    }
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// Zero `-v` flags log at info, one at debug, two or more at trace.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(filter_level)
        // Sorted output goes to stdout; keep logs out of it
        .target(env_logger::Target::Stderr)
        .init();
}

fn parse_record(s: &str) -> Result<Record> {
    s.parse::<Record>().map_err(|e| anyhow!("{}", e))
}

fn parse_batch(s: &str) -> Result<RecordBatch> {
    let records = s
        .split(',')
        .map(|part| {
            if part.trim().is_empty() {
                return Err(anyhow!("Empty record in batch '{}'", s));
            }
            parse_record(part)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(RecordBatch(records))
}

fn parse_dataset(s: &str) -> Result<Dataset> {
    s.parse::<Dataset>().map_err(|e| anyhow!("{}", e))
}

fn parse_strategy(s: &str) -> Result<SortStrategy> {
    s.parse::<SortStrategy>().map_err(|e| anyhow!("{}", e))
}

fn fan_in_in_range(s: &str) -> Result<usize> {
    let fan_in: usize = s
        .parse::<usize>()
        .map_err(|_| anyhow!("`{}` is not a valid merge fan-in", s))?;
    if fan_in < 2 {
        return Err(anyhow!("Merge fan-in must be >= 2"));
    }
    Ok(fan_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn test_demo_defaults() {
        let cli = try_parse(&["recsort", "demo"]).expect("CLI parse should succeed");
        let Command::Demo(args) = cli.command else {
            panic!("expected demo command");
        };
        assert_eq!(args.dataset, Dataset::Employees);
        assert!(!args.reverse);
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_demo_dataset_and_verbosity() {
        let cli = try_parse(&["recsort", "-vv", "demo", "--dataset", "books", "--reverse"])
            .expect("CLI parse should succeed");
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.command.name(), "demo");
        let Command::Demo(args) = cli.command else {
            panic!("expected demo command");
        };
        assert_eq!(args.dataset, Dataset::Books);
        assert!(args.reverse);
    }

    #[test]
    fn test_demo_rejects_unknown_dataset() {
        let error = try_parse(&["recsort", "demo", "--dataset", "cars"])
            .expect_err("unknown dataset should fail");
        assert!(error.to_string().contains("Unknown dataset: cars"));
    }

    #[test]
    fn test_sort_records_and_strategy() {
        let cli = try_parse(&[
            "recsort", "sort", "--record", "Alpha:1", "Beta:2:7", "--by", "name-desc",
        ])
        .expect("CLI parse should succeed");
        let Command::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(args.strategy, SortStrategy::PrimaryDescending);
        assert_eq!(args.merge_fan_in, DEFAULT_MERGE_FAN_IN);
        assert!(!args.check);
        assert_eq!(
            args.runs(),
            vec![vec![Record::new("Alpha", 1), Record::with_id(7, "Beta", 2)]]
        );
    }

    #[test]
    fn test_sort_defaults_to_name_then_age() {
        let cli = try_parse(&["recsort", "sort", "--record", "Raez:32"])
            .expect("CLI parse should succeed");
        let Command::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(args.strategy, SortStrategy::PrimaryThenSecondary);
    }

    #[test]
    fn test_sort_batches_follow_records() {
        let cli = try_parse(&[
            "recsort",
            "sort",
            "--batch",
            "Sheik:61,Ammar:42",
            "--record",
            "Lafir:33",
            "--batch",
            "Ammar:37",
        ])
        .expect("CLI parse should succeed");
        let Command::Sort(args) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(
            args.runs(),
            vec![
                vec![Record::new("Lafir", 33)],
                vec![Record::new("Sheik", 61), Record::new("Ammar", 42)],
                vec![Record::new("Ammar", 37)],
            ]
        );
    }

    #[test]
    fn test_sort_requires_input() {
        assert!(try_parse(&["recsort", "sort", "--by", "name"]).is_err());
    }

    #[test]
    fn test_sort_rejects_bad_values() {
        let bad_record = try_parse(&["recsort", "sort", "--record", "Lafir"])
            .expect_err("record without age should fail");
        assert!(bad_record.to_string().contains("missing age field"));

        let bad_batch = try_parse(&["recsort", "sort", "--batch", "Lafir:3,,Raez:4"])
            .expect_err("batch with empty record should fail");
        assert!(bad_batch.to_string().contains("Empty record in batch"));

        let bad_strategy = try_parse(&["recsort", "sort", "--record", "A:1", "--by", "age"])
            .expect_err("unknown strategy should fail");
        assert!(bad_strategy.to_string().contains("Unknown sort strategy"));

        let bad_fan_in = try_parse(&[
            "recsort",
            "sort",
            "--record",
            "A:1",
            "--merge-fan-in",
            "1",
        ])
        .expect_err("fan-in below two should fail");
        assert!(bad_fan_in.to_string().contains("Merge fan-in must be >= 2"));
    }
}
