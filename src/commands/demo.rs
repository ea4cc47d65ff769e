use crate::{
    cli::DemoArgs,
    constants::*,
    core::{dataset::Dataset, record::Record},
    io::printer::write_section,
    utils::util::Result,
};
use record_sort::{sorted_by_strategy, SortStrategy};
use std::io::{self, Write};

fn demo_sections(reverse: bool) -> Vec<(&'static str, SortStrategy)> {
    let mut sections = vec![
        (SECTION_BY_NAME, SortStrategy::Primary),
        (SECTION_BY_NAME_AGE, SortStrategy::PrimaryThenSecondary),
    ];
    if reverse {
        sections.push((SECTION_BY_NAME_DESC, SortStrategy::PrimaryDescending));
    }
    sections
}

pub fn write_demo<W: Write>(writer: &mut W, dataset: Dataset, reverse: bool) -> Result<()> {
    let records: Vec<Record> = dataset.records();
    log::debug!("Dataset {} has {} records", dataset, records.len());

    write_section(writer, SECTION_UNSORTED, &records)?;
    for (title, strategy) in demo_sections(reverse) {
        log::debug!("Sorting {} by {}", dataset, strategy);
        let sorted = sorted_by_strategy(&records, strategy);
        write_section(writer, title, &sorted)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn demo(args: DemoArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_demo(&mut writer, args.dataset, args.reverse)
}
