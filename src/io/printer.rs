use crate::utils::util::Result;
use std::{fmt::Display, io::Write};

/// Writes `title` on its own line followed by one record per line.
pub fn write_section<W, R>(writer: &mut W, title: &str, records: &[R]) -> Result<()>
where
    W: Write,
    R: Display,
{
    writeln!(writer, "{title}")?;
    write_records(writer, records)
}

pub fn write_records<W, R>(writer: &mut W, records: &[R]) -> Result<()>
where
    W: Write,
    R: Display,
{
    for record in records {
        writeln!(writer, "{record}")?;
    }
    Ok(())
}
