//! CSV serialization of the dense matrix.

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Write a dense matrix as UTF-8, comma-delimited CSV to a file.
///
/// One record per row. Fields containing delimiters, quotes, or line
/// breaks get standard RFC 4180 quoting. An existing destination is
/// overwritten. There is no partial-write recovery: a failure mid-write
/// leaves whatever made it to disk, and the caller treats that as fatal.
pub fn write_csv(matrix: &[Vec<String>], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;
    write_records(&mut writer, matrix)
}

/// Write a dense matrix as CSV to any writer.
pub fn write_csv_to<W: Write>(matrix: &[Vec<String>], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    write_records(&mut writer, matrix)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, matrix: &[Vec<String>]) -> Result<()> {
    for row in matrix {
        writer.write_record(row)?;
    }
    writer.flush().map_err(crate::error::Error::Io)?;
    Ok(())
}
