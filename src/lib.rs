//! # sheetcsv
//!
//! Minimal XLSX worksheet extraction to CSV.
//!
//! An XLSX workbook is a ZIP archive of XML parts. This library opens the
//! archive, resolves the shared string pool, reconstructs one worksheet's
//! sparse cell data into a dense matrix, and writes it out as UTF-8 CSV.
//! It is built for small, one-off conversions inside a larger pipeline,
//! not as a reusable spreadsheet engine: no formula evaluation (formula
//! source text is preserved verbatim), no styling, no writing workbooks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetcsv::{convert_to_csv, ConvertOptions};
//!
//! let options = ConvertOptions::for_sheet("xl/worksheets/sheet1.xml");
//! convert_to_csv("invoices.xlsx", "invoices.csv", &options)?;
//! # Ok::<(), sheetcsv::Error>(())
//! ```
//!
//! ## Inspecting the matrix instead of writing a file
//!
//! ```no_run
//! use sheetcsv::{read_matrix, ConvertOptions};
//!
//! let options = ConvertOptions::for_sheet("xl/worksheets/sheet1.xml");
//! let matrix = read_matrix("invoices.xlsx", &options)?;
//! println!("{} rows x {} cols", matrix.len(), matrix.first().map_or(0, Vec::len));
//! # Ok::<(), sheetcsv::Error>(())
//! ```

pub mod address;
pub mod container;
pub mod error;
pub mod matrix;
pub mod options;
pub mod output;
pub mod shared_strings;
pub mod sheet;

// Re-exports
pub use address::{column_index, CellRef};
pub use container::XlsxContainer;
pub use error::{Error, Result};
pub use matrix::SparseSheet;
pub use options::{ConvertOptions, DEFAULT_SHARED_STRINGS};
pub use shared_strings::SharedStrings;

use std::path::Path;

/// Read one worksheet from a workbook file into a dense matrix.
///
/// Every row in the result has the same length; absent cells are empty
/// strings. A worksheet with no cell data yields an empty matrix.
pub fn read_matrix(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<Vec<Vec<String>>> {
    let container = XlsxContainer::open(path)?;
    matrix_from_container(&container, options)
}

/// Read one worksheet from in-memory workbook bytes into a dense matrix.
pub fn matrix_from_bytes(data: Vec<u8>, options: &ConvertOptions) -> Result<Vec<Vec<String>>> {
    let container = XlsxContainer::from_bytes(data)?;
    matrix_from_container(&container, options)
}

/// Convert one worksheet of a workbook file to a CSV file.
///
/// The destination is created or overwritten. On any fatal error before
/// serialization starts, no output file is written; header row content
/// and column order come through exactly as authored in the sheet.
///
/// # Example
///
/// ```no_run
/// use sheetcsv::{convert_to_csv, ConvertOptions};
///
/// let options = ConvertOptions::for_sheet("xl/worksheets/sheet1.xml");
/// convert_to_csv("Documentos.xlsx", "PAP.csv", &options)?;
/// # Ok::<(), sheetcsv::Error>(())
/// ```
pub fn convert_to_csv(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let matrix = read_matrix(input, options)?;
    output::write_csv(&matrix, output)
}

/// The shared pipeline: load strings, parse the sheet, densify.
///
/// The container handle drops at the end of the enclosing call whatever
/// the outcome, so the archive is never held across conversions.
fn matrix_from_container(
    container: &XlsxContainer,
    options: &ConvertOptions,
) -> Result<Vec<Vec<String>>> {
    let strings = SharedStrings::load(container, &options.shared_strings)?;
    let xml = container.read_xml(&options.worksheet)?;
    let sheet = sheet::parse_worksheet(&xml, &strings)?;
    Ok(sheet.to_dense())
}
