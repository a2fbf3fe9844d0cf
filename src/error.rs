//! Error types for the sheetcsv library.

use std::io;
use thiserror::Error;

/// Result type alias for sheetcsv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a worksheet.
///
/// All variants are fatal to the conversion that raised them. Cell-level
/// problems (an unparseable cell address, a shared-string index pointing
/// past the end of the table) are absorbed during parsing and never reach
/// this type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container could not be opened as a ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// A requested archive member does not exist.
    #[error("Missing archive member: {0}")]
    MissingMember(String),

    /// Worksheet or shared-string XML is not well-formed.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Structurally invalid data that is not cell-local, such as a row
    /// element with no row-number attribute.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error writing the CSV output.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
