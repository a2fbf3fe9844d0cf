//! ZIP container access for XLSX workbooks.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Read-only handle to the ZIP archive backing an XLSX workbook.
///
/// The container is owned by exactly one conversion and released when it
/// goes out of scope, on success and failure alike. It exposes archive
/// members as decoded XML strings; nothing is cached between reads.
pub struct XlsxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl XlsxContainer {
    /// Open a workbook container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sheetcsv::container::XlsxContainer;
    ///
    /// let container = XlsxContainer::open("invoices.xlsx")?;
    /// # Ok::<(), sheetcsv::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read an archive member as an XML string.
    ///
    /// A UTF-8 BOM is stripped if present; invalid UTF-8 sequences are
    /// replaced rather than rejected, since workbook exporters are not
    /// uniformly well-behaved about encoding.
    ///
    /// Returns [`Error::MissingMember`] if the member does not exist.
    pub fn read_xml(&self, member: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(member)
            .map_err(|_| Error::MissingMember(member.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let body = match bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
            Some(rest) => rest,
            None => &bytes[..],
        };
        Ok(String::from_utf8_lossy(body).into_owned())
    }

    /// Check whether a member exists in the archive.
    pub fn member_exists(&self, member: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == member);
        found
    }

    /// List all member names in the archive.
    pub fn member_names(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        let names = archive.file_names().map(String::from).collect();
        names
    }
}

impl std::fmt::Debug for XlsxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxContainer")
            .field("members", &self.member_names().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn archive_with(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in members {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body).unwrap();
        }
        zip.finish().unwrap();
        buffer
    }

    #[test]
    fn test_read_member() {
        let data = archive_with(&[("xl/worksheets/sheet1.xml", b"<worksheet/>")]);
        let container = XlsxContainer::from_bytes(data).unwrap();

        assert!(container.member_exists("xl/worksheets/sheet1.xml"));
        assert!(!container.member_exists("xl/sharedStrings.xml"));
        assert_eq!(
            container.read_xml("xl/worksheets/sheet1.xml").unwrap(),
            "<worksheet/>"
        );
    }

    #[test]
    fn test_missing_member() {
        let data = archive_with(&[("xl/workbook.xml", b"<workbook/>")]);
        let container = XlsxContainer::from_bytes(data).unwrap();

        let err = container.read_xml("xl/sharedStrings.xml").unwrap_err();
        assert!(matches!(err, Error::MissingMember(m) if m == "xl/sharedStrings.xml"));
    }

    #[test]
    fn test_from_reader() {
        let data = archive_with(&[("xl/workbook.xml", b"<workbook/>")]);
        let container = XlsxContainer::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(container.member_names(), vec!["xl/workbook.xml"]);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let data = archive_with(&[("a.xml", b"\xEF\xBB\xBF<a/>")]);
        let container = XlsxContainer::from_bytes(data).unwrap();
        assert_eq!(container.read_xml("a.xml").unwrap(), "<a/>");
    }

    #[test]
    fn test_not_a_zip() {
        let err = XlsxContainer::from_bytes(b"not a zip archive".to_vec()).unwrap_err();
        assert!(matches!(err, Error::ZipArchive(_)));
    }
}
