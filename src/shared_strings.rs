//! Shared string table loading.
//!
//! XLSX workbooks deduplicate cell text into a pool part referenced by
//! index from worksheet cells. The pool is optional: a workbook whose
//! cells are all numbers or inline values simply ships without it.

use crate::container::XlsxContainer;
use crate::error::Result;

/// Ordered, 0-indexed pool of shared strings, built once per conversion.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    strings: Vec<String>,
}

impl SharedStrings {
    /// Load the shared string pool from an archive member.
    ///
    /// An absent member is not an error: it yields an empty table, and any
    /// shared-string-typed cell will later resolve to the empty string.
    pub fn load(container: &XlsxContainer, member: &str) -> Result<Self> {
        if !container.member_exists(member) {
            return Ok(Self::default());
        }
        let xml = container.read_xml(member)?;
        Self::parse(&xml)
    }

    /// Parse a shared string pool from XML content.
    ///
    /// Each `<si>` item may split one logical string across several `<t>`
    /// text nodes when the source applied different formatting to parts of
    /// it (rich-text runs). All `<t>` text under an item is concatenated in
    /// document order; taking only the first node would truncate such
    /// strings.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        // No text trimming: a pool item may carry meaningful leading or
        // trailing spaces (xml:space="preserve"), and indentation between
        // elements never lands in an item because capture only opens
        // inside <t>.
        let mut reader = quick_xml::Reader::from_str(xml);

        let mut buf = Vec::new();
        let mut in_item = false;
        let mut in_text = false;
        let mut current = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        in_item = true;
                        current.clear();
                    }
                    b"t" if in_item => in_text = true,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Text(e)) => {
                    if in_text {
                        let text = e.unescape().unwrap_or_default();
                        current.push_str(&text);
                    }
                }
                Ok(quick_xml::events::Event::End(e)) => match e.local_name().as_ref() {
                    b"si" => {
                        strings.push(std::mem::take(&mut current));
                        in_item = false;
                    }
                    b"t" => in_text = false,
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { strings })
    }

    /// Resolve an index to its string, or `""` when out of range.
    ///
    /// Worksheets produced by sloppy exporters occasionally reference past
    /// the end of the pool; that is absorbed here rather than failing the
    /// whole conversion.
    pub fn resolve(&self, index: usize) -> &str {
        self.strings.get(index).map(String::as_str).unwrap_or("")
    }

    /// Number of strings in the pool.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_items() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="3" uniqueCount="3">
    <si><t>Folio</t></si>
    <si><t>Rut Emisor</t></si>
    <si><t>URL</t></si>
</sst>"#;

        let pool = SharedStrings::parse(xml).unwrap();
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.resolve(0), "Folio");
        assert_eq!(pool.resolve(1), "Rut Emisor");
        assert_eq!(pool.resolve(2), "URL");
    }

    #[test]
    fn test_rich_text_runs_reassemble() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <si>
        <r><rPr><b/></rPr><t>Fac</t></r>
        <r><t>tura</t></r>
    </si>
</sst>"#;

        let pool = SharedStrings::parse(xml).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.resolve(0), "Factura");
    }

    #[test]
    fn test_preserved_spaces_survive() {
        let xml = r#"<sst><si><t xml:space="preserve"> padded </t></si></sst>"#;
        let pool = SharedStrings::parse(xml).unwrap();
        assert_eq!(pool.resolve(0), " padded ");
    }

    #[test]
    fn test_not_well_formed_is_fatal() {
        let err = SharedStrings::parse(r#"<sst><si><t>a</si></sst>"#).unwrap_err();
        assert!(matches!(err, crate::Error::XmlParse(_)));
    }

    #[test]
    fn test_out_of_range_resolves_empty() {
        let xml = r#"<sst><si><t>a</t></si><si><t>b</t></si></sst>"#;
        let pool = SharedStrings::parse(xml).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.resolve(99), "");
    }

    #[test]
    fn test_empty_pool() {
        let pool = SharedStrings::default();
        assert!(pool.is_empty());
        assert_eq!(pool.resolve(0), "");
    }
}
