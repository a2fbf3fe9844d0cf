//! Worksheet XML parsing into a sparse sheet.

use crate::address::CellRef;
use crate::error::{Error, Result};
use crate::matrix::SparseSheet;
use crate::shared_strings::SharedStrings;
use quick_xml::events::{BytesStart, Event};

/// Which text node of the current cell is being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    None,
    Value,
    Formula,
    Inline,
}

/// State for the cell element currently being parsed.
#[derive(Debug, Default)]
struct PendingCell {
    /// Column from the cell's `r` attribute; `None` drops the cell.
    col: Option<u32>,
    /// Value of the cell's `t` attribute, e.g. `s` or `inlineStr`.
    cell_type: Option<String>,
    value: String,
    formula: String,
    has_formula: bool,
    inline: String,
}

impl PendingCell {
    /// Collapse the captured pieces into the text this cell emits.
    ///
    /// Precedence: formula source text verbatim (never evaluated), then a
    /// shared-string lookup for `t="s"` cells, then inline-string text,
    /// then the raw value. A cell with none of these is the empty string.
    fn resolve(self, strings: &SharedStrings) -> String {
        if self.has_formula && !self.formula.is_empty() {
            return self.formula;
        }
        match self.cell_type.as_deref() {
            Some("s") => match self.value.parse::<usize>() {
                Ok(idx) => strings.resolve(idx).to_string(),
                Err(_) => String::new(),
            },
            Some("inlineStr") => self.inline,
            _ => self.value,
        }
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Parse the row-number attribute of a `<row>` element.
///
/// Rows can be sparse and out of order in the source, so the declared
/// index is authoritative; positional counting would misplace every row
/// after the first gap. A row without a usable index is not cell-local
/// damage and fails the conversion.
fn row_index(e: &BytesStart<'_>) -> Result<u32> {
    let raw = attribute(e, b"r")
        .ok_or_else(|| Error::InvalidData("row element without r attribute".to_string()))?;
    raw.parse::<u32>()
        .map_err(|_| Error::InvalidData(format!("row index is not a number: {raw}")))
}

/// Parse one worksheet's XML into a [`SparseSheet`].
///
/// Cells whose `r` attribute does not parse as an A1-style reference are
/// dropped silently and parsing continues; everything else about the
/// worksheet must be well-formed.
pub fn parse_worksheet(xml: &str, strings: &SharedStrings) -> Result<SparseSheet> {
    let mut sheet = SparseSheet::new();
    // Text is captured untrimmed: cell content keeps its authored
    // whitespace, and markup indentation never reaches a capture buffer
    // because captures only open inside value elements.
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut current_row: Option<u32> = None;
    let mut cell: Option<PendingCell> = None;
    let mut capture = Capture::None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"row" => {
                    let row = row_index(e)?;
                    sheet.mark_row(row);
                    current_row = Some(row);
                }
                b"c" if current_row.is_some() => {
                    cell = Some(PendingCell {
                        col: attribute(e, b"r").and_then(|r| CellRef::parse(&r)).map(|r| r.col),
                        cell_type: attribute(e, b"t"),
                        ..Default::default()
                    });
                }
                b"v" if cell.is_some() => capture = Capture::Value,
                b"f" if cell.is_some() => {
                    if let Some(c) = cell.as_mut() {
                        c.has_formula = true;
                    }
                    capture = Capture::Formula;
                }
                b"t" if cell.is_some() => capture = Capture::Inline,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                // A row or cell with no children still claims its index,
                // which feeds the dense matrix dimensions.
                b"row" => {
                    sheet.mark_row(row_index(e)?);
                }
                b"c" => {
                    if let (Some(row), Some(reference)) = (current_row, attribute(e, b"r")) {
                        if let Some(cell_ref) = CellRef::parse(&reference) {
                            sheet.insert(row, cell_ref.col, String::new());
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if let Some(c) = cell.as_mut() {
                    let text = e.unescape().unwrap_or_default();
                    match capture {
                        Capture::Value => c.value.push_str(&text),
                        Capture::Formula => c.formula.push_str(&text),
                        Capture::Inline => c.inline.push_str(&text),
                        Capture::None => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"row" => current_row = None,
                b"c" => {
                    if let Some(pending) = cell.take() {
                        if let (Some(row), Some(col)) = (current_row, pending.col) {
                            sheet.insert(row, col, pending.resolve(strings));
                        }
                    }
                }
                b"v" | b"f" | b"t" => capture = Capture::None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(sheet)
}
