//! Cell address parsing for A1-style references.

/// Convert a column letter sequence to its 1-based column index.
///
/// Columns are a bijective base-26 numeral: `A`→1, `Z`→26, `AA`→27,
/// `AZ`→52, `BA`→53. The input must be one or more uppercase ASCII
/// letters naming a column that fits in `u32`; anything else is a caller
/// error and produces an unspecified index rather than a panic.
pub fn column_index(letters: &str) -> u32 {
    checked_column_index(letters).unwrap_or(0)
}

/// Base-26 accumulation with overflow detection.
///
/// Seven uppercase letters already exceed `u32::MAX`, so a grammar-valid
/// reference can still name an impossible column; that must surface as a
/// parse failure, not a panic or a wrapped-around index.
fn checked_column_index(letters: &str) -> Option<u32> {
    letters.bytes().try_fold(0u32, |acc, b| {
        let digit = u32::from(b.wrapping_sub(b'A')) + 1;
        acc.checked_mul(26)?.checked_add(digit)
    })
}

/// A parsed cell reference: 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    /// Parse an A1-style reference like `BC12`.
    ///
    /// Grammar: one or more uppercase ASCII letters (the column), followed
    /// by one or more ASCII digits (the row), with nothing before or after.
    /// Returns `None` for anything that does not match, including a row of
    /// zero and a column or row too large for `u32`; callers drop such
    /// cells and keep parsing.
    pub fn parse(reference: &str) -> Option<CellRef> {
        let split = reference.bytes().position(|b| !b.is_ascii_uppercase())?;
        let (letters, digits) = reference.split_at(split);
        if letters.is_empty() || digits.is_empty() {
            return None;
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row: u32 = digits.parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(CellRef {
            row,
            col: checked_column_index(letters)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_single_letters() {
        assert_eq!(column_index("A"), 1);
        assert_eq!(column_index("B"), 2);
        assert_eq!(column_index("Z"), 26);
    }

    #[test]
    fn test_column_index_multi_letters() {
        assert_eq!(column_index("AA"), 27);
        assert_eq!(column_index("AZ"), 52);
        assert_eq!(column_index("BA"), 53);
        assert_eq!(column_index("ZZ"), 702);
        assert_eq!(column_index("AAA"), 703);
    }

    #[test]
    fn test_column_index_strictly_increasing() {
        let order = ["A", "B", "Z", "AA", "AB", "AZ", "BA", "ZZ", "AAA"];
        let indices: Vec<u32> = order.iter().map(|s| column_index(s)).collect();
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_valid_refs() {
        assert_eq!(CellRef::parse("A1"), Some(CellRef { row: 1, col: 1 }));
        assert_eq!(CellRef::parse("B3"), Some(CellRef { row: 3, col: 2 }));
        assert_eq!(CellRef::parse("BC12"), Some(CellRef { row: 12, col: 55 }));
        assert_eq!(
            CellRef::parse("AA100"),
            Some(CellRef { row: 100, col: 27 })
        );
    }

    #[test]
    fn test_parse_rejects_overflowing_column() {
        // Seven letters exceed u32; must fail cleanly, not wrap or panic.
        assert_eq!(CellRef::parse("ZZZZZZZ1"), None);
        assert_eq!(CellRef::parse("AAAAAAAAAA1"), None);
        // The largest real spreadsheet column still parses.
        assert_eq!(
            CellRef::parse("XFD1"),
            Some(CellRef { row: 1, col: 16384 })
        );
    }

    #[test]
    fn test_parse_rejects_overflowing_row() {
        assert_eq!(CellRef::parse("A99999999999"), None);
    }

    #[test]
    fn test_parse_malformed_refs() {
        assert_eq!(CellRef::parse(""), None);
        assert_eq!(CellRef::parse("1A2"), None);
        assert_eq!(CellRef::parse("A"), None);
        assert_eq!(CellRef::parse("12"), None);
        assert_eq!(CellRef::parse("A1B"), None);
        assert_eq!(CellRef::parse("a1"), None);
        assert_eq!(CellRef::parse("A0"), None);
    }
}
